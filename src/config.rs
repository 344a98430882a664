//! Configuration and builder for the AQ learner.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default seed for the engine RNG, used when none is given.
pub const DEFAULT_RNG_SEED: u64 = 42;

/// # Overview
///
/// How the positive seed of each rule-building pass is drawn from the
/// uncovered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeedMode {
    /// First uncovered example, in load order.
    #[default]
    Deterministic,
    /// Uniformly random uncovered example, drawn from the engine RNG.
    /// Reproducible for a fixed `rng_seed` and input order.
    PseudoRandom
}

/// # Overview
///
/// Configuration parameters for an AQ learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use]
pub struct Config {
    pub beam_width: usize,
    pub seed_mode:  SeedMode,
    pub rng_seed:   u64
}

impl Config {
    /// # Overview
    ///
    /// Creates a new ConfigBuilder.
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// # Overview
    ///
    /// Validates configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.beam_width == 0 {
            return Err(Error::InvalidBeamWidth);
        }
        Ok(())
    }
}

/// # Overview
///
/// Builder for Config with validation.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    beam_width: Option<usize>,
    seed_mode:  Option<SeedMode>,
    rng_seed:   Option<u64>
}

impl ConfigBuilder {
    /// # Overview
    ///
    /// Sets the beam width m: how many candidate complexes survive each
    /// trimming step (must be at least 1).
    pub fn beam_width(mut self, m: usize) -> Self {
        self.beam_width = Some(m);
        self
    }

    /// # Overview
    ///
    /// Sets the seed selection mode (default: Deterministic).
    pub fn seed_mode(mut self, mode: SeedMode) -> Self {
        self.seed_mode = Some(mode);
        self
    }

    /// # Overview
    ///
    /// Sets the engine RNG seed (default: 42). Only consulted in
    /// PseudoRandom mode.
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// # Overview
    ///
    /// Builds and validates the Config.
    pub fn build(self) -> Result<Config> {
        let config = Config {
            beam_width: self.beam_width.ok_or(Error::InvalidBeamWidth)?,
            seed_mode:  self.seed_mode.unwrap_or_default(),
            rng_seed:   self.rng_seed.unwrap_or(DEFAULT_RNG_SEED)
        };
        config.validate()?;
        Ok(config)
    }
}
