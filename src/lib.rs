//! # AQ Rule Induction
//!
//! Rust implementation of the AQ (Algorithm Quasi-optimal) covering
//! algorithm: induces a minimal set of general conjunctive rules over
//! categorical attributes and classifies unseen examples by majority vote.
//!
//! # Features
//!
//! - `std` (default): Standard library support
//! - `serde`: Serialization support for configs, complexes and rules
//! - `parallel`: Parallel beam scoring via rayon
//!
//! # Examples
//!
//! ```
//! use aq_rs::{AqLearner, Config};
//!
//! let config = Config::builder().beam_width(2).build().unwrap();
//! let domains = vec![
//!     vec!["sunny", "overcast", "rain"],
//!     vec!["hot", "mild", "cool"],
//! ];
//!
//! let mut learner = AqLearner::new(config, domains).unwrap();
//! learner
//!     .load_training_data(&[
//!         (vec!["sunny", "hot"], "no"),
//!         (vec!["overcast", "mild"], "yes"),
//!         (vec!["rain", "cool"], "yes"),
//!     ])
//!     .unwrap();
//! learner.induce_rules().unwrap();
//!
//! assert_eq!(learner.classify(&["overcast", "mild"]).unwrap(), Some("yes"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod complex;
mod config;
mod domain;
pub mod error;
mod learner;
mod rule;
mod selector;
pub mod star;
mod store;
pub mod utils;

pub use complex::Complex;
pub use config::{Config, ConfigBuilder, DEFAULT_RNG_SEED, SeedMode};
pub use domain::DomainRegistry;
pub use error::{Error, Result};
pub use learner::{AqLearner, InduceReport};
pub use rule::Rule;
pub use selector::Selector;
pub use store::{EncodedExample, ExampleStore};
