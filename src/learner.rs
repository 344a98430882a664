//! The AQ learner: seed-driven star generation and rule-set classification.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Complex, Config, DomainRegistry, Rule, SeedMode,
    error::{Error, Result},
    star::{prune_to_maximal, select_top_m},
    store::{EncodedExample, ExampleStore},
    utils::{FastRng, rng_from_seed}
};

/// # Overview
///
/// Statistics from one `induce_rules` call.
///
/// `unseparable_residual` counts training examples that share identical
/// attribute values with an example of a different class. Such pairs
/// cannot be told apart in the one-hot representation; induction skips
/// them during specialization and the rules for the conflicting classes
/// overlap on those rows. A non-zero count is a property of the data, not
/// a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InduceReport {
    pub rules_built:          usize,
    pub unseparable_residual: usize
}

/// # Overview
///
/// AQ rule learner over categorical attributes.
///
/// Generic over the attribute value type `V` and the class label type `C`.
/// Rules are induced once from loaded training data; classification scans
/// the rule list with a majority vote.
///
/// # Examples
///
/// ```
/// use aq_rs::{AqLearner, Config};
///
/// let config = Config::builder().beam_width(2).build().unwrap();
/// let domains = vec![vec!["a", "b"], vec!["x", "y"]];
/// let mut learner = AqLearner::new(config, domains).unwrap();
///
/// let rows = vec![
///     (vec!["a", "x"], "pos"),
///     (vec!["b", "y"], "neg"),
/// ];
/// learner.load_training_data(&rows).unwrap();
/// learner.induce_rules().unwrap();
///
/// assert_eq!(learner.classify(&["a", "x"]).unwrap(), Some("pos"));
/// ```
#[derive(Debug, Clone)]
pub struct AqLearner<V, C> {
    config:   Config,
    registry: DomainRegistry<V>,
    store:    ExampleStore<C>,
    rules:    Vec<Rule<C>>,
    rng:      FastRng
}

impl<V: PartialEq, C: Clone + PartialEq> AqLearner<V, C> {
    /// # Overview
    ///
    /// Creates a learner from a validated config and per-attribute value
    /// domains. The engine RNG is seeded here, once, and never re-seeded.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidBeamWidth`], [`Error::NoDomains`] or
    /// [`Error::EmptyDomain`] on malformed construction parameters.
    pub fn new(config: Config, domains: Vec<Vec<V>>) -> Result<Self> {
        config.validate()?;
        let registry = DomainRegistry::new(domains)?;
        let rng = rng_from_seed(config.rng_seed);

        Ok(Self {
            config,
            registry,
            store: ExampleStore::new(),
            rules: Vec::new(),
            rng
        })
    }

    /// Quick constructor with default seed handling.
    ///
    /// Equivalent to `Config::builder().beam_width(m).build()` followed by
    /// `AqLearner::new(config, domains)`.
    ///
    /// # Panics
    ///
    /// Panics if `beam_width` is zero or any domain is empty.
    #[must_use]
    pub fn quick(beam_width: usize, domains: Vec<Vec<V>>) -> Self {
        let config = Config::builder()
            .beam_width(beam_width)
            .build()
            .expect("invalid quick config");
        Self::new(config, domains).expect("invalid quick domains")
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn registry(&self) -> &DomainRegistry<V> {
        &self.registry
    }

    /// # Overview
    ///
    /// Number of loaded training examples.
    #[inline]
    #[must_use]
    pub fn n_examples(&self) -> usize {
        self.store.len()
    }

    /// # Overview
    ///
    /// Encodes and stores labeled rows. All-or-nothing: on error nothing
    /// is stored. May be called several times before induction; rows
    /// append in order.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownValue`] for a value outside its declared domain,
    /// [`Error::ArityMismatch`] for a row of the wrong length.
    pub fn load_training_data(&mut self, rows: &[(Vec<V>, C)]) -> Result<()> {
        let mut encoded = Vec::with_capacity(rows.len());
        for (values, label) in rows {
            encoded.push(EncodedExample::new(self.registry.encode_row(values)?, label.clone()));
        }
        for example in encoded {
            self.store.push(example);
        }
        Ok(())
    }

    /// # Overview
    ///
    /// Runs star generation to completion: one rule per pass until every
    /// training example is covered. A second call with nothing left
    /// uncovered is a no-op and reports zero new rules.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyDataset`] when no training data was loaded.
    pub fn induce_rules(&mut self) -> Result<InduceReport> {
        if self.store.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let mut rules_built = 0;
        while !self.store.uncovered_is_empty() {
            self.build_one_rule();
            rules_built += 1;
        }

        Ok(InduceReport {
            rules_built,
            unseparable_residual: self.count_unseparable()
        })
    }

    /// One rule-building pass: draw a seed, specialize a star of candidate
    /// complexes against every conflicting training example, keep the best
    /// complex as a rule, then shrink the uncovered set.
    fn build_one_rule(&mut self) {
        let position = match self.config.seed_mode {
            SeedMode::Deterministic => 0,
            SeedMode::PseudoRandom => {
                self.rng.random_range(0..self.store.uncovered_len() as u64) as usize
            }
        };
        let seed_index = self.store.uncovered_indices()[position];
        let seed = self.store.examples()[seed_index].clone();

        let mut star = vec![Complex::most_general(self.registry.widths())];

        // The scan runs over the full training set, not just the uncovered
        // subset: a candidate must exclude negatives that older rules
        // already cover, or the new rule would re-admit them.
        for x in self.store.examples() {
            if x.label() == seed.label() || x.attributes() == seed.attributes() {
                continue;
            }

            let mut kept = Vec::with_capacity(star.len());
            let mut specialized = Vec::new();
            for complex in star {
                if complex.covers(x.attributes()) {
                    specialized.extend(complex.specialize(x.attributes(), seed.attributes()));
                } else {
                    kept.push(complex);
                }
            }
            kept.extend(specialized);

            star = prune_to_maximal(kept);
            star = select_top_m(self.config.beam_width, star, seed.label(), &self.store);
        }

        let best = select_top_m(1, star, seed.label(), &self.store)
            .into_iter()
            .next()
            .expect("star always holds at least one complex");

        self.store.finalize_pass(seed_index, &best);
        self.rules.push(Rule::new(best, seed.label().clone()));
    }

    /// Counts training examples whose attribute values also appear under a
    /// different class label.
    fn count_unseparable(&self) -> usize {
        let examples = self.store.examples();
        examples
            .iter()
            .filter(|x| {
                examples
                    .iter()
                    .any(|y| y.label() != x.label() && y.attributes() == x.attributes())
            })
            .count()
    }

    /// # Overview
    ///
    /// Classifies a raw attribute row by majority vote over the covering
    /// rules. Returns `None` when no rule covers the row.
    ///
    /// On a vote tie the winner is the class that reached the winning
    /// count first while scanning the rule list in storage order, so the
    /// outcome is reproducible.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownValue`] / [`Error::ArityMismatch`] for malformed
    /// rows; batch callers can treat a per-row error as a skip.
    pub fn classify(&self, row: &[V]) -> Result<Option<C>> {
        let encoded = self.registry.encode_row(row)?;

        let mut counts: Vec<(&C, usize)> = Vec::new();
        let mut best: Option<(usize, usize)> = None;

        for rule in &self.rules {
            if !rule.complex().covers(&encoded) {
                continue;
            }
            let index = match counts.iter().position(|(label, _)| *label == rule.label()) {
                Some(i) => {
                    counts[i].1 += 1;
                    i
                }
                None => {
                    counts.push((rule.label(), 1));
                    counts.len() - 1
                }
            };
            let count = counts[index].1;
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((index, count));
            }
        }

        Ok(best.map(|(index, _)| counts[index].0.clone()))
    }

    /// # Overview
    ///
    /// Classifies many rows; a malformed row yields its own error without
    /// aborting the rest of the batch.
    #[must_use]
    pub fn classify_batch(&self, rows: &[Vec<V>]) -> Vec<Result<Option<C>>> {
        rows.iter().map(|row| self.classify(row)).collect()
    }

    /// # Overview
    ///
    /// Read-only snapshot of the induced rule set, in induction order.
    #[inline]
    #[must_use]
    pub fn rules(&self) -> &[Rule<C>] {
        &self.rules
    }
}

#[cfg(feature = "std")]
impl<V, C> AqLearner<V, C>
where
    V: PartialEq + core::fmt::Display,
    C: Clone + PartialEq + core::fmt::Display
{
    /// # Overview
    ///
    /// Renders every rule with actual domain values, e.g.
    /// `IF outlook in {sunny, rain} THEN no`.
    #[must_use]
    pub fn describe_rules(&self) -> Vec<String> {
        self.rules
            .iter()
            .map(|rule| {
                let mut parts = Vec::new();
                for (i, selector) in rule.complex().selectors().iter().enumerate() {
                    if selector.is_full() {
                        continue;
                    }
                    let values: Vec<String> = selector
                        .set_bits()
                        .filter_map(|bit| self.registry.value(i, bit))
                        .map(ToString::to_string)
                        .collect();
                    parts.push(format!("x[{i}] in {{{}}}", values.join(", ")));
                }
                if parts.is_empty() {
                    format!("IF TRUE THEN {}", rule.label())
                } else {
                    format!("IF {} THEN {}", parts.join(" AND "), rule.label())
                }
            })
            .collect()
    }
}
