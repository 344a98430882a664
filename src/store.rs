//! Training examples and the uncovered-subset bookkeeping.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Complex, Selector};

/// # Overview
///
/// One training example: encoded attribute values plus its class label.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncodedExample<C> {
    attributes: Vec<Selector>,
    label:      C
}

impl<C> EncodedExample<C> {
    #[must_use]
    pub fn new(attributes: Vec<Selector>, label: C) -> Self {
        Self {
            attributes,
            label
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn attributes(&self) -> &[Selector] {
        &self.attributes
    }

    #[inline(always)]
    #[must_use]
    pub const fn label(&self) -> &C {
        &self.label
    }
}

/// # Overview
///
/// The full training set plus the subset not yet covered by any rule.
///
/// The training vec is fixed after loading; the uncovered subset is an
/// index list in load order that only ever shrinks, and only at the end of
/// a completed rule-building pass. Scoring during a pass therefore always
/// sees a stable view.
#[derive(Debug, Clone, Default)]
pub struct ExampleStore<C> {
    examples:  Vec<EncodedExample<C>>,
    uncovered: Vec<usize>
}

impl<C> ExampleStore<C> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            examples:  Vec::new(),
            uncovered: Vec::new()
        }
    }

    /// # Overview
    ///
    /// Appends an example; it starts uncovered.
    pub fn push(&mut self, example: EncodedExample<C>) {
        self.uncovered.push(self.examples.len());
        self.examples.push(example);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// # Overview
    ///
    /// The full training set, in load order.
    #[inline]
    #[must_use]
    pub fn examples(&self) -> &[EncodedExample<C>] {
        &self.examples
    }

    #[inline]
    #[must_use]
    pub fn uncovered_len(&self) -> usize {
        self.uncovered.len()
    }

    #[inline]
    #[must_use]
    pub fn uncovered_is_empty(&self) -> bool {
        self.uncovered.is_empty()
    }

    /// # Overview
    ///
    /// Indices of uncovered examples, in load order.
    #[inline]
    #[must_use]
    pub fn uncovered_indices(&self) -> &[usize] {
        &self.uncovered
    }

    /// # Overview
    ///
    /// Iterates the uncovered examples, in load order.
    pub fn uncovered(&self) -> impl Iterator<Item = &EncodedExample<C>> {
        self.uncovered.iter().map(|&i| &self.examples[i])
    }

    /// # Overview
    ///
    /// Pass-end update: drops the seed and everything the finalized
    /// complex covers from the uncovered subset.
    pub fn finalize_pass(&mut self, seed: usize, complex: &Complex) {
        let examples = &self.examples;
        self.uncovered
            .retain(|&i| i != seed && !complex.covers(examples[i].attributes()));
    }
}
