//! Complex - a conjunction of per-attribute selectors.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Selector;

/// # Overview
///
/// A conjunctive condition: one [`Selector`] per attribute, covering an
/// example when every attribute value falls inside its selector.
///
/// Complexes are plain values. Specialization builds new complexes instead
/// of mutating in place, so candidates branched from the same parent never
/// alias each other.
///
/// # Examples
///
/// ```
/// use aq_rs::{Complex, Selector};
///
/// let most_general = Complex::most_general([3, 2]);
/// let example = vec![Selector::one_hot(3, 1), Selector::one_hot(2, 0)];
/// assert!(most_general.covers(&example));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Complex {
    selectors: Vec<Selector>
}

impl Complex {
    /// # Overview
    ///
    /// Creates a complex from explicit selectors.
    #[must_use]
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self {
            selectors
        }
    }

    /// # Overview
    ///
    /// The unique most general complex: every selector fully set.
    #[must_use]
    pub fn most_general(widths: impl IntoIterator<Item = usize>) -> Self {
        Self {
            selectors: widths.into_iter().map(Selector::full).collect()
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    #[inline]
    #[must_use]
    pub fn n_attributes(&self) -> usize {
        self.selectors.len()
    }

    /// # Overview
    ///
    /// Covering test: does every attribute selector accept the example's
    /// encoded value?
    ///
    /// This is the one primitive shared by generality comparison, beam
    /// scoring, and classification.
    #[inline]
    #[must_use]
    pub fn covers(&self, example: &[Selector]) -> bool {
        debug_assert_eq!(self.selectors.len(), example.len());
        self.selectors.iter().zip(example).all(|(selector, value)| selector.contains_all(value))
    }

    /// # Overview
    ///
    /// True when every selector of `self` is a superset of the matching
    /// selector of `other` - `self` covers everything `other` covers.
    #[inline]
    #[must_use]
    pub fn more_general_than(&self, other: &Self) -> bool {
        debug_assert_eq!(self.selectors.len(), other.selectors.len());
        self.selectors
            .iter()
            .zip(&other.selectors)
            .all(|(a, b)| a.contains_all(b))
    }

    /// # Overview
    ///
    /// AQ specialization against one negative example.
    ///
    /// For each attribute where `seed` and `negative` carry different
    /// values, produces one copy of `self` with the negative's bits removed
    /// from that attribute's selector. The results are the maximally general
    /// complexes below `self` that exclude the negative while still covering
    /// the seed. Attributes where seed and negative agree are untouched:
    /// narrowing there would drop the seed together with the negative.
    ///
    /// Returns an empty list when seed and negative agree on every
    /// attribute; such a pair cannot be separated in this representation.
    ///
    /// Callers must only pass negatives currently covered by `self`.
    #[must_use]
    pub fn specialize(&self, negative: &[Selector], seed: &[Selector]) -> Vec<Self> {
        debug_assert!(self.covers(negative));
        debug_assert!(self.covers(seed));

        let mut specialized = Vec::new();
        for (i, (neg, pos)) in negative.iter().zip(seed).enumerate() {
            if neg == pos {
                continue;
            }
            let mut selectors = self.selectors.clone();
            selectors[i] = selectors[i].without(neg);
            specialized.push(Self {
                selectors
            });
        }
        specialized
    }

    /// # Overview
    ///
    /// Number of constrained attributes (selectors not fully set).
    #[must_use]
    pub fn complexity(&self) -> usize {
        self.selectors.iter().filter(|s| !s.is_full()).count()
    }

    /// # Overview
    ///
    /// True when no attribute is constrained: the complex covers everything.
    #[must_use]
    pub fn is_most_general(&self) -> bool {
        self.selectors.iter().all(Selector::is_full)
    }
}

impl core::fmt::Display for Complex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_most_general() {
            return write!(f, "TRUE");
        }

        let mut first = true;
        for (i, selector) in self.selectors.iter().enumerate() {
            if selector.is_full() {
                continue;
            }
            if !first {
                write!(f, " AND ")?;
            }
            write!(f, "x[{i}] in {selector}")?;
            first = false;
        }
        Ok(())
    }
}
