//! Induced rules: a complex paired with the class it predicts.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Complex;

/// # Overview
///
/// One induced rule: IF the complex covers an example THEN predict the
/// label. Produced exactly once per completed rule-building pass and
/// immutable afterwards.
///
/// # Examples
///
/// ```
/// use aq_rs::{Complex, Rule};
///
/// let rule = Rule::new(Complex::most_general([3, 2]), "pos");
/// assert_eq!(rule.complexity(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule<C> {
    complex: Complex,
    label:   C
}

impl<C> Rule<C> {
    #[must_use]
    pub fn new(complex: Complex, label: C) -> Self {
        Self {
            complex,
            label
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn complex(&self) -> &Complex {
        &self.complex
    }

    #[inline(always)]
    #[must_use]
    pub const fn label(&self) -> &C {
        &self.label
    }

    /// # Overview
    ///
    /// Number of constrained attributes in the rule's condition.
    #[must_use]
    pub fn complexity(&self) -> usize {
        self.complex.complexity()
    }
}

impl<C: core::fmt::Display> core::fmt::Display for Rule<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "IF {} THEN {}", self.complex, self.label)
    }
}
