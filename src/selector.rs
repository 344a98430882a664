//! Packed bit vectors over attribute domains.
//!
//! A [`Selector`] holds one bit per value of a single attribute's domain.
//! Example values are one-hot selectors; rule conditions are arbitrary
//! subsets; the all-ones selector accepts every value.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// # Overview
///
/// Fixed-width bit vector packed into u64 words.
///
/// Bit `i` corresponds to position `i` of the attribute's domain. Domains
/// rarely exceed 64 values, so the single inline word avoids heap
/// allocation in the common case.
///
/// # Examples
///
/// ```
/// use aq_rs::Selector;
///
/// let any = Selector::full(3);
/// let v2 = Selector::one_hot(3, 1);
/// assert!(any.contains_all(&v2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Selector {
    words: SmallVec<[u64; 1]>,
    width: usize
}

impl Selector {
    /// # Overview
    ///
    /// Creates a selector with every bit set: accepts any value.
    #[must_use]
    pub fn full(width: usize) -> Self {
        let n_words = width.div_ceil(64);
        let mut words = SmallVec::from_elem(!0u64, n_words);
        if let Some(last) = words.last_mut() {
            *last &= Self::tail_mask(width);
        }
        Self {
            words,
            width
        }
    }

    /// # Overview
    ///
    /// Creates a selector with no bits set.
    #[must_use]
    pub fn empty(width: usize) -> Self {
        Self {
            words: SmallVec::from_elem(0u64, width.div_ceil(64)),
            width
        }
    }

    /// # Overview
    ///
    /// Creates a one-hot selector with only `bit` set.
    #[must_use]
    pub fn one_hot(width: usize, bit: usize) -> Self {
        debug_assert!(bit < width);
        let mut s = Self::empty(width);
        s.words[bit / 64] |= 1u64 << (bit % 64);
        s
    }

    /// # Overview
    ///
    /// Creates a selector from a 0/1 slice, bit `i` taken from `bits[i]`.
    #[must_use]
    pub fn from_bits(bits: &[u8]) -> Self {
        let mut s = Self::empty(bits.len());
        for (i, &b) in bits.iter().enumerate() {
            if b != 0 {
                s.words[i / 64] |= 1u64 << (i % 64);
            }
        }
        s
    }

    #[inline(always)]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// # Overview
    ///
    /// Tests whether bit `i` is set.
    #[inline]
    #[must_use]
    pub fn bit(&self, i: usize) -> bool {
        debug_assert!(i < self.width);
        (self.words[i / 64] >> (i % 64)) & 1 != 0
    }

    /// # Overview
    ///
    /// Superset test: every bit set in `other` is also set in `self`.
    ///
    /// One AND per word covers 64 domain values per operation.
    #[inline]
    #[must_use]
    pub fn contains_all(&self, other: &Self) -> bool {
        debug_assert_eq!(self.width, other.width);
        self.words.iter().zip(&other.words).all(|(a, b)| a & b == *b)
    }

    /// # Overview
    ///
    /// Returns a copy of `self` with every bit of `other` cleared.
    #[must_use]
    pub fn without(&self, other: &Self) -> Self {
        debug_assert_eq!(self.width, other.width);
        let words = self.words.iter().zip(&other.words).map(|(a, b)| a & !b).collect();
        Self {
            words,
            width: self.width
        }
    }

    /// # Overview
    ///
    /// Number of set bits.
    #[inline]
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// # Overview
    ///
    /// True when every bit is set: the selector accepts any value.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count_ones() == self.width
    }

    /// # Overview
    ///
    /// Iterates the positions of set bits in ascending order.
    pub fn set_bits(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width).filter(|&i| self.bit(i))
    }

    /// Mask for the last word, clearing bits past `width`.
    #[inline]
    const fn tail_mask(width: usize) -> u64 {
        let rem = width % 64;
        if rem == 0 { !0 } else { (1u64 << rem) - 1 }
    }
}

impl core::fmt::Display for Selector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for i in 0..self.width {
            f.write_str(if self.bit(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_masks_tail() {
        let s = Selector::full(70);
        assert_eq!(s.count_ones(), 70);
        assert!(s.is_full());
        assert!(s.bit(69));
    }

    #[test]
    fn one_hot_single_bit() {
        let s = Selector::one_hot(5, 2);
        assert_eq!(s.count_ones(), 1);
        assert!(s.bit(2));
        assert!(!s.bit(0));
    }

    #[test]
    fn contains_all_superset() {
        let a = Selector::from_bits(&[0, 1, 1, 0, 1]);
        let b = Selector::from_bits(&[0, 1, 0, 0, 1]);

        assert!(a.contains_all(&b));
        assert!(!b.contains_all(&a));
    }

    #[test]
    fn contains_all_disjoint_bit() {
        let a = Selector::from_bits(&[0, 1, 0, 0, 1]);
        let b = Selector::from_bits(&[1, 1, 1, 0, 1]);

        assert!(!a.contains_all(&b));
    }

    #[test]
    fn without_clears_bits() {
        let a = Selector::full(4);
        let b = Selector::one_hot(4, 3);
        let c = a.without(&b);

        assert_eq!(c, Selector::from_bits(&[1, 1, 1, 0]));
    }

    #[test]
    fn set_bits_ascending() {
        let s = Selector::from_bits(&[1, 0, 1, 1]);
        let bits: Vec<usize> = s.set_bits().collect();
        assert_eq!(bits, vec![0, 2, 3]);
    }

    #[test]
    fn display_bit_order() {
        let s = Selector::from_bits(&[0, 1, 1, 1]);
        assert_eq!(format!("{s}"), "0111");
    }

    #[test]
    fn wide_selector_spills_to_heap() {
        let s = Selector::one_hot(130, 128);
        assert!(s.bit(128));
        assert_eq!(s.count_ones(), 1);
        assert!(Selector::full(130).contains_all(&s));
    }
}
