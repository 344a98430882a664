//! Star maintenance: generalization pruning and beam selection.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{Complex, Selector, store::ExampleStore};

/// # Overview
///
/// Net covering score of a complex against the uncovered set: covered
/// examples of `target` count +1, covered examples of any other class -1.
#[must_use]
pub fn score<C: PartialEq>(complex: &Complex, target: &C, store: &ExampleStore<C>) -> i64 {
    let mut rate = 0i64;
    for example in store.uncovered() {
        if complex.covers(example.attributes()) {
            rate += if example.label() == target { 1 } else { -1 };
        }
    }
    rate
}

/// # Overview
///
/// Removes every complex strictly subsumed by a more general one in the
/// same set. Identical complexes and incomparable pairs are all retained;
/// survivor order matches the input. Idempotent.
///
/// Keeps the star from growing without bound as specialization is applied
/// example after example.
#[must_use]
pub fn prune_to_maximal(star: Vec<Complex>) -> Vec<Complex> {
    let keep: Vec<bool> = star
        .iter()
        .map(|c| !star.iter().any(|other| other != c && other.more_general_than(c)))
        .collect();

    star.into_iter()
        .zip(keep)
        .filter_map(|(c, kept)| kept.then_some(c))
        .collect()
}

/// # Overview
///
/// Keeps the `m` best complexes by net covering score against the
/// uncovered set.
///
/// The sort is stable: complexes with equal scores stay in the order the
/// star produced them. With the `parallel` feature, scoring fans out over
/// rayon but results merge in input order, so the selection is identical
/// to the serial path. Returns everything when fewer than `m` exist.
#[must_use]
pub fn select_top_m<C: PartialEq>(
    m: usize,
    star: Vec<Complex>,
    target: &C,
    store: &ExampleStore<C>
) -> Vec<Complex> {
    let uncovered: Vec<(&[Selector], bool)> = store
        .uncovered()
        .map(|e| (e.attributes(), e.label() == target))
        .collect();

    let scores = score_all(&star, &uncovered);

    let mut scored: Vec<(i64, Complex)> = scores.into_iter().zip(star).collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(m);
    scored.into_iter().map(|(_, c)| c).collect()
}

#[inline]
fn score_against(complex: &Complex, uncovered: &[(&[Selector], bool)]) -> i64 {
    let mut rate = 0i64;
    for (attributes, is_target) in uncovered {
        if complex.covers(attributes) {
            rate += if *is_target { 1 } else { -1 };
        }
    }
    rate
}

#[cfg(not(feature = "parallel"))]
fn score_all(star: &[Complex], uncovered: &[(&[Selector], bool)]) -> Vec<i64> {
    star.iter().map(|c| score_against(c, uncovered)).collect()
}

#[cfg(feature = "parallel")]
fn score_all(star: &[Complex], uncovered: &[(&[Selector], bool)]) -> Vec<i64> {
    use rayon::prelude::*;
    star.par_iter().map(|c| score_against(c, uncovered)).collect()
}
