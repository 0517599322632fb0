//! Sorting and extremum helpers over arbitrary sequences.
//!
//! Every function here takes its input by `IntoIterator`. Owned collections are consumed, borrowed
//! ones are only read, so a caller's array or slice is never reordered behind their back. Sorting a
//! `[3, 1, 2]` array gives back a new `vec![1, 2, 3]` and leaves the array as it was.

use core::cmp::Ordering;

use crate::error::{Result, SequenceError};
use crate::selection::swap_on_improve;

/// Collects `data` into a `Vec` and selection sorts it in ascending order.
///
/// Uses the swap-on-improve variant, see [`crate::selection`]. Not stable.
pub fn sel_sort<I>(data: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut vals: Vec<I::Item> = data.into_iter().collect();
    swap_on_improve::sort(&mut vals);

    vals
}

pub fn sel_sort_by<I, F>(data: I, compare: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut vals: Vec<I::Item> = data.into_iter().collect();
    swap_on_improve::sort_by(&mut vals, compare);

    vals
}

/// Sorts elements that are only partially ordered, failing on the first pair without an order.
pub fn try_sel_sort<I>(data: I) -> Result<Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    let mut vals: Vec<I::Item> = data.into_iter().collect();
    if let Err(err) = swap_on_improve::try_sort_by(&mut vals, |a, b| a.partial_cmp(b)) {
        tracing::debug!(%err, len = vals.len(), "try_sel_sort aborted");
        return Err(err);
    }

    Ok(vals)
}

/// Returns the smallest element, the first one if several are equally small.
///
/// Fails with [`SequenceError::Empty`] instead of inventing a value for an empty sequence.
pub fn min<I>(values: I) -> Result<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    extremum_by(values, "min", |candidate, current| Some(candidate < current))
}

/// Returns the largest element, the first one if several are equally large.
pub fn max<I>(values: I) -> Result<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    extremum_by(values, "max", |candidate, current| Some(candidate > current))
}

pub fn min_by<I, F>(values: I, mut compare: F) -> Result<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    extremum_by(values, "min_by", |candidate, current| {
        Some(compare(candidate, current).is_lt())
    })
}

pub fn max_by<I, F>(values: I, mut compare: F) -> Result<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    extremum_by(values, "max_by", |candidate, current| {
        Some(compare(candidate, current).is_gt())
    })
}

/// [`min`] for partially ordered elements.
pub fn try_min<I>(values: I) -> Result<I::Item>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    extremum_by(values, "try_min", |candidate, current| {
        candidate.partial_cmp(current).map(Ordering::is_lt)
    })
}

/// [`max`] for partially ordered elements.
pub fn try_max<I>(values: I) -> Result<I::Item>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    extremum_by(values, "try_max", |candidate, current| {
        candidate.partial_cmp(current).map(Ordering::is_gt)
    })
}

// Single pass, seeded with the first element. The running extremum only changes on a strict
// improvement, which is what makes ties resolve to the earliest element.
fn extremum_by<I, F>(values: I, op: &'static str, mut replaces: F) -> Result<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Option<bool>,
{
    let mut iter = values.into_iter().enumerate();

    let Some((mut best_idx, mut best)) = iter.next() else {
        tracing::debug!(op, "extremum of empty sequence");
        return Err(SequenceError::Empty { op });
    };

    for (idx, val) in iter {
        match replaces(&val, &best) {
            Some(true) => {
                best = val;
                best_idx = idx;
            }
            Some(false) => {}
            None => {
                let err = SequenceError::Incomparable {
                    left: best_idx,
                    right: idx,
                };
                tracing::debug!(op, %err, "extremum aborted");
                return Err(err);
            }
        }
    }

    Ok(best)
}
