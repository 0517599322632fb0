use core::cmp::Ordering;
use core::convert::Infallible;

use crate::error::{Result, SequenceError};

/// Sorts the slice in ascending order, swapping on every improving comparison.
///
/// Performs exactly *n* \* (*n* - 1) / 2 comparisons and up to as many swaps. Equal elements may
/// be reordered.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_with_swap_count(v);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let swaps = sort_total(v, |a, b| compare(a, b) == Ordering::Less);
    tracing::trace!(len = v.len(), swaps, "swap_on_improve sort_by");
}

/// Like [`sort_by`] but for comparisons that may have no answer, eg. `f64::partial_cmp`.
///
/// Stops at the first unordered pair and reports its positions. The slice then still holds all of
/// its original elements, in unspecified order.
pub fn try_sort_by<T, F>(v: &mut [T], mut compare: F) -> Result<()>
where
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    let mut is_less = |a: &T, b: &T| compare(a, b).map(Ordering::is_lt).ok_or(());
    let swaps = selection_sort(v, &mut is_less)
        .map_err(|((), left, right)| SequenceError::Incomparable { left, right })?;
    tracing::trace!(len = v.len(), swaps, "swap_on_improve try_sort_by");

    Ok(())
}

/// Sorts the slice and returns how many swaps it took.
pub fn sort_with_swap_count<T>(v: &mut [T]) -> usize
where
    T: Ord,
{
    let swaps = sort_total(v, T::lt);
    tracing::trace!(len = v.len(), swaps, "swap_on_improve sort");

    swaps
}

/// Runs the sort with a comparison that always has an answer.
fn sort_total<T>(v: &mut [T], mut is_less: impl FnMut(&T, &T) -> bool) -> usize {
    match selection_sort(v, &mut |a: &T, b: &T| Ok::<_, Infallible>(is_less(a, b))) {
        Ok(swaps) => swaps,
        Err((never, ..)) => match never {},
    }
}

/// For every position `i`, compares `v[i]` against each later element and swaps whenever the
/// later one is less. After the inner loop `v[i]` holds the minimum of `v[i..]`.
///
/// An `is_less` error aborts the sort and comes back with the two positions being compared.
fn selection_sort<T, E, F>(
    v: &mut [T],
    is_less: &mut F,
) -> core::result::Result<usize, (E, usize, usize)>
where
    F: FnMut(&T, &T) -> core::result::Result<bool, E>,
{
    let len = v.len();
    let mut swaps = 0;

    for i in 0..len {
        for j in (i + 1)..len {
            if is_less(&v[j], &v[i]).map_err(|err| (err, i, j))? {
                v.swap(i, j);
                swaps += 1;
            }
        }
    }

    Ok(swaps)
}
