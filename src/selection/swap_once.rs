use core::cmp::Ordering;
use core::convert::Infallible;

use crate::error::{Result, SequenceError};

/// Textbook selection sort. Finds the minimum of the unsorted suffix first and swaps at most once
/// per position.
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
    tracing::trace!(len = v.len(), swaps, "swap_once sort_by");
}

pub fn try_sort_by<T, F>(v: &mut [T], mut compare: F) -> Result<()>
where
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    let mut is_less = |a: &T, b: &T| compare(a, b).map(Ordering::is_lt).ok_or(());
    let swaps = selection_sort(v, &mut is_less)
        .map_err(|((), left, right)| SequenceError::Incomparable { left, right })?;
    tracing::trace!(len = v.len(), swaps, "swap_once try_sort_by");

    Ok(())
}

/// Sorts the slice and returns how many swaps it took, never more than `v.len() - 1`.
pub fn sort_with_swap_count<T>(v: &mut [T]) -> usize
where
    T: Ord,
{
    let swaps = sort_total(v, T::lt);
    tracing::trace!(len = v.len(), swaps, "swap_once sort");

    swaps
}

fn sort_total<T>(v: &mut [T], mut is_less: impl FnMut(&T, &T) -> bool) -> usize {
    match selection_sort(v, &mut |a: &T, b: &T| Ok::<_, Infallible>(is_less(a, b))) {
        Ok(swaps) => swaps,
        Err((never, ..)) => match never {},
    }
}

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
        let mut min_idx = i;

        for j in (i + 1)..len {
            if is_less(&v[j], &v[min_idx]).map_err(|err| (err, min_idx, j))? {
                min_idx = j;
            }
        }

        if min_idx != i {
            v.swap(i, min_idx);
            swaps += 1;
        }
    }

    Ok(swaps)
}
