//! Recursive quicksort with a Lomuto partition and a fixed last-element pivot.
//!
//! The sort is unstable, in-place and allocation free. With the last element as pivot already
//! sorted, reverse sorted and all equal inputs hit the *O*(*n*^2) worst case with a recursion depth
//! of *n* - 1. That is a property of this sort, not something it tries to avoid. Use
//! [`slice::sort_unstable`] when you need a worst-case guarantee.

use core::cmp::Ordering;
use core::mem;

mod error;
mod partition;
mod quicksort;
mod stats;

pub use error::RangeError;
pub use stats::SortStats;

use error::{check_partition_range, check_sort_range};
use stats::Tally;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case.
///
/// # Examples
///
/// ```
/// let mut v = [10, 7, 8, 9, 1, 5];
///
/// lomuto_quicksort::sort(&mut v);
/// assert_eq!(v, [1, 5, 7, 8, 9, 10]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, &mut |a: &T, b: &T| a.lt(b), &mut ());
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but the slice still holds the
/// original set of elements.
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
///
/// // reverse sorting
/// lomuto_quicksort::sort_by(&mut v, |a, b| b.cmp(a));
/// assert_eq!(v, [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(
        v,
        &mut |a: &T, b: &T| compare(a, b) == Ordering::Less,
        &mut (),
    );
}

/// Sorts the inclusive range `v[low..=high]`, leaving everything outside of it untouched.
///
/// `low >= high` is a no-op, as long as the range is valid.
///
/// # Panics
///
/// Panics if `high` is out of bounds or `low > high + 1`, see [`RangeError`].
#[inline]
pub fn sort_range<T>(v: &mut [T], low: usize, high: usize)
where
    T: Ord,
{
    if let Err(err) = try_sort_range(v, low, high) {
        panic!("{err}");
    }
}

/// Same as [`sort_range`] with a comparator function.
///
/// # Panics
///
/// Panics if `high` is out of bounds or `low > high + 1`, see [`RangeError`].
#[inline]
pub fn sort_range_by<T, F>(v: &mut [T], low: usize, high: usize, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if let Err(err) = try_sort_range_by(v, low, high, compare) {
        panic!("{err}");
    }
}

/// Sorts the inclusive range `v[low..=high]` or reports why the range is unusable.
///
/// ```
/// let mut v = [9, 3, 2, 1, 0];
///
/// lomuto_quicksort::try_sort_range(&mut v, 1, 3).unwrap();
/// assert_eq!(v, [9, 1, 2, 3, 0]);
///
/// assert!(lomuto_quicksort::try_sort_range(&mut v, 0, 5).is_err());
/// ```
#[inline]
pub fn try_sort_range<T>(v: &mut [T], low: usize, high: usize) -> Result<(), RangeError>
where
    T: Ord,
{
    try_sort_range_by(v, low, high, T::cmp)
}

/// Same as [`try_sort_range`] with a comparator function.
#[inline]
pub fn try_sort_range_by<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    mut compare: F,
) -> Result<(), RangeError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_sort_range(v.len(), low, high)?;

    if low >= high {
        return Ok(());
    }

    unstable_sort(
        &mut v[low..=high],
        &mut |a: &T, b: &T| compare(a, b) == Ordering::Less,
        &mut (),
    );

    Ok(())
}

/// Partitions `v[low..=high]` around the pivot `v[high]` and returns the final index of the pivot.
///
/// Elements less than the pivot end up in `v[low..mid]`, all others, including elements equal to
/// the pivot, end up in `v[(mid + 1)..=high]`.
///
/// ```
/// let mut v = [2, 1];
///
/// assert_eq!(lomuto_quicksort::partition(&mut v, 0, 1), 0);
/// assert_eq!(v, [1, 2]);
/// ```
///
/// # Panics
///
/// Panics if `high` is out of bounds or `low > high`.
#[inline]
pub fn partition<T>(v: &mut [T], low: usize, high: usize) -> usize
where
    T: Ord,
{
    partition_by(v, low, high, T::cmp)
}

/// Same as [`partition`] with a comparator function.
///
/// # Panics
///
/// Panics if `high` is out of bounds or `low > high`.
#[inline]
pub fn partition_by<T, F>(v: &mut [T], low: usize, high: usize, compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    match try_partition_by(v, low, high, compare) {
        Ok(mid) => mid,
        Err(err) => panic!("{err}"),
    }
}

/// Partitions `v[low..=high]` like [`partition`] or reports why the range is unusable.
#[inline]
pub fn try_partition<T>(v: &mut [T], low: usize, high: usize) -> Result<usize, RangeError>
where
    T: Ord,
{
    try_partition_by(v, low, high, T::cmp)
}

/// Same as [`try_partition`] with a comparator function.
#[inline]
pub fn try_partition_by<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    mut compare: F,
) -> Result<usize, RangeError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_partition_range(v.len(), low, high)?;

    let mid = partition::lomuto_partition(
        &mut v[low..=high],
        &mut |a: &T, b: &T| compare(a, b) == Ordering::Less,
        &mut (),
    );

    Ok(low + mid)
}

/// Sorts the slice like [`sort`] and returns what it took to do so.
///
/// ```
/// let mut v: Vec<i32> = (0..100).collect();
///
/// let stats = lomuto_quicksort::sort_with_stats(&mut v);
/// assert_eq!(stats.max_depth, 99);
/// ```
#[inline]
pub fn sort_with_stats<T>(v: &mut [T]) -> SortStats
where
    T: Ord,
{
    let mut stats = SortStats::default();
    unstable_sort(v, &mut |a: &T, b: &T| a.lt(b), &mut stats);

    stats
}

/// Sorts the slice like [`sort_by`] and returns what it took to do so.
#[inline]
pub fn sort_by_with_stats<T, F>(v: &mut [T], mut compare: F) -> SortStats
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut stats = SortStats::default();
    unstable_sort(
        v,
        &mut |a: &T, b: &T| compare(a, b) == Ordering::Less,
        &mut stats,
    );

    stats
}

// --- IMPL ---

#[inline]
fn unstable_sort<T, F, S>(v: &mut [T], is_less: &mut F, tally: &mut S)
where
    F: FnMut(&T, &T) -> bool,
    S: Tally,
{
    // Sorting has no meaningful behavior on zero-sized types. Do nothing.
    if mem::size_of::<T>() == 0 {
        return;
    }

    quicksort::quicksort(v, is_less, 0, tally);
}
