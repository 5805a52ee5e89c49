use crate::partition::lomuto_partition;
use crate::stats::Tally;

/// Sorts `v` recursively.
///
/// The pivot is always the last element of the current sub-slice and both sides are recursed into.
/// There is no recursion limit and no fallback, ascending, descending and all equal inputs recurse
/// once per element and take *O*(*n*^2) comparisons.
///
/// `depth` is the number of partition steps enclosing `v`.
pub(crate) fn quicksort<T, F, S>(v: &mut [T], is_less: &mut F, depth: usize, tally: &mut S)
where
    F: FnMut(&T, &T) -> bool,
    S: Tally,
{
    if v.len() < 2 {
        return;
    }

    tally.partition(depth);
    let mid = lomuto_partition(v, is_less, tally);

    // Split the slice into `left`, `pivot`, and `right`. The pivot is in its final position.
    let (left, right) = v.split_at_mut(mid);
    let right = &mut right[1..];

    quicksort(left, is_less, depth + 1, tally);
    quicksort(right, is_less, depth + 1, tally);
}
