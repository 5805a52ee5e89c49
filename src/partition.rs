use crate::stats::Tally;

/// Partitions `v` around its last element and returns the final position of that element.
///
/// Uses the Lomuto scheme: a single left-to-right scan that swaps every element that is less than
/// the pivot to the front. Elements equal to the pivot stay on the right side. Afterwards all
/// elements in `v[..mid]` are less than the pivot, the pivot is at `mid` and all elements in
/// `v[(mid + 1)..]` are not less than the pivot.
///
/// Panics if `v` is empty.
pub(crate) fn lomuto_partition<T, F, S>(v: &mut [T], is_less: &mut F, tally: &mut S) -> usize
where
    F: FnMut(&T, &T) -> bool,
    S: Tally,
{
    let pivot_pos = v.len() - 1;

    let (v_without_pivot, pivot) = v.split_at_mut(pivot_pos);
    let pivot = &pivot[0];

    // One past the boundary cursor. Everything in `v_without_pivot[..lt_count]` is less than the
    // pivot, everything in `v_without_pivot[lt_count..r]` is not.
    let mut lt_count = 0;
    for r in 0..v_without_pivot.len() {
        tally.comparison();
        if is_less(&v_without_pivot[r], pivot) {
            swap(v_without_pivot, lt_count, r, tally);
            lt_count += 1;
        }
    }

    // Place the pivot between the two partitions.
    swap(v, lt_count, pivot_pos, tally);

    lt_count
}

/// Exchanges `v[a]` and `v[b]`. Swapping a position with itself leaves `v` as is.
#[inline(always)]
fn swap<T, S: Tally>(v: &mut [T], a: usize, b: usize, tally: &mut S) {
    if a != b {
        v.swap(a, b);
        tally.swap();
    }
}
