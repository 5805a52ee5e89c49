use core::cmp;

/// Counters collected by [`sort_with_stats`](crate::sort_with_stats) and
/// [`sort_by_with_stats`](crate::sort_by_with_stats).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortStats {
    /// Number of times the comparison function was called.
    pub comparisons: usize,
    /// Number of partition steps.
    pub partitions: usize,
    /// Number of exchanges between two distinct positions. Self-swaps are not counted.
    pub swaps: usize,
    /// Deepest nesting of partition steps. A single partition step has depth 1.
    pub max_depth: usize,
}

/// Sink for the events of a sort run.
///
/// The plain entry points use `()`, which compiles down to nothing. Both go through the exact same
/// sort code, so the numbers reported by `SortStats` are the ones of the uninstrumented sort.
pub(crate) trait Tally {
    fn comparison(&mut self);

    fn swap(&mut self);

    /// `depth` is the number of partition steps enclosing this one.
    fn partition(&mut self, depth: usize);
}

impl Tally for () {
    #[inline(always)]
    fn comparison(&mut self) {}

    #[inline(always)]
    fn swap(&mut self) {}

    #[inline(always)]
    fn partition(&mut self, _depth: usize) {}
}

impl Tally for SortStats {
    #[inline]
    fn comparison(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    fn swap(&mut self) {
        self.swaps += 1;
    }

    #[inline]
    fn partition(&mut self, depth: usize) {
        self.partitions += 1;
        self.max_depth = cmp::max(self.max_depth, depth + 1);
    }
}
