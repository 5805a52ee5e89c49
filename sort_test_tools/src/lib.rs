//! Shared tooling for testing and benchmarking sort implementations.

use std::cmp::Ordering;

/// A sort under test, addressed by type so the generic checks can be instantiated per sort.
pub trait Sort {
    /// Printed by the tests and used as benchmark name prefix.
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
