use std::cmp::Ordering;
use std::env;

use criterion::{black_box, Criterion};

use sort_test_tools::Sort;

use crate::modules::util;

pub struct LomutoQuicksort;

impl Sort for LomutoQuicksort {
    fn name() -> String {
        "lomuto_quicksort_unstable".into()
    }

    #[inline]
    fn sort<T: Ord>(v: &mut [T]) {
        lomuto_quicksort::sort(v);
    }

    #[inline]
    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        lomuto_quicksort::sort_by(v, compare);
    }
}

/// Baseline.
pub struct StdUnstable;

impl Sort for StdUnstable {
    fn name() -> String {
        "rust_std_unstable".into()
    }

    #[inline]
    fn sort<T: Ord>(v: &mut [T]) {
        v.sort_unstable();
    }

    #[inline]
    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        v.sort_unstable_by(compare);
    }
}

/// `len` values from `generate`, converted to the benchmarked element type.
pub struct Input<T> {
    pub ty: &'static str,
    pub convert: fn(Vec<i32>) -> Vec<T>,
    pub pattern: &'static str,
    pub generate: fn(usize) -> Vec<i32>,
    pub len: usize,
}

impl<T> Input<T> {
    fn make(&self) -> Vec<T> {
        (self.convert)((self.generate)(self.len))
    }

    fn name(&self, sort: &str, kind: &str) -> String {
        format!("{sort}-{kind}-{}-{}-{}", self.ty, self.pattern, self.len)
    }

    /// Inputs averaged over when counting instead of timing.
    fn repetitions(&self) -> usize {
        match self.len {
            0..=20 => 100_000,
            21..=9_999 => 3_000,
            10_000..=99_999 => 1_000,
            _ => 100,
        }
    }
}

/// Times both sorts on `input`, or with `MEASURE_COMP` set prints what they do on average.
pub fn bench_input<T: Ord>(c: &mut Criterion, input: &Input<T>) {
    if env::var("MEASURE_COMP").is_ok() {
        print_comparisons::<LomutoQuicksort, T>(input);
        print_comparisons::<StdUnstable, T>(input);
        print_lomuto_stats(input);
        return;
    }

    util::time_sort(
        c,
        &input.name(&LomutoQuicksort::name(), "hot"),
        input.len,
        || input.make(),
        LomutoQuicksort::sort,
    );
    util::time_sort(
        c,
        &input.name(&StdUnstable::name(), "hot"),
        input.len,
        || input.make(),
        StdUnstable::sort,
    );
}

fn print_comparisons<S: Sort, T: Ord>(input: &Input<T>) {
    let name = input.name(&S::name(), "comp");
    if !util::should_run_benchmark(&name) {
        return;
    }

    let runs = input.repetitions();
    let mut comparisons = 0u64;

    // Counting through sort_by keeps the element type, and with it the code path, unchanged.
    for _ in 0..runs {
        let mut v = input.make();
        S::sort_by(black_box(v.as_mut_slice()), |a, b| {
            comparisons += 1;
            a.cmp(b)
        });
    }

    println!("{name}: mean comparisons: {}", comparisons / runs as u64);
}

fn print_lomuto_stats<T: Ord>(input: &Input<T>) {
    let name = input.name(&LomutoQuicksort::name(), "stats");
    if !util::should_run_benchmark(&name) {
        return;
    }

    let runs = input.repetitions();
    let (mut partitions, mut swaps, mut max_depth) = (0, 0, 0);

    for _ in 0..runs {
        let mut v = input.make();
        let stats = lomuto_quicksort::sort_with_stats(black_box(v.as_mut_slice()));

        partitions += stats.partitions;
        swaps += stats.swaps;
        max_depth = max_depth.max(stats.max_depth);
    }

    println!(
        "{name}: mean partitions: {} mean swaps: {} max depth: {max_depth}",
        partitions / runs,
        swaps / runs,
    );
}
