//! Seeded `i32` inputs for the tests and benchmarks.
//!
//! Every generator draws from the process seed, see [`seed`]. Tests print it up front, so a
//! failure can be replayed with `OVERRIDE_SEED=<seed>`.

use std::env;
use std::sync::Mutex;

use rand::distributions::Uniform;
use rand::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SeedMode {
    /// Drawn once, shared by every generator call in this process.
    PerProcess(u64),
    /// Taken from `OVERRIDE_SEED`.
    Overridden(u64),
    /// A new seed for every generator call.
    Fresh,
}

static SEED_MODE: Mutex<Option<SeedMode>> = Mutex::new(None);

fn seed_mode() -> SeedMode {
    let mut mode = SEED_MODE.lock().unwrap();

    *mode.get_or_insert_with(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => SeedMode::Overridden(
            seed.parse()
                .unwrap_or_else(|err| panic!("Invalid OVERRIDE_SEED {seed:?}: {err}")),
        ),
        Err(_) => SeedMode::PerProcess(thread_rng().gen()),
    })
}

/// The seed the next generator call starts from.
pub fn seed() -> u64 {
    match seed_mode() {
        SeedMode::PerProcess(seed) | SeedMode::Overridden(seed) => seed,
        SeedMode::Fresh => thread_rng().gen(),
    }
}

/// Makes every generator call produce new values. Benchmarks want this, otherwise each iteration
/// would sort the exact same input.
///
/// Panics if `OVERRIDE_SEED` is set, the two contradict each other.
pub fn reseed_every_call() {
    if let SeedMode::Overridden(seed) = seed_mode() {
        panic!("reseed_every_call conflicts with OVERRIDE_SEED={seed}");
    }

    *SEED_MODE.lock().unwrap() = Some(SeedMode::Fresh);
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(seed())
}

/// Values spread over the whole `i32` range, duplicates are rare.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng();

    (0..len).map(|_| rng.gen()).collect()
}

/// Values in `0..bound`. Small bounds give many duplicates.
pub fn random_below(len: usize, bound: i32) -> Vec<i32> {
    let dist = Uniform::new(0, bound.max(1));

    rng().sample_iter(dist).take(len).collect()
}

/// Random values where the first `sorted_percent` of the slice is already in order.
pub fn partially_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let sorted_len = ((len as f64) * sorted_percent / 100.0).round() as usize;

    v[..sorted_len.min(len)].sort_unstable();
    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![7; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// `teeth` sorted runs back to back, each one ascending or descending at random.
pub fn saws(len: usize, teeth: usize) -> Vec<i32> {
    let mut v = random(len);
    let tooth_len = (len / teeth.max(1)).max(1);

    let mut rng = rng();
    for tooth in v.chunks_mut(tooth_len) {
        tooth.sort_unstable();
        if rng.gen::<bool>() {
            tooth.reverse();
        }
    }

    v
}

/// Rises to the middle and falls back down.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (rising, falling) = v.split_at_mut(len / 2);

    rising.sort_unstable();
    falling.sort_unstable_by(|a, b| b.cmp(a));

    v
}
