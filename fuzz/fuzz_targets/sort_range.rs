#![no_main]

use libfuzzer_sys::fuzz_target;

const MAX_LEN: usize = 4096;

// The first two bytes pick the range, the rest is the data to sort.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let (bounds, values) = data.split_at(2);
    let mut v = values[..values.len().min(MAX_LEN)].to_vec();
    let original = v.clone();

    let low = bounds[0] as usize;
    let high = bounds[1] as usize;

    match lomuto_quicksort::try_sort_range(&mut v, low, high) {
        Ok(()) => {
            if low < high {
                let mut expected = original.clone();
                expected[low..=high].sort_unstable();
                assert_eq!(v, expected);
            } else {
                assert_eq!(v, original);
            }
        }
        Err(_) => assert_eq!(v, original),
    }
});
