#![no_main]

use libfuzzer_sys::fuzz_target;

// Inputs beyond this length can exhaust the stack on sorted or all equal data.
const MAX_LEN: usize = 4096;

fuzz_target!(|data: &[u8]| {
    let mut v = data[..data.len().min(MAX_LEN)].to_vec();
    let mut expected = v.clone();
    expected.sort_unstable();

    lomuto_quicksort::sort(&mut v);
    assert_eq!(v, expected);
});
