#![no_main]

use libfuzzer_sys::fuzz_target;

use introsort_comp::unstable::rust_introsort as test_sort;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    test_sort::sort(&mut v);

    let mut expected = data.to_vec();
    expected.sort();
    assert_eq!(v, expected);
});
