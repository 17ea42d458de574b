#![no_main]

use libfuzzer_sys::fuzz_target;

use introsort_comp::{depth_limit, CountingProbe, SortConfig};

fuzz_target!(|data: &[u8]| {
    // Pairs of bytes give a key range wide enough to produce long runs of distinct values.
    let mut v = data
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect::<Vec<_>>();

    for config in [SortConfig::introsort(), SortConfig::quicksort_guarded()] {
        let mut probe = CountingProbe::new();
        introsort_comp::sort_probed(&mut v, &config, &mut probe);

        assert!(v.windows(2).all(|w| w[0] <= w[1]));
        assert!(probe.levels_used() <= depth_limit(v.len()));
        assert!(probe.heapsorts == 0 || probe.levels_used() == depth_limit(v.len()));
    }
});
