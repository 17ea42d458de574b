//! Quicksort with the heapsort fallback of introsort but without the insertion sort shortcut,
//! every range is partitioned down to single elements unless the depth budget runs out.

use std::cmp::Ordering;

use crate::config::SortConfig;
use crate::probe::{NoProbe, Probe};

sort_impl!("rust_quicksort_guarded_unstable");

const CONFIG: SortConfig = SortConfig::quicksort_guarded();

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    crate::sort_by_probed(v, &CONFIG, |a, b| a.lt(b), &mut NoProbe);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    crate::sort_by_probed(v, &CONFIG, crate::is_less_from_compare(compare), &mut NoProbe);
}

pub fn sort_probed<T, P>(v: &mut [T], probe: &mut P)
where
    T: Ord,
    P: Probe,
{
    crate::sort_probed(v, &CONFIG, probe);
}
