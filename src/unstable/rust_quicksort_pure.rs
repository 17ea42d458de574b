//! Plain quicksort with a Lomuto partition around the last element, the baseline introsort is
//! benchmarked against.
//!
//! There is no safety net. Sorted, reverse sorted and other adversarial inputs take *O*(*n*^2)
//! time and recurse *O*(*n*) levels deep, which can overflow the stack for large inputs.

use std::cmp::Ordering;

use crate::config::SortConfig;
use crate::probe::{NoProbe, Probe};

sort_impl!("rust_quicksort_pure_unstable");

const CONFIG: SortConfig = SortConfig::quicksort_pure();

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
