//! Introspective sort: quicksort with a Lomuto partition, insertion sort for ranges of at most
//! [`SMALL_SORT_THRESHOLD`] elements and heapsort once `floor(2 * log2(len))` partition levels
//! have been spent.
//!
//! This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
//! and *O*(*n* \* log(*n*)) worst-case.
//!
//! [`SMALL_SORT_THRESHOLD`]: crate::config::SMALL_SORT_THRESHOLD

use std::cmp::Ordering;
use std::ops::RangeBounds;

use crate::config::SortConfig;
use crate::error::InvalidRangeError;
use crate::probe::{NoProbe, Probe};

sort_impl!("rust_introsort_unstable");

const CONFIG: SortConfig = SortConfig::introsort();

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

/// Sorts `v[range]`, leaving the rest of `v` untouched.
///
/// Returns an error without modifying `v` if `range` is not within `v`.
pub fn sort_range<T, R>(v: &mut [T], range: R) -> Result<(), InvalidRangeError>
where
    T: Ord,
    R: RangeBounds<usize>,
{
    crate::sort_range_by_probed(v, range, &CONFIG, |a, b| a.lt(b), &mut NoProbe)
}

pub fn sort_range_by<T, R, F>(v: &mut [T], range: R, compare: F) -> Result<(), InvalidRangeError>
where
    R: RangeBounds<usize>,
    F: FnMut(&T, &T) -> Ordering,
{
    crate::sort_range_by_probed(
        v,
        range,
        &CONFIG,
        crate::is_less_from_compare(compare),
        &mut NoProbe,
    )
}

/// Like [`sort`], but reports every decision of the engine to `probe`.
pub fn sort_probed<T, P>(v: &mut [T], probe: &mut P)
where
    T: Ord,
    P: Probe,
{
    crate::sort_probed(v, &CONFIG, probe);
}
