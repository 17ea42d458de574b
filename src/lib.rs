//! Introspective sort and the two quicksort baselines it is measured against.
//!
//! All strategies share one engine, see [`quicksort`], and differ only in their [`SortConfig`].

use core::cmp::Ordering;
use core::ops::RangeBounds;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod config;
pub mod error;
pub mod generator;
pub mod harness;
pub mod heapsort;
pub mod partition;
pub mod probe;
pub mod quicksort;
pub mod range;
pub mod smallsort;
pub mod unstable;

pub use config::SortConfig;
pub use error::InvalidRangeError;
pub use probe::{CountingProbe, NoProbe, Probe, TracingProbe};
pub use sort_test_tools::Sort;

/// Returns the initial depth budget for a slice of `len` elements, `floor(2 * log2(len))`.
///
/// `2 * log2(len) == log2(len * len)`, so the floor can be taken exactly in integer arithmetic.
/// Slices with fewer than two elements get a budget of zero, they are never partitioned.
#[must_use]
pub const fn depth_limit(len: usize) -> u32 {
    if len < 2 {
        return 0;
    }

    let len = len as u128;
    (len * len).ilog2()
}

/// Sorts `v` with the strategy described by `config`, reporting engine events to `probe`.
pub fn sort_by_probed<T, F, P>(v: &mut [T], config: &SortConfig, mut is_less: F, probe: &mut P)
where
    F: FnMut(&T, &T) -> bool,
    P: Probe,
{
    let len = v.len();

    if len < 2 {
        return;
    }

    let limit = config.depth_limit.unwrap_or_else(|| depth_limit(len));
    probe.start(len, limit);

    quicksort::quicksort(v, limit, config, &mut is_less, probe);
}

/// Sorts `v` in ascending order with the strategy described by `config`.
pub fn sort_probed<T, P>(v: &mut [T], config: &SortConfig, probe: &mut P)
where
    T: Ord,
    P: Probe,
{
    sort_by_probed(v, config, |a, b| a.lt(b), probe);
}

/// Sorts the sub-slice of `v` selected by `range`.
///
/// The range is validated before any element is touched, an invalid range leaves `v` unchanged.
pub fn sort_range_by_probed<T, R, F, P>(
    v: &mut [T],
    range: R,
    config: &SortConfig,
    is_less: F,
    probe: &mut P,
) -> Result<(), InvalidRangeError>
where
    R: RangeBounds<usize>,
    F: FnMut(&T, &T) -> bool,
    P: Probe,
{
    let range = range::resolve(&range, v.len())?;
    sort_by_probed(&mut v[range], config, is_less, probe);

    Ok(())
}

#[inline]
pub(crate) fn is_less_from_compare<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a, b| compare(a, b) == Ordering::Less
}
