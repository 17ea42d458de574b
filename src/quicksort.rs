use crate::config::SortConfig;
use crate::heapsort::heapsort;
use crate::partition::partition;
use crate::probe::Probe;
use crate::smallsort::insertion_sort_shift_left;

/// Sorts `v` recursively.
///
/// `limit` is the number of partition levels allowed before switching to `heapsort`. If zero,
/// and `config.heap_fallback` is set, this function will immediately switch to heapsort. Each
/// partition step consumes one unit of `limit` for both of its sides.
///
/// Only the left side is sorted by recursion, the right side is handled by the next iteration of
/// the loop. With the heap fallback enabled this bounds the recursion depth by `limit`.
pub fn quicksort<T, F, P>(
    mut v: &mut [T],
    mut limit: u32,
    config: &SortConfig,
    is_less: &mut F,
    probe: &mut P,
) where
    F: FnMut(&T, &T) -> bool,
    P: Probe,
{
    loop {
        let len = v.len();

        if len <= config.small_sort_threshold {
            if len >= 2 {
                probe.small_sort(len);
                insertion_sort_shift_left(v, 1, is_less);
            }
            return;
        }

        if len < 2 {
            return;
        }

        // If too many bad pivot choices were made, simply fall back to heapsort in order to
        // guarantee `O(n * log(n))` worst-case.
        if config.heap_fallback && limit == 0 {
            probe.heapsort(len, limit);
            heapsort(v, is_less);
            return;
        }

        // Without the fallback the budget is tracked but never acted on.
        limit = limit.saturating_sub(1);
        probe.partition(len, limit);

        let mid = partition(v, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        quicksort(left, limit, config, is_less, probe);

        // Continue with the right side.
        v = right;
    }
}
