/// Ranges up to this length are handed to insertion sort by the hybrid strategy.
pub const SMALL_SORT_THRESHOLD: usize = 16;

/// Describes one strategy of the shared quicksort engine.
///
/// The three presets are the ones benchmarked against each other. They differ only in which
/// terminal states the engine may enter besides partitioning.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SortConfig {
    /// Ranges of at most this many elements are insertion sorted. Zero disables the shortcut,
    /// ranges of length 0 and 1 are then simply left alone.
    pub small_sort_threshold: usize,
    /// Whether an exhausted depth budget switches the range to heapsort.
    pub heap_fallback: bool,
    /// Overrides the initial depth budget, which is otherwise derived from the slice length.
    pub depth_limit: Option<u32>,
}

impl SortConfig {
    /// Insertion sort for small ranges, heapsort once the depth budget is spent.
    pub const fn introsort() -> Self {
        Self {
            small_sort_threshold: SMALL_SORT_THRESHOLD,
            heap_fallback: true,
            depth_limit: None,
        }
    }

    /// Partitions down to single elements, but still falls back to heapsort.
    pub const fn quicksort_guarded() -> Self {
        Self {
            small_sort_threshold: 0,
            heap_fallback: true,
            depth_limit: None,
        }
    }

    /// Plain recursive quicksort. Quadratic time and linear recursion depth on adversarial input.
    pub const fn quicksort_pure() -> Self {
        Self {
            small_sort_threshold: 0,
            heap_fallback: false,
            depth_limit: None,
        }
    }

    #[must_use]
    pub const fn with_depth_limit(mut self, limit: u32) -> Self {
        self.depth_limit = Some(limit);
        self
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::introsort()
    }
}
