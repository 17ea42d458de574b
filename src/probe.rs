//! Observation hooks for the quicksort engine.
//!
//! The engine is generic over the probe, so [`NoProbe`] compiles down to nothing and the
//! instrumented variants cost nothing when not used.

use tracing::{debug, trace};

/// Receives the decisions the engine takes for every range it visits.
pub trait Probe {
    /// A sort of `len` elements begins with a depth budget of `limit`.
    fn start(&mut self, _len: usize, _limit: u32) {}

    /// A range of `len` elements is about to be partitioned. `limit` is the budget left for both
    /// sides, the decrement for this step is already applied.
    fn partition(&mut self, _len: usize, _limit: u32) {}

    /// A range of `len` elements is handed to insertion sort.
    fn small_sort(&mut self, _len: usize) {}

    /// A range of `len` elements is handed to heapsort, with `limit` budget left.
    fn heapsort(&mut self, _len: usize, _limit: u32) {}
}

#[derive(Copy, Clone, Debug, Default)]
pub struct NoProbe;

impl Probe for NoProbe {}

/// Counts engine events, used to check that the depth budget is respected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountingProbe {
    pub initial_limit: u32,
    pub partitions: usize,
    pub small_sorts: usize,
    pub heapsorts: usize,
    /// Smallest remaining budget seen by any partition or heapsort step.
    pub min_limit: Option<u32>,
    /// Length of the largest range that was heapsorted.
    pub max_heapsort_len: usize,
}

impl CountingProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of partition levels spent along the deepest path, never more than the initial
    /// budget when the heap fallback is enabled.
    pub fn levels_used(&self) -> u32 {
        self.min_limit
            .map_or(0, |min_limit| self.initial_limit - min_limit)
    }

    fn observe_limit(&mut self, limit: u32) {
        self.min_limit = Some(self.min_limit.map_or(limit, |min| min.min(limit)));
    }
}

impl Probe for CountingProbe {
    fn start(&mut self, _len: usize, limit: u32) {
        self.initial_limit = limit;
    }

    fn partition(&mut self, _len: usize, limit: u32) {
        self.partitions += 1;
        self.observe_limit(limit);
    }

    fn small_sort(&mut self, _len: usize) {
        self.small_sorts += 1;
    }

    fn heapsort(&mut self, len: usize, limit: u32) {
        self.heapsorts += 1;
        self.max_heapsort_len = self.max_heapsort_len.max(len);
        self.observe_limit(limit);
    }
}

/// Forwards engine events to `tracing`. Heap fallbacks are logged at debug level, everything else
/// at trace level.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingProbe;

impl Probe for TracingProbe {
    fn start(&mut self, len: usize, limit: u32) {
        trace!(len, limit, "sort start");
    }

    fn partition(&mut self, len: usize, limit: u32) {
        trace!(len, limit, "partition");
    }

    fn small_sort(&mut self, len: usize) {
        trace!(len, "insertion sort");
    }

    fn heapsort(&mut self, len: usize, limit: u32) {
        debug!(len, limit, "depth budget exhausted, falling back to heapsort");
    }
}
