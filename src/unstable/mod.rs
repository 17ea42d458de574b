// Strategies built on the shared quicksort engine.
pub mod rust_introsort;
pub mod rust_quicksort_guarded;
pub mod rust_quicksort_pure;

// Reference point for benchmarks and tests.
pub mod rust_std;
