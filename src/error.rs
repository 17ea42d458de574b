use thiserror::Error;

/// A caller supplied range that does not describe a sub-slice of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRangeError {
    #[error("range start {start} is past range end {end}")]
    StartAfterEnd { start: usize, end: usize },
    #[error("range end {end} is out of bounds for slice of length {len}")]
    EndOutOfBounds { end: usize, len: usize },
    #[error("range bound overflows usize")]
    Overflow,
}
