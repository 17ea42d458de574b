use core::ops::{Bound, Range, RangeBounds};

use crate::error::InvalidRangeError;

/// Turns `range` into a half-open index range that is valid for a slice of length `len`.
///
/// Both closed (`left..=right`) and half-open forms are accepted. An empty range is valid as long
/// as it lies within the slice, `left..=left - 1` is the closed spelling of an empty range.
pub fn resolve<R>(range: &R, len: usize) -> Result<Range<usize>, InvalidRangeError>
where
    R: RangeBounds<usize> + ?Sized,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1).ok_or(InvalidRangeError::Overflow)?,
        Bound::Unbounded => 0,
    };

    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1).ok_or(InvalidRangeError::Overflow)?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    if start > end {
        return Err(InvalidRangeError::StartAfterEnd { start, end });
    }

    if end > len {
        return Err(InvalidRangeError::EndOutOfBounds { end, len });
    }

    Ok(start..end)
}
