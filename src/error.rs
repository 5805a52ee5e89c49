use thiserror::Error;

/// A `[low, high]` range that does not describe a part of the slice it was used with.
///
/// Ranges are inclusive on both ends. Besides every `low <= high < len` range, the empty range
/// `low == high + 1` is accepted as well (and sorts nothing), anything further apart is rejected.
/// Indices are never clamped or swapped to make a call valid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("range end index {high} out of range for slice of length {len}")]
    OutOfBounds { high: usize, len: usize },

    #[error("range start index {low} is past range end index {high}")]
    Inverted { low: usize, high: usize },
}

/// Checks that `[low, high]` may be sorted within a slice of length `len`.
pub(crate) fn check_sort_range(len: usize, low: usize, high: usize) -> Result<(), RangeError> {
    if high >= len {
        return Err(RangeError::OutOfBounds { high, len });
    }

    // `high < len <= usize::MAX`, the addition can't overflow.
    if low > high + 1 {
        return Err(RangeError::Inverted { low, high });
    }

    Ok(())
}

/// Partitioning needs a pivot, so unlike sorting the range must hold at least one element.
pub(crate) fn check_partition_range(len: usize, low: usize, high: usize) -> Result<(), RangeError> {
    if high >= len {
        return Err(RangeError::OutOfBounds { high, len });
    }

    if low > high {
        return Err(RangeError::Inverted { low, high });
    }

    Ok(())
}
