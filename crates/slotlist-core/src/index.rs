//! Signed index resolution.
//!
//! Every container addresses its slots through these functions. A
//! non-negative index counts from the first live slot; a negative index
//! counts back from the live end, so `-1` is the last element and `-len`
//! the first. Anything outside `[0, len)` is an error: indices are never
//! clamped and never wrap.

use std::ops::Range;

use crate::error::ListError;

/// Resolve a signed index against a live length.
pub fn resolve(len: usize, index: isize) -> Result<usize, ListError> {
    let slot = if index >= 0 {
        Some(index.unsigned_abs())
    } else {
        len.checked_sub(index.unsigned_abs())
    };
    match slot {
        Some(slot) if slot < len => Ok(slot),
        _ => Err(ListError::IndexOutOfRange { index, len }),
    }
}

/// Resolve a span of `count` slots starting at a signed index.
///
/// A `count` of zero means "from `index` to the live end". The start must
/// resolve to a live slot, so a span on an empty container always fails.
pub fn resolve_span(len: usize, index: isize, count: usize) -> Result<Range<usize>, ListError> {
    let start = resolve(len, index)?;
    if count == 0 {
        return Ok(start..len);
    }
    match start.checked_add(count) {
        Some(end) if end <= len => Ok(start..end),
        _ => Err(ListError::RangeOutOfBounds { index, count, len }),
    }
}

/// Resolve a span that must cover at least one slot.
///
/// Unlike [`resolve_span`], a zero `count` is rejected with
/// [`ListError::EmptyRange`].
pub fn resolve_exact(len: usize, index: isize, count: usize) -> Result<Range<usize>, ListError> {
    if count == 0 {
        return Err(ListError::EmptyRange);
    }
    resolve_span(len, index, count)
}
