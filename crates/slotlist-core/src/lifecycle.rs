//! Pluggable element lifecycles.
//!
//! The generic container never touches element bytes directly. Creating,
//! destroying, reading and comparing an element all go through an
//! [`ElementLifecycle`], chosen per container instance:
//!
//! - **allocate** acquires an owned block for one slot and fills it from a
//!   source value.
//! - **release** gives up the resources behind one slot.
//! - **copy_out** copies an element into caller-supplied storage.
//! - **compare** orders an element against a probe value.
//!
//! Every method has a default that treats elements as fixed-width raw byte
//! blocks, so an implementation only overrides what it changes.
//! [`RawBytes`] keeps all four defaults; [`TextLifecycle`] swaps in text
//! semantics.

use std::cmp::Ordering;

use crate::error::ListError;

/// Acquire a zero-filled block of `len` bytes, reporting allocation failure.
pub fn alloc_block(len: usize) -> Result<Vec<u8>, ListError> {
    let mut block = Vec::new();
    block
        .try_reserve_exact(len)
        .map_err(|_| ListError::AllocationFailed { requested: len })?;
    block.resize(len, 0);
    Ok(block)
}

/// The capability set a generic container uses to manage its elements.
///
/// `width` is the per-call element width in bytes: the container's nominal
/// width unless the caller overrides it for a single operation.
pub trait ElementLifecycle {
    /// Acquire storage for one element and fill it from `value`.
    ///
    /// A `None` value produces an element whose content is unspecified
    /// (zeroed by the default).
    fn allocate(&self, value: Option<&[u8]>, width: usize) -> Result<Box<[u8]>, ListError> {
        let mut block = alloc_block(width)?;
        if let Some(value) = value {
            let n = width.min(value.len());
            block[..n].copy_from_slice(&value[..n]);
        }
        Ok(block.into_boxed_slice())
    }

    /// Release the resources owned by one element.
    fn release(&self, element: Box<[u8]>) {
        drop(element);
    }

    /// Copy up to `width` bytes of `element` into `dest`.
    ///
    /// Returns the number of content bytes written.
    fn copy_out(&self, dest: &mut [u8], element: &[u8], width: usize) -> Result<usize, ListError> {
        let n = width.min(element.len());
        if dest.len() < n {
            return Err(ListError::BufferTooSmall {
                needed: n,
                available: dest.len(),
            });
        }
        dest[..n].copy_from_slice(&element[..n]);
        Ok(n)
    }

    /// Three-way comparison of a stored element against a probe value.
    fn compare(&self, element: &[u8], value: &[u8], width: usize) -> Ordering {
        let a = &element[..width.min(element.len())];
        let b = &value[..width.min(value.len())];
        a.cmp(b)
    }
}

impl<L: ElementLifecycle + ?Sized> ElementLifecycle for &L {
    fn allocate(&self, value: Option<&[u8]>, width: usize) -> Result<Box<[u8]>, ListError> {
        (**self).allocate(value, width)
    }

    fn release(&self, element: Box<[u8]>) {
        (**self).release(element)
    }

    fn copy_out(&self, dest: &mut [u8], element: &[u8], width: usize) -> Result<usize, ListError> {
        (**self).copy_out(dest, element, width)
    }

    fn compare(&self, element: &[u8], value: &[u8], width: usize) -> Ordering {
        (**self).compare(element, value, width)
    }
}

impl<L: ElementLifecycle + ?Sized> ElementLifecycle for Box<L> {
    fn allocate(&self, value: Option<&[u8]>, width: usize) -> Result<Box<[u8]>, ListError> {
        (**self).allocate(value, width)
    }

    fn release(&self, element: Box<[u8]>) {
        (**self).release(element)
    }

    fn copy_out(&self, dest: &mut [u8], element: &[u8], width: usize) -> Result<usize, ListError> {
        (**self).copy_out(dest, element, width)
    }

    fn compare(&self, element: &[u8], value: &[u8], width: usize) -> Ordering {
        (**self).compare(element, value, width)
    }
}

/// Fixed-width raw byte elements: every default, nothing overridden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawBytes;

impl ElementLifecycle for RawBytes {}

// ── Text ─────────────────────────────────────────────────────────────

/// How a [`TextLifecycle`] orders text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextComparator {
    /// Byte-wise ordering (`strcmp`).
    #[default]
    Ordinal,
    /// ASCII case-insensitive ordering (`strcasecmp`).
    Caseless,
}

/// The bytes of `value` up to, not including, its first NUL.
pub fn text_bytes(value: &[u8]) -> &[u8] {
    match value.iter().position(|&b| b == 0) {
        Some(end) => &value[..end],
        None => value,
    }
}

/// Variable-length text elements.
///
/// Each element is sized to its text, which ends at the first NUL of the
/// source (the terminator itself is not stored). Stored text is always
/// valid UTF-8. The comparator is mutable state: switching it affects every
/// later comparison made through this lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextLifecycle {
    comparator: TextComparator,
}

impl TextLifecycle {
    /// Create a text lifecycle with the given comparator.
    pub fn new(comparator: TextComparator) -> Self {
        Self { comparator }
    }

    /// The comparator currently in effect.
    pub fn comparator(&self) -> TextComparator {
        self.comparator
    }

    /// Replace the comparator, discarding the previous one.
    pub fn set_comparator(&mut self, comparator: TextComparator) {
        self.comparator = comparator;
    }
}

impl ElementLifecycle for TextLifecycle {
    fn allocate(&self, value: Option<&[u8]>, _width: usize) -> Result<Box<[u8]>, ListError> {
        let text = text_bytes(value.unwrap_or_default());
        if std::str::from_utf8(text).is_err() {
            return Err(ListError::InvalidText { index: None });
        }
        let mut block = alloc_block(text.len())?;
        block.copy_from_slice(text);
        Ok(block.into_boxed_slice())
    }

    fn copy_out(&self, dest: &mut [u8], element: &[u8], _width: usize) -> Result<usize, ListError> {
        let text = text_bytes(element);
        let needed = text.len() + 1;
        if dest.len() < needed {
            return Err(ListError::BufferTooSmall {
                needed,
                available: dest.len(),
            });
        }
        dest[..text.len()].copy_from_slice(text);
        dest[text.len()] = 0;
        Ok(text.len())
    }

    fn compare(&self, element: &[u8], value: &[u8], _width: usize) -> Ordering {
        let a = text_bytes(element);
        let b = text_bytes(value);
        match self.comparator {
            TextComparator::Ordinal => a.cmp(b),
            TextComparator::Caseless => a
                .iter()
                .map(u8::to_ascii_lowercase)
                .cmp(b.iter().map(u8::to_ascii_lowercase)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_allocate_copies_width_bytes() {
        let el = RawBytes.allocate(Some(b"abcdef".as_slice()), 4).unwrap();
        assert_eq!(&*el, b"abcd");
    }

    #[test]
    fn raw_allocate_pads_short_values_and_none() {
        assert_eq!(&*RawBytes.allocate(Some(b"ab".as_slice()), 4).unwrap(), b"ab\0\0");
        assert_eq!(&*RawBytes.allocate(None, 3).unwrap(), &[0, 0, 0]);
    }

    #[test]
    fn raw_copy_out_checks_destination() {
        let mut small = [0u8; 2];
        assert_eq!(
            RawBytes.copy_out(&mut small, b"abcd", 4),
            Err(ListError::BufferTooSmall {
                needed: 4,
                available: 2
            })
        );
        let mut dest = [0u8; 8];
        assert_eq!(RawBytes.copy_out(&mut dest, b"abcd", 4), Ok(4));
        assert_eq!(&dest[..4], b"abcd");
    }

    #[test]
    fn raw_compare_limits_to_width() {
        assert_eq!(RawBytes.compare(b"abcX", b"abcY", 3), Ordering::Equal);
        assert_eq!(RawBytes.compare(b"abcX", b"abcY", 4), Ordering::Less);
    }

    #[test]
    fn text_allocate_stops_at_nul() {
        let text = TextLifecycle::default();
        assert_eq!(&*text.allocate(Some(b"hi\0there".as_slice()), 0).unwrap(), b"hi");
        assert!(text.allocate(None, 0).unwrap().is_empty());
    }

    #[test]
    fn text_allocate_rejects_invalid_utf8() {
        let text = TextLifecycle::default();
        assert_eq!(
            text.allocate(Some([0xff, 0xfe].as_slice()), 0),
            Err(ListError::InvalidText { index: None })
        );
    }

    #[test]
    fn text_copy_out_writes_terminator() {
        let text = TextLifecycle::default();
        let mut dest = [0xaau8; 6];
        assert_eq!(text.copy_out(&mut dest, b"word", 0), Ok(4));
        assert_eq!(&dest[..5], b"word\0");
        let mut tight = [0u8; 4];
        assert!(text.copy_out(&mut tight, b"word", 0).is_err());
    }

    #[test]
    fn text_comparator_switches() {
        let mut text = TextLifecycle::default();
        assert_ne!(text.compare(b"Hello", b"hello", 0), Ordering::Equal);
        text.set_comparator(TextComparator::Caseless);
        assert_eq!(text.comparator(), TextComparator::Caseless);
        assert_eq!(text.compare(b"Hello", b"hELLO", 0), Ordering::Equal);
        assert_eq!(text.compare(b"apple", b"BANANA", 0), Ordering::Less);
    }

    #[test]
    fn boxed_trait_object_forwards() {
        let boxed: Box<dyn ElementLifecycle> = Box::new(TextLifecycle::default());
        assert_eq!(&*boxed.allocate(Some(b"x\0y".as_slice()), 9).unwrap(), b"x");
    }
}
