//! Test utilities and instrumented lifecycles for slotlist development.
//!
//! Provides element lifecycles that record what a container does with its
//! elements ([`CountingLifecycle`]) or refuse to allocate on cue
//! ([`FailingLifecycle`]), plus list-building [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use slotlist_core::{ElementLifecycle, ListError, RawBytes};

/// Counters shared between a [`CountingLifecycle`] and the test holding it.
#[derive(Debug, Default)]
pub struct LifecycleCounts {
    allocated: AtomicUsize,
    released: AtomicUsize,
    copied_out: AtomicUsize,
    compared: AtomicUsize,
}

impl LifecycleCounts {
    pub fn allocated(&self) -> usize {
        self.allocated.load(Ordering::Relaxed)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::Relaxed)
    }

    pub fn copied_out(&self) -> usize {
        self.copied_out.load(Ordering::Relaxed)
    }

    pub fn compared(&self) -> usize {
        self.compared.load(Ordering::Relaxed)
    }

    /// Elements allocated and not yet released.
    pub fn live(&self) -> usize {
        self.allocated().saturating_sub(self.released())
    }
}

/// Raw-byte lifecycle that counts every call.
///
/// Clones share one set of counters, so a test can keep a handle from
/// [`counts`](CountingLifecycle::counts) after moving the lifecycle into a
/// list.
#[derive(Clone, Debug, Default)]
pub struct CountingLifecycle {
    counts: Arc<LifecycleCounts>,
}

impl CountingLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> Arc<LifecycleCounts> {
        Arc::clone(&self.counts)
    }
}

impl ElementLifecycle for CountingLifecycle {
    fn allocate(&self, value: Option<&[u8]>, width: usize) -> Result<Box<[u8]>, ListError> {
        let element = RawBytes.allocate(value, width)?;
        self.counts.allocated.fetch_add(1, Ordering::Relaxed);
        Ok(element)
    }

    fn release(&self, element: Box<[u8]>) {
        self.counts.released.fetch_add(1, Ordering::Relaxed);
        RawBytes.release(element);
    }

    fn copy_out(&self, dest: &mut [u8], element: &[u8], width: usize) -> Result<usize, ListError> {
        self.counts.copied_out.fetch_add(1, Ordering::Relaxed);
        RawBytes.copy_out(dest, element, width)
    }

    fn compare(&self, element: &[u8], value: &[u8], width: usize) -> CmpOrdering {
        self.counts.compared.fetch_add(1, Ordering::Relaxed);
        RawBytes.compare(element, value, width)
    }
}

/// Counting lifecycle whose allocations succeed `succeed_count` times and
/// then fail with [`ListError::AllocationFailed`].
#[derive(Clone, Debug)]
pub struct FailingLifecycle {
    inner: CountingLifecycle,
    pub succeed_count: usize,
    call_count: Arc<AtomicUsize>,
}

impl FailingLifecycle {
    /// Create a lifecycle that allocates `succeed_count` times then fails.
    pub fn new(succeed_count: usize) -> Self {
        Self {
            inner: CountingLifecycle::new(),
            succeed_count,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn counts(&self) -> Arc<LifecycleCounts> {
        self.inner.counts()
    }

    /// How many times `allocate()` has been called.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Reset the call counter, re-arming the successes.
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::Relaxed);
    }
}

impl ElementLifecycle for FailingLifecycle {
    fn allocate(&self, value: Option<&[u8]>, width: usize) -> Result<Box<[u8]>, ListError> {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(ListError::AllocationFailed { requested: width });
        }
        self.inner.allocate(value, width)
    }

    fn release(&self, element: Box<[u8]>) {
        self.inner.release(element);
    }

    fn copy_out(&self, dest: &mut [u8], element: &[u8], width: usize) -> Result<usize, ListError> {
        self.inner.copy_out(dest, element, width)
    }

    fn compare(&self, element: &[u8], value: &[u8], width: usize) -> CmpOrdering {
        self.inner.compare(element, value, width)
    }
}
