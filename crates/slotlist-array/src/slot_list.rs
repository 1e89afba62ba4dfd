//! Generic lists of owned, lifecycle-managed elements.
//!
//! A [`SlotList`] holds one owned byte block per slot. It never creates,
//! reads, compares or destroys a block itself; every such step goes through
//! the [`ElementLifecycle`] the list was built with. That keeps two
//! guarantees simple to state:
//!
//! - Each element is exclusively owned by one list. Copying between lists
//!   allocates fresh elements in the destination, and an element leaves a
//!   list only through its lifecycle's `release`.
//! - A failing operation leaves the list untouched. New elements are
//!   allocated into a staging buffer first and only moved in once slot
//!   storage has been reserved for them; if anything fails, the staged
//!   elements are released again.

use std::cmp::Ordering;
use std::fmt;

use slotlist_core::index;
use slotlist_core::{ElementLifecycle, ListConfig, ListError, RawBytes};

use crate::storage::ReservedVec;

/// A resizable list of owned elements managed by a lifecycle `L`.
///
/// Most operations use the list's nominal element width; the
/// `*_with_width` variants override it for a single call.
pub struct SlotList<L: ElementLifecycle = RawBytes> {
    storage: ReservedVec<Box<[u8]>>,
    /// Nominal element width in bytes.
    width: usize,
    lifecycle: L,
}

impl SlotList<RawBytes> {
    /// Create a raw-byte list of `width`-byte elements.
    pub fn new(
        initial_reserve: usize,
        growth_quantum: usize,
        width: usize,
    ) -> Result<Self, ListError> {
        let config = ListConfig::new(initial_reserve, growth_quantum).with_element_width(width);
        Self::with_lifecycle(&config, RawBytes)
    }
}

impl<L: ElementLifecycle> SlotList<L> {
    /// Create a list from a config and an element lifecycle.
    pub fn with_lifecycle(config: &ListConfig, lifecycle: L) -> Result<Self, ListError> {
        Ok(Self {
            storage: ReservedVec::with_config(config)?,
            width: config.element_width,
            lifecycle,
        })
    }

    /// Create a new list holding copies of a range of `src`.
    ///
    /// The new list takes its growth quantum, element width and a clone of
    /// its lifecycle from `src`.
    pub fn from_range(src: &SlotList<L>, index: isize, count: usize) -> Result<Self, ListError>
    where
        L: Clone,
    {
        let config = ListConfig::new(0, src.growth_quantum()).with_element_width(src.width);
        let mut list = Self::with_lifecycle(&config, src.lifecycle.clone())?;
        list.copy_from(src, index, count)?;
        Ok(list)
    }

    /// The element lifecycle.
    pub fn lifecycle(&self) -> &L {
        &self.lifecycle
    }

    /// Mutable access to the element lifecycle.
    pub fn lifecycle_mut(&mut self) -> &mut L {
        &mut self.lifecycle
    }

    /// Nominal element width in bytes.
    #[inline]
    pub fn element_width(&self) -> usize {
        self.width
    }

    /// Replace the nominal element width used by later operations.
    pub fn set_element_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Resize the reservation; see [`ReservedVec::reserve`].
    pub fn reserve(&mut self, size: usize, growth_quantum: usize) -> Result<(), ListError> {
        self.storage.reserve(size, growth_quantum)
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Reserved slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Current growth quantum.
    #[inline]
    pub fn growth_quantum(&self) -> usize {
        self.storage.growth_quantum()
    }

    /// Remove and release `count` elements starting at a signed index.
    pub fn remove(&mut self, index: isize, count: usize) -> Result<(), ListError> {
        for element in self.storage.remove_range(index, count)? {
            self.lifecycle.release(element);
        }
        Ok(())
    }

    /// Truncate to `new_len`, or extend to it with elements allocated from
    /// `fill`.
    pub fn resize(&mut self, new_len: usize, fill: Option<&[u8]>) -> Result<(), ListError> {
        self.resize_with_width(new_len, fill, self.width)
    }

    /// [`resize`](Self::resize) with an explicit element width.
    pub fn resize_with_width(
        &mut self,
        new_len: usize,
        fill: Option<&[u8]>,
        width: usize,
    ) -> Result<(), ListError> {
        let len = self.len();
        if new_len == len {
            return Ok(());
        }
        if new_len < len {
            self.truncate_tail(len - new_len);
            return Ok(());
        }
        let staged = self.stage(std::iter::repeat_n((fill, width), new_len - len))?;
        self.commit(staged)
    }

    /// Allocate a new element from `value` at the tail and return it.
    pub fn push(&mut self, value: Option<&[u8]>) -> Result<&[u8], ListError> {
        self.push_with_width(value, self.width)
    }

    /// [`push`](Self::push) with an explicit element width.
    pub fn push_with_width(
        &mut self,
        value: Option<&[u8]>,
        width: usize,
    ) -> Result<&[u8], ListError> {
        let element = self.lifecycle.allocate(value, width)?;
        if let Err(e) = self.storage.ensure_room(1) {
            self.lifecycle.release(element);
            return Err(e);
        }
        self.storage.push(element)?;
        let last = self.len() - 1;
        Ok(&self.storage.as_slice()[last])
    }

    /// Remove the last element, copying it into `out` first if given.
    ///
    /// Returns the number of bytes copied out. If the copy fails the
    /// element stays in the list.
    pub fn pop(&mut self, out: Option<&mut [u8]>) -> Result<usize, ListError> {
        self.pop_with_width(out, self.width)
    }

    /// [`pop`](Self::pop) with an explicit element width.
    pub fn pop_with_width(
        &mut self,
        out: Option<&mut [u8]>,
        width: usize,
    ) -> Result<usize, ListError> {
        let element = self.storage.last().ok_or(ListError::Empty)?;
        let copied = match out {
            Some(dest) => self.lifecycle.copy_out(dest, element, width)?,
            None => 0,
        };
        if let Some(element) = self.storage.pop() {
            self.lifecycle.release(element);
        }
        Ok(copied)
    }

    /// Borrow the element at a signed index.
    pub fn slot(&self, index: isize) -> Result<&[u8], ListError> {
        self.storage.slot(index).map(|element| &**element)
    }

    /// Copy the element at a signed index into `out`.
    pub fn get_into(&self, index: isize, out: &mut [u8]) -> Result<usize, ListError> {
        self.get_into_with_width(index, out, self.width)
    }

    /// [`get_into`](Self::get_into) with an explicit element width.
    pub fn get_into_with_width(
        &self,
        index: isize,
        out: &mut [u8],
        width: usize,
    ) -> Result<usize, ListError> {
        let element = self.storage.slot(index)?;
        self.lifecycle.copy_out(out, element, width)
    }

    /// Replace the element at a signed index with one allocated from
    /// `value`. The old element is released only once the new one exists.
    pub fn set(&mut self, index: isize, value: Option<&[u8]>) -> Result<(), ListError> {
        self.set_with_width(index, value, self.width)
    }

    /// [`set`](Self::set) with an explicit element width.
    pub fn set_with_width(
        &mut self,
        index: isize,
        value: Option<&[u8]>,
        width: usize,
    ) -> Result<(), ListError> {
        let at = self.storage.resolve(index)?;
        let element = self.lifecycle.allocate(value, width)?;
        let old = std::mem::replace(&mut self.storage.as_mut_slice()[at], element);
        self.lifecycle.release(old);
        Ok(())
    }

    /// Index of the last element comparing equal to `value`, scanning from
    /// the end.
    pub fn find(&self, value: &[u8]) -> Option<usize> {
        self.find_with_width(value, self.width)
    }

    /// [`find`](Self::find) with an explicit element width.
    pub fn find_with_width(&self, value: &[u8], width: usize) -> Option<usize> {
        self.storage
            .as_slice()
            .iter()
            .rposition(|element| self.lifecycle.compare(element, value, width) == Ordering::Equal)
    }

    /// Reverse `count` elements starting at a signed index (zero: to the end).
    pub fn reverse(&mut self, index: isize, count: usize) -> Result<(), ListError> {
        self.storage.reverse(index, count)
    }

    /// Rotate `count` elements starting at a signed index by `amount`
    /// (zero count: to the end). Positive amounts move the tail of the span
    /// to its front.
    pub fn rotate(&mut self, amount: isize, index: isize, count: usize) -> Result<(), ListError> {
        self.storage.rotate(amount, index, count)
    }

    /// Append duplicates of `count` elements of `src` starting at `index`
    /// (zero count: to the end).
    ///
    /// Duplicates are allocated by this list's lifecycle at the source's
    /// element width. A source with no nominal width (a text list's width
    /// is zero) has each duplicate allocated at its element's own length,
    /// so copying text into a raw list keeps every byte. The reservation
    /// grows using this list's own growth quantum.
    pub fn copy_from<M: ElementLifecycle>(
        &mut self,
        src: &SlotList<M>,
        index: isize,
        count: usize,
    ) -> Result<(), ListError> {
        let range = index::resolve_span(src.len(), index, count)?;
        let values = src.storage.as_slice()[range].iter().map(|element| {
            let width = if src.width == 0 { element.len() } else { src.width };
            (Some(&**element), width)
        });
        let staged = self.stage(values)?;
        self.commit(staged)
    }

    /// Copy a range of `src` onto this list, then shrink `src` by the number
    /// of elements copied, releasing them from its tail.
    pub fn move_from<M: ElementLifecycle>(
        &mut self,
        src: &mut SlotList<M>,
        index: isize,
        count: usize,
    ) -> Result<(), ListError> {
        let moved = index::resolve_span(src.len(), index, count)?.len();
        self.copy_from(src, index, count)?;
        src.truncate_tail(moved);
        Ok(())
    }

    /// Replace every element, head to tail, with `transform(index, element)`.
    ///
    /// The transform takes ownership of the old block and returns its
    /// replacement; the lifecycle is not involved.
    pub fn map<F>(&mut self, mut transform: F)
    where
        F: FnMut(usize, Box<[u8]>) -> Box<[u8]>,
    {
        self.storage.map_slots(|i, slot| {
            let element = std::mem::take(slot);
            *slot = transform(i, element);
        });
    }

    /// Replace every element with one allocated from `transform(index,
    /// element)`, releasing the old elements.
    ///
    /// All replacements are computed and allocated before any slot changes,
    /// so an error from the transform or the lifecycle leaves the list as
    /// it was.
    pub fn map_values<F, V>(&mut self, mut transform: F) -> Result<(), ListError>
    where
        F: FnMut(usize, &[u8]) -> Result<V, ListError>,
        V: AsRef<[u8]>,
    {
        let mut staged = Vec::new();
        staged
            .try_reserve_exact(self.len())
            .map_err(|_| ListError::AllocationFailed {
                requested: self.len(),
            })?;
        for (i, element) in self.storage.as_slice().iter().enumerate() {
            let allocated = transform(i, element)
                .and_then(|v| self.lifecycle.allocate(Some(v.as_ref()), self.width));
            match allocated {
                Ok(replacement) => staged.push(replacement),
                Err(e) => {
                    self.release_all(staged);
                    return Err(e);
                }
            }
        }
        let mut replacements = staged.into_iter();
        let lifecycle = &self.lifecycle;
        self.storage.map_slots(|_, slot| {
            if let Some(replacement) = replacements.next() {
                lifecycle.release(std::mem::replace(slot, replacement));
            }
        });
        Ok(())
    }

    /// Keep only the elements for which `predicate` holds, visiting tail to
    /// head. Rejected elements are released.
    pub fn filter<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&[u8]) -> bool,
    {
        let lifecycle = &self.lifecycle;
        self.storage
            .filter_rev(|element| predicate(element), |element| lifecycle.release(element));
    }

    /// Fold the elements tail to head into an accumulator.
    pub fn reduce<A, F>(&self, seed: A, mut combine: F) -> A
    where
        F: FnMut(A, &[u8]) -> A,
    {
        self.storage.fold_rev(seed, |acc, element| combine(acc, element))
    }

    /// Release every element, keeping one quantum reserved.
    pub fn clear(&mut self) {
        let elements = self.storage.take_all();
        self.release_all(elements);
    }

    /// Iterate over the live elements.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.storage.as_slice().iter().map(|element| &**element)
    }

    pub(crate) fn truncate_tail(&mut self, count: usize) {
        for element in self.storage.truncate_tail(count) {
            self.lifecycle.release(element);
        }
    }

    /// Allocate one element per `(value, width)` into a staging buffer.
    fn stage<'v, I>(&self, values: I) -> Result<Vec<Box<[u8]>>, ListError>
    where
        I: ExactSizeIterator<Item = (Option<&'v [u8]>, usize)>,
    {
        let mut staged = Vec::new();
        staged
            .try_reserve_exact(values.len())
            .map_err(|_| ListError::AllocationFailed {
                requested: values.len(),
            })?;
        for (value, width) in values {
            match self.lifecycle.allocate(value, width) {
                Ok(element) => staged.push(element),
                Err(e) => {
                    self.release_all(staged);
                    return Err(e);
                }
            }
        }
        Ok(staged)
    }

    /// Move staged elements in, or release them if slots can't be reserved.
    fn commit(&mut self, mut staged: Vec<Box<[u8]>>) -> Result<(), ListError> {
        if let Err(e) = self.storage.append_staged(&mut staged) {
            self.release_all(staged);
            return Err(e);
        }
        Ok(())
    }

    fn release_all(&self, elements: Vec<Box<[u8]>>) {
        for element in elements {
            self.lifecycle.release(element);
        }
    }
}

impl<L: ElementLifecycle> Drop for SlotList<L> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<L: ElementLifecycle> fmt::Debug for SlotList<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotList")
            .field("len", &self.storage.len())
            .field("capacity", &self.storage.capacity())
            .field("growth_quantum", &self.storage.growth_quantum())
            .field("element_width", &self.width)
            .finish_non_exhaustive()
    }
}

impl<L: ElementLifecycle> fmt::Display for SlotList<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for element in self.storage.as_slice() {
            for byte in element.iter() {
                write!(f, "{byte:02x}")?;
            }
            write!(f, " ")?;
        }
        write!(f, "]")
    }
}
