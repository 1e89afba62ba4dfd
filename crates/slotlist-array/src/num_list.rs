//! Fixed-width numeric lists.
//!
//! [`NumList`] stores plain `Copy` values directly in its slots, so there is
//! no element lifecycle to manage: assignment is the copy, and removing a
//! value releases nothing.

use std::fmt;

use slotlist_core::index;
use slotlist_core::{ListConfig, ListError};

use crate::storage::ReservedVec;

/// A resizable list of fixed-width values.
///
/// Every structural and traversal operation is the generic one from
/// [`ReservedVec`]; this type only adds value semantics on top.
pub struct NumList<T> {
    storage: ReservedVec<T>,
}

/// The integer list: a [`NumList`] of `i64`.
pub type IntList = NumList<i64>;

impl<T: Copy + PartialEq> NumList<T> {
    /// Create a list reserving `initial_reserve` slots, growing in steps of
    /// `growth_quantum`.
    pub fn new(initial_reserve: usize, growth_quantum: usize) -> Result<Self, ListError> {
        Ok(Self {
            storage: ReservedVec::new(initial_reserve, growth_quantum)?,
        })
    }

    /// Create a list from a config. The element width is ignored.
    pub fn with_config(config: &ListConfig) -> Result<Self, ListError> {
        Ok(Self {
            storage: ReservedVec::with_config(config)?,
        })
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

    /// Width of one element in bytes.
    #[inline]
    pub fn element_width(&self) -> usize {
        std::mem::size_of::<T>()
    }

    /// Remove `count` elements starting at a signed index.
    pub fn remove(&mut self, index: isize, count: usize) -> Result<(), ListError> {
        self.storage.remove_range(index, count).map(drop)
    }

    /// Truncate to `new_len`, or extend to it with copies of `fill`.
    pub fn resize(&mut self, new_len: usize, fill: T) -> Result<(), ListError> {
        let len = self.len();
        if new_len < len {
            self.storage.truncate_tail(len - new_len);
            return Ok(());
        }
        self.storage.grow_with(new_len, || fill)
    }

    /// Append a value, growing by one quantum if the list is full.
    pub fn push(&mut self, value: T) -> Result<(), ListError> {
        self.storage.push(value)
    }

    /// Remove and return the last value.
    pub fn pop(&mut self) -> Result<T, ListError> {
        self.storage.pop().ok_or(ListError::Empty)
    }

    /// Borrow the slot at a signed index.
    pub fn slot(&self, index: isize) -> Result<&T, ListError> {
        self.storage.slot(index)
    }

    /// Mutably borrow the slot at a signed index.
    pub fn slot_mut(&mut self, index: isize) -> Result<&mut T, ListError> {
        self.storage.slot_mut(index)
    }

    /// The value at a signed index.
    pub fn get(&self, index: isize) -> Result<T, ListError> {
        self.storage.slot(index).copied()
    }

    /// Overwrite the value at a signed index.
    pub fn set(&mut self, index: isize, value: T) -> Result<(), ListError> {
        *self.storage.slot_mut(index)? = value;
        Ok(())
    }

    /// Index of the last element equal to `value`, scanning from the end.
    pub fn find(&self, value: T) -> Option<usize> {
        self.storage.as_slice().iter().rposition(|v| *v == value)
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

    /// Append copies of `count` elements of `src` starting at `index`
    /// (zero count: to the end).
    ///
    /// The reservation grows using this list's own growth quantum.
    pub fn copy_from(
        &mut self,
        src: &NumList<T>,
        index: isize,
        count: usize,
    ) -> Result<(), ListError> {
        let values = &src.as_slice()[index::resolve_span(src.len(), index, count)?];
        let mut staged = Vec::new();
        staged
            .try_reserve_exact(values.len())
            .map_err(|_| ListError::AllocationFailed {
                requested: values.len(),
            })?;
        staged.extend_from_slice(values);
        self.storage.append_staged(&mut staged)
    }

    /// Copy a range of `src` onto this list, then shrink `src` by the number
    /// of elements copied, taken from its tail.
    pub fn move_from(
        &mut self,
        src: &mut NumList<T>,
        index: isize,
        count: usize,
    ) -> Result<(), ListError> {
        let moved = index::resolve_span(src.len(), index, count)?.len();
        self.copy_from(src, index, count)?;
        src.storage.truncate_tail(moved);
        Ok(())
    }

    /// Replace every element, head to tail, with `transform(index, value)`.
    pub fn map<F>(&mut self, mut transform: F)
    where
        F: FnMut(usize, T) -> T,
    {
        self.storage.map_slots(|i, slot| *slot = transform(i, *slot));
    }

    /// Keep only the elements for which `predicate` holds, visiting tail to
    /// head.
    pub fn filter<P>(&mut self, mut predicate: P)
    where
        P: FnMut(T) -> bool,
    {
        self.storage.filter_rev(|v| predicate(*v), drop);
    }

    /// Fold the elements tail to head into an accumulator.
    pub fn reduce<A, F>(&self, seed: A, mut combine: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.storage.fold_rev(seed, |acc, v| combine(acc, *v))
    }

    /// Remove every element, keeping one quantum reserved.
    pub fn clear(&mut self) {
        self.storage.take_all();
    }

    /// Live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Iterate over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.as_slice().iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for NumList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumList")
            .field("len", &self.storage.len())
            .field("capacity", &self.storage.capacity())
            .field("growth_quantum", &self.storage.growth_quantum())
            .field("items", &self.storage.as_slice())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for NumList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for v in self.storage.as_slice() {
            write!(f, "{v} ")?;
        }
        write!(f, "]")
    }
}
