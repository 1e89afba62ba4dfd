//! Slot storage with quantum-rounded reservations.
//!
//! [`ReservedVec`] is the backing store of every container variant. It
//! keeps its own `capacity` figure, always a whole multiple of the growth
//! quantum, and resizes the underlying `Vec` to match on every reservation
//! change. Growth happens one quantum at a time as slots are pushed;
//! shrink-back happens when occupancy drops far enough below capacity.

use slotlist_core::index;
use slotlist_core::{ConfigError, GrowthPolicy, ListConfig, ListError};

/// Growable slot storage with an explicit, quantum-rounded capacity.
///
/// Elements are owned by the storage; variants that manage element
/// resources (generic and text lists) take elements out through the
/// returning methods and release them themselves.
pub struct ReservedVec<T> {
    /// Live slots, in index order.
    items: Vec<T>,
    /// Reserved slots. Authoritative even if `items.capacity()` is larger.
    capacity: usize,
    policy: GrowthPolicy,
}

impl<T> ReservedVec<T> {
    /// Create storage reserving `initial_reserve` slots (at least one
    /// quantum).
    pub fn new(initial_reserve: usize, growth_quantum: usize) -> Result<Self, ListError> {
        let policy = GrowthPolicy::new(growth_quantum).ok_or(ConfigError::ZeroGrowthQuantum)?;
        let mut storage = Self {
            items: Vec::new(),
            capacity: 0,
            policy,
        };
        storage.reserve(initial_reserve, 0)?;
        Ok(storage)
    }

    /// Create storage from a validated config.
    pub fn with_config(config: &ListConfig) -> Result<Self, ListError> {
        config.validate()?;
        Self::new(config.initial_reserve, config.growth_quantum)
    }

    /// Number of live slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no slots are live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reserved slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current growth quantum.
    #[inline]
    pub fn growth_quantum(&self) -> usize {
        self.policy.quantum()
    }

    /// Live slots as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Live slots as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// The last live slot, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Resolve a signed index to a live position.
    #[inline]
    pub fn resolve(&self, index: isize) -> Result<usize, ListError> {
        index::resolve(self.items.len(), index)
    }

    /// Borrow the slot at a signed index.
    pub fn slot(&self, index: isize) -> Result<&T, ListError> {
        let at = self.resolve(index)?;
        Ok(&self.items[at])
    }

    /// Mutably borrow the slot at a signed index.
    pub fn slot_mut(&mut self, index: isize) -> Result<&mut T, ListError> {
        let at = self.resolve(index)?;
        Ok(&mut self.items[at])
    }

    /// Resize the reservation to hold `requested` slots.
    ///
    /// A zero `requested` re-tightens around the live length; a non-zero
    /// `growth_quantum` replaces the quantum first. The result is rounded
    /// by the growth policy and never drops live slots. On failure nothing
    /// changes, including the quantum.
    pub fn reserve(&mut self, requested: usize, growth_quantum: usize) -> Result<(), ListError> {
        let policy = GrowthPolicy::new(growth_quantum).unwrap_or(self.policy);
        let target = policy
            .target_capacity(requested, self.items.len())
            .ok_or(ListError::AllocationFailed { requested })?;
        self.resize_storage(target)?;
        self.policy = policy;
        self.capacity = target;
        self.check_invariants();
        Ok(())
    }

    /// Make room for `additional` more slots, growing only if needed.
    pub fn ensure_room(&mut self, additional: usize) -> Result<(), ListError> {
        let needed = self
            .items
            .len()
            .checked_add(additional)
            .ok_or(ListError::AllocationFailed {
                requested: usize::MAX,
            })?;
        if needed > self.capacity {
            self.reserve(needed, 0)?;
        }
        Ok(())
    }

    /// Append one slot, growing by a quantum if the storage is full.
    pub fn push(&mut self, value: T) -> Result<(), ListError> {
        self.ensure_room(1)?;
        self.items.push(value);
        Ok(())
    }

    /// Remove and return the last slot.
    ///
    /// Gives memory back once two quanta of slack have built up.
    pub fn pop(&mut self) -> Option<T> {
        let value = self.items.pop()?;
        if self.policy.should_shrink(self.capacity, self.items.len()) {
            self.retighten();
        }
        Some(value)
    }

    /// Reserve for `staged.len()` more slots, then move all of `staged` in.
    ///
    /// On failure `staged` is left untouched so the caller can dispose of it.
    pub fn append_staged(&mut self, staged: &mut Vec<T>) -> Result<(), ListError> {
        let target = self
            .items
            .len()
            .checked_add(staged.len())
            .ok_or(ListError::AllocationFailed {
                requested: usize::MAX,
            })?;
        self.reserve(target, 0)?;
        self.items.append(staged);
        Ok(())
    }

    /// Grow to `new_len` slots, filling new slots from `fill`.
    ///
    /// The reservation is resized to `new_len` before any slot is written.
    pub fn grow_with<F: FnMut() -> T>(&mut self, new_len: usize, fill: F) -> Result<(), ListError> {
        if new_len <= self.items.len() {
            return Ok(());
        }
        self.reserve(new_len, 0)?;
        self.items.resize_with(new_len, fill);
        Ok(())
    }

    /// Take every live slot out, leaving one quantum reserved.
    pub fn take_all(&mut self) -> Vec<T> {
        let taken = self.items.drain(..).collect();
        self.retighten();
        taken
    }

    /// Shrink the reservation to the smallest quantum multiple covering
    /// the live slots.
    pub(crate) fn retighten(&mut self) {
        if let Some(target) = self.policy.target_capacity(0, self.items.len()) {
            if target < self.capacity {
                self.items.shrink_to(target);
                self.capacity = target;
            }
        }
        self.check_invariants();
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    fn resize_storage(&mut self, target: usize) -> Result<(), ListError> {
        let current = self.items.capacity();
        if target > current {
            self.items
                .try_reserve_exact(target - self.items.len())
                .map_err(|_| ListError::AllocationFailed { requested: target })?;
        } else if target < current {
            self.items.shrink_to(target);
        }
        Ok(())
    }

    #[inline]
    fn check_invariants(&self) {
        debug_assert!(self.items.len() <= self.capacity);
        debug_assert_eq!(self.capacity % self.policy.quantum(), 0);
        debug_assert!(self.capacity >= self.policy.quantum());
    }
}
