//! Higher-order traversal over [`ReservedVec`]: map, filter and fold.
//!
//! Map walks head to tail. Filter and fold walk tail to head: filter asks
//! its predicate about the last element first and compacts the survivors in
//! a single pass, and fold feeds a non-commutative combiner the last element
//! first.

use crate::storage::ReservedVec;

impl<T> ReservedVec<T> {
    /// Visit every live slot head to tail with its index, allowing the
    /// visitor to replace the slot's value.
    pub fn map_slots<F>(&mut self, mut visit: F)
    where
        F: FnMut(usize, &mut T),
    {
        for (index, slot) in self.as_mut_slice().iter_mut().enumerate() {
            visit(index, slot);
        }
    }

    /// Keep the slots for which `keep` returns true, visiting tail to head.
    ///
    /// Survivors are swapped into a contiguous suffix as they are found, so
    /// `keep` always sees a slot in its original position. Once every slot
    /// has been visited the rejected prefix is drained into `evict` (in no
    /// particular order) and the survivors, still in their relative order,
    /// close up to the front. The reservation is re-tightened afterwards.
    pub fn filter_rev<P, E>(&mut self, mut keep: P, mut evict: E)
    where
        P: FnMut(&T) -> bool,
        E: FnMut(T),
    {
        let items = self.items_mut();
        // items[kept..] holds the survivors found so far.
        let mut kept = items.len();
        for at in (0..items.len()).rev() {
            if keep(&items[at]) {
                kept -= 1;
                items.swap(at, kept);
            }
        }
        for rejected in items.drain(..kept) {
            evict(rejected);
        }
        self.retighten();
    }

    /// Fold the live slots tail to head, starting from `seed`.
    pub fn fold_rev<A, F>(&self, seed: A, combine: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.as_slice().iter().rev().fold(seed, combine)
    }
}
