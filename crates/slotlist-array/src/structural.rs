//! Structural operations over [`ReservedVec`]: range removal, tail
//! truncation, reversal and block rotation.
//!
//! These work on slots only. Variants that own element resources receive
//! the removed slots back as a [`Batch`] and release them.

use smallvec::SmallVec;

use slotlist_core::index;
use slotlist_core::ListError;

use crate::storage::ReservedVec;

/// Slots taken out of a container by a structural operation.
pub type Batch<T> = SmallVec<[T; 8]>;

impl<T> ReservedVec<T> {
    /// Remove `count` slots starting at a signed index.
    ///
    /// Fails without touching the storage if `count` is zero or the range
    /// runs past the live end. The tail is shifted left to close the gap
    /// and the reservation re-tightened.
    pub fn remove_range(&mut self, index: isize, count: usize) -> Result<Batch<T>, ListError> {
        let range = index::resolve_exact(self.len(), index, count)?;
        let removed = self.items_mut().drain(range).collect();
        self.retighten();
        Ok(removed)
    }

    /// Remove up to `count` slots from the live end.
    pub fn truncate_tail(&mut self, count: usize) -> Batch<T> {
        let keep = self.len().saturating_sub(count);
        let removed = self.items_mut().drain(keep..).collect();
        self.retighten();
        removed
    }

    /// Reverse `count` slots starting at a signed index in place.
    ///
    /// A zero `count` reverses through the live end. Spans shorter than two
    /// slots succeed without doing anything.
    pub fn reverse(&mut self, index: isize, count: usize) -> Result<(), ListError> {
        let range = index::resolve_span(self.len(), index, count)?;
        if range.len() < 2 {
            return Ok(());
        }
        // Pairwise swap from both ends toward the middle.
        self.as_mut_slice()[range].reverse();
        Ok(())
    }

    /// Rotate `count` slots starting at a signed index by `amount`.
    ///
    /// A positive `amount` moves the last `amount` slots of the span to its
    /// front; a negative one moves the first `|amount|` slots to its back.
    /// A zero `count` rotates through the live end. Spans shorter than two
    /// slots are a no-op; `|amount|` larger than the span is rejected with
    /// [`ListError::RotationTooLarge`].
    pub fn rotate(&mut self, amount: isize, index: isize, count: usize) -> Result<(), ListError> {
        let range = index::resolve_span(self.len(), index, count)?;
        let span = range.len();
        if span < 2 {
            return Ok(());
        }
        let shift = amount.unsigned_abs();
        if shift > span {
            return Err(ListError::RotationTooLarge { amount, span });
        }
        if shift == 0 || shift == span {
            return Ok(());
        }

        let items = self.items_mut();
        if amount > 0 {
            let wrapped: Batch<T> = items.drain(range.end - shift..range.end).collect();
            items.splice(range.start..range.start, wrapped);
        } else {
            let wrapped: Batch<T> = items.drain(range.start..range.start + shift).collect();
            let at = range.end - shift;
            items.splice(at..at, wrapped);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_of(values: &[i32], quantum: usize) -> ReservedVec<i32> {
        let mut storage = ReservedVec::new(0, quantum).unwrap();
        for &v in values {
            storage.push(v).unwrap();
        }
        storage
    }

    #[test]
    fn remove_closes_gap_and_retightens() {
        let mut storage = storage_of(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9], 4);
        assert_eq!(storage.capacity(), 12);
        let removed = storage.remove_range(0, 5).unwrap();
        assert_eq!(removed.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(storage.as_slice(), &[5, 6, 7, 8, 9]);
        assert_eq!(storage.capacity(), 8);
    }

    #[test]
    fn remove_with_negative_index() {
        let mut storage = storage_of(&[1, 2, 3, 4], 4);
        storage.remove_range(-2, 1).unwrap();
        assert_eq!(storage.as_slice(), &[1, 2, 4]);
    }

    #[test]
    fn remove_rejects_bad_ranges() {
        let mut storage = storage_of(&[1, 2, 3], 4);
        assert_eq!(storage.remove_range(0, 0), Err(ListError::EmptyRange));
        assert!(storage.remove_range(2, 2).is_err());
        assert!(storage.remove_range(3, 1).is_err());
        assert_eq!(storage.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn truncate_tail_saturates() {
        let mut storage = storage_of(&[1, 2, 3], 4);
        assert_eq!(storage.truncate_tail(2).as_slice(), &[2, 3]);
        assert_eq!(storage.truncate_tail(10).as_slice(), &[1]);
        assert!(storage.is_empty());
    }

    #[test]
    fn reverse_sub_range() {
        let mut storage = storage_of(&[1, 2, 3, 4, 5], 4);
        storage.reverse(1, 3).unwrap();
        assert_eq!(storage.as_slice(), &[1, 4, 3, 2, 5]);
    }

    #[test]
    fn reverse_zero_count_runs_to_end() {
        let mut storage = storage_of(&[1, 2, 3, 4, 5], 4);
        storage.reverse(2, 0).unwrap();
        assert_eq!(storage.as_slice(), &[1, 2, 5, 4, 3]);
    }

    #[test]
    fn reverse_fails_on_empty_and_overrun() {
        let mut empty: ReservedVec<i32> = ReservedVec::new(0, 4).unwrap();
        assert!(empty.reverse(0, 0).is_err());
        let mut storage = storage_of(&[1, 2, 3], 4);
        assert!(storage.reverse(1, 3).is_err());
        assert!(storage.reverse(2, 1).is_ok());
    }

    #[test]
    fn rotate_positive_moves_tail_to_front() {
        let mut storage = storage_of(&[1, 2, 3, 4, 5], 4);
        storage.rotate(2, 0, 0).unwrap();
        assert_eq!(storage.as_slice(), &[4, 5, 1, 2, 3]);
    }

    #[test]
    fn rotate_negative_moves_head_to_back() {
        let mut storage = storage_of(&[1, 2, 3, 4, 5], 4);
        storage.rotate(-2, 0, 0).unwrap();
        assert_eq!(storage.as_slice(), &[3, 4, 5, 1, 2]);
    }

    #[test]
    fn rotate_sub_range_leaves_outside_alone() {
        let mut storage = storage_of(&[0, 1, 2, 3, 4, 5], 4);
        storage.rotate(1, 1, 3).unwrap();
        assert_eq!(storage.as_slice(), &[0, 3, 1, 2, 4, 5]);
    }

    #[test]
    fn rotate_full_span_is_noop_and_too_large_fails() {
        let mut storage = storage_of(&[1, 2, 3], 4);
        storage.rotate(3, 0, 0).unwrap();
        storage.rotate(-3, 0, 0).unwrap();
        assert_eq!(storage.as_slice(), &[1, 2, 3]);
        assert_eq!(
            storage.rotate(4, 0, 0),
            Err(ListError::RotationTooLarge { amount: 4, span: 3 })
        );
        assert_eq!(storage.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn rotate_keeps_capacity() {
        let mut storage = storage_of(&[1, 2, 3, 4, 5, 6, 7], 4);
        storage.rotate(-3, 0, 0).unwrap();
        assert_eq!(storage.capacity(), 8);
        assert_eq!(storage.len(), 7);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn reverse_twice_restores(
                values in proptest::collection::vec(any::<i32>(), 1..64),
                start in 0usize..64,
            ) {
                let start = start % values.len();
                let mut storage = storage_of(&values, 8);
                storage.reverse(start as isize, 0).unwrap();
                storage.reverse(start as isize, 0).unwrap();
                prop_assert_eq!(storage.as_slice(), values.as_slice());
            }

            #[test]
            fn rotate_then_unrotate_restores(
                values in proptest::collection::vec(any::<i32>(), 2..64),
                amount in 0usize..64,
            ) {
                let k = (amount % values.len()) as isize;
                let mut storage = storage_of(&values, 8);
                storage.rotate(k, 0, 0).unwrap();
                storage.rotate(-k, 0, 0).unwrap();
                prop_assert_eq!(storage.as_slice(), values.as_slice());
            }

            #[test]
            fn rotate_matches_slice_rotate_right(
                values in proptest::collection::vec(any::<i32>(), 2..64),
                amount in 0usize..64,
            ) {
                let k = amount % values.len();
                let mut storage = storage_of(&values, 8);
                storage.rotate(k as isize, 0, 0).unwrap();
                let mut expected = values.clone();
                expected.rotate_right(k);
                prop_assert_eq!(storage.as_slice(), expected.as_slice());
            }
        }
    }
}
