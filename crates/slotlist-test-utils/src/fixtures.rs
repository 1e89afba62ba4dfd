//! List-building fixtures.
//!
//! - [`int_list_of`]: an `IntList` holding the given values.
//! - [`text_list_of`]: a `TextList` holding the given strings.
//! - [`raw_list_of`]: a raw-byte `SlotList` of fixed-width elements.
//! - [`slot_bytes`]: owned copies of a generic list's elements.
//!
//! Every fixture uses [`FIXTURE_QUANTUM`] and no initial reserve, so
//! capacities in assertions are easy to predict.

use slotlist_array::{IntList, SlotList, TextList};
use slotlist_core::{ElementLifecycle, ListError, RawBytes};

/// Growth quantum used by every fixture.
pub const FIXTURE_QUANTUM: usize = 4;

pub fn int_list_of(values: &[i64]) -> Result<IntList, ListError> {
    let mut list = IntList::new(0, FIXTURE_QUANTUM)?;
    for &v in values {
        list.push(v)?;
    }
    Ok(list)
}

pub fn text_list_of(values: &[&str]) -> Result<TextList, ListError> {
    let mut list = TextList::new(0, FIXTURE_QUANTUM)?;
    for v in values {
        list.push(v)?;
    }
    Ok(list)
}

pub fn raw_list_of(width: usize, values: &[&[u8]]) -> Result<SlotList<RawBytes>, ListError> {
    let mut list = SlotList::new(0, FIXTURE_QUANTUM, width)?;
    for &v in values {
        list.push(Some(v))?;
    }
    Ok(list)
}

pub fn slot_bytes<L: ElementLifecycle>(list: &SlotList<L>) -> Vec<Vec<u8>> {
    list.iter().map(<[u8]>::to_vec).collect()
}
