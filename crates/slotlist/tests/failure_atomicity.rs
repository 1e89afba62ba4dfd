//! Integration test: failed operations leave containers unchanged.
//!
//! A lifecycle that stops allocating after N calls is injected into a
//! generic list. Each failing operation must keep the list's contents,
//! length and capacity, and must release anything it staged.

use slotlist::prelude::*;
use slotlist_test_utils::fixtures::{int_list_of, raw_list_of, slot_bytes};
use slotlist_test_utils::FailingLifecycle;

fn failing_list(
    succeed_count: usize,
    values: &[&[u8]],
) -> (SlotList<FailingLifecycle>, FailingLifecycle) {
    let lifecycle = FailingLifecycle::new(succeed_count);
    let config = ListConfig::new(0, 4).with_element_width(1);
    let mut list = SlotList::with_lifecycle(&config, lifecycle.clone()).unwrap();
    for &v in values {
        list.push(Some(v)).unwrap();
    }
    (list, lifecycle)
}

#[test]
fn push_failure_adds_nothing() {
    let (mut list, lifecycle) = failing_list(0, &[]);
    assert!(matches!(
        list.push(Some(b"a".as_slice())),
        Err(ListError::AllocationFailed { .. })
    ));
    assert!(list.is_empty());
    assert_eq!(lifecycle.counts().live(), 0);
}

#[test]
fn resize_failure_releases_staged_elements() {
    let (mut list, lifecycle) = failing_list(3, &[b"a", b"b"]);
    let capacity = list.capacity();
    assert!(list.resize(5, Some(b"z".as_slice())).is_err());
    assert_eq!(slot_bytes(&list).concat(), b"ab");
    assert_eq!(list.capacity(), capacity);
    assert_eq!(lifecycle.counts().live(), 2);
    assert_eq!(lifecycle.calls(), 4);
}

#[test]
fn set_failure_keeps_old_element() {
    let (mut list, lifecycle) = failing_list(1, &[b"a"]);
    assert!(list.set(0, Some(b"b".as_slice())).is_err());
    assert_eq!(list.slot(0).unwrap(), b"a");
    assert_eq!(lifecycle.counts().live(), 1);
}

#[test]
fn copy_failure_then_retry() {
    let src = raw_list_of(1, &[b"x", b"y", b"z"]).unwrap();
    let (mut dest, lifecycle) = failing_list(2, &[]);
    assert!(dest.copy_from(&src, 0, 0).is_err());
    assert!(dest.is_empty());
    assert_eq!(lifecycle.counts().live(), 0);

    lifecycle.reset();
    dest.copy_from(&src, 1, 2).unwrap();
    assert_eq!(slot_bytes(&dest).concat(), b"yz");
}

#[test]
fn move_failure_keeps_source() {
    let mut src = raw_list_of(1, &[b"x", b"y"]).unwrap();
    let (mut dest, _lifecycle) = failing_list(1, &[]);
    assert!(dest.move_from(&mut src, 0, 0).is_err());
    assert_eq!(slot_bytes(&src).concat(), b"xy");
    assert!(dest.is_empty());
}

#[test]
fn map_values_failure_keeps_contents() {
    let (mut list, lifecycle) = failing_list(3, &[b"a", b"b"]);
    assert!(list.map_values(|_, _| Ok(b"q")).is_err());
    assert_eq!(slot_bytes(&list).concat(), b"ab");
    assert_eq!(lifecycle.counts().live(), 2);
}

#[test]
fn bad_ranges_touch_nothing() {
    let mut list = int_list_of(&[1, 2, 3]).unwrap();
    assert_eq!(
        list.rotate(4, 0, 0),
        Err(ListError::RotationTooLarge { amount: 4, span: 3 })
    );
    assert!(list.remove(2, 2).is_err());
    assert!(list.reverse(-4, 0).is_err());
    assert_eq!(list.as_slice(), &[1, 2, 3]);
}

#[test]
fn impossible_reservation_keeps_quantum() {
    let mut list = int_list_of(&[1, 2, 3]).unwrap();
    assert!(list.reserve(usize::MAX, 8).is_err());
    assert_eq!(list.capacity(), 4);
    assert_eq!(list.growth_quantum(), 4);
    assert_eq!(list.as_slice(), &[1, 2, 3]);
}

#[test]
fn text_rejects_invalid_utf8_from_raw_source() {
    let raw = raw_list_of(2, &[b"ok", &[0xc3, 0x28]]).unwrap();
    let mut text = TextList::new(0, 4).unwrap();
    assert!(matches!(
        text.copy_from_slots(&raw, 0, 0),
        Err(ListError::InvalidText { .. })
    ));
    assert!(text.is_empty());
}
