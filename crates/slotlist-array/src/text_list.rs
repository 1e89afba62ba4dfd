//! Lists of owned text.

use std::fmt;

use slotlist_core::{ElementLifecycle, ListConfig, ListError, TextComparator, TextLifecycle};

use crate::slot_list::SlotList;

/// A resizable list of owned strings.
///
/// Backed by a [`SlotList`] with a [`TextLifecycle`]. Text is cut at its
/// first NUL when stored, the way a C string would be, and every stored
/// element is valid UTF-8.
///
/// Searching selects the comparator: [`find`](Self::find) switches the list
/// to ordinal comparison and [`find_caseless`](Self::find_caseless) to
/// ASCII-caseless comparison. The choice persists until the next switch.
pub struct TextList {
    slots: SlotList<TextLifecycle>,
}

impl TextList {
    /// Create a text list.
    pub fn new(initial_reserve: usize, growth_quantum: usize) -> Result<Self, ListError> {
        Self::with_config(&ListConfig::new(initial_reserve, growth_quantum))
    }

    /// Create a text list from a config. The element width is advisory.
    pub fn with_config(config: &ListConfig) -> Result<Self, ListError> {
        Ok(Self {
            slots: SlotList::with_lifecycle(config, TextLifecycle::default())?,
        })
    }

    /// Create a new list holding copies of a range of `src`.
    pub fn from_range(src: &TextList, index: isize, count: usize) -> Result<Self, ListError> {
        Ok(Self {
            slots: SlotList::from_range(&src.slots, index, count)?,
        })
    }

    /// Resize the reservation.
    pub fn reserve(&mut self, size: usize, growth_quantum: usize) -> Result<(), ListError> {
        self.slots.reserve(size, growth_quantum)
    }

    /// Number of strings.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Reserved slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Current growth quantum.
    #[inline]
    pub fn growth_quantum(&self) -> usize {
        self.slots.growth_quantum()
    }

    /// The comparator the last search left in place.
    pub fn comparator(&self) -> TextComparator {
        self.slots.lifecycle().comparator()
    }

    /// Remove `count` strings starting at a signed index.
    pub fn remove(&mut self, index: isize, count: usize) -> Result<(), ListError> {
        self.slots.remove(index, count)
    }

    /// Truncate to `new_len`, or extend to it with copies of `fill`.
    pub fn resize(&mut self, new_len: usize, fill: &str) -> Result<(), ListError> {
        self.slots.resize(new_len, Some(fill.as_bytes()))
    }

    /// Append a copy of `value` and return the stored text.
    pub fn push(&mut self, value: &str) -> Result<&str, ListError> {
        self.slots.push(Some(value.as_bytes())).map(stored_text)
    }

    /// Remove and return the last string.
    pub fn pop(&mut self) -> Result<String, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let text = self.get(-1)?.to_owned();
        self.slots.pop(None)?;
        Ok(text)
    }

    /// Borrow the string at a signed index.
    pub fn get(&self, index: isize) -> Result<&str, ListError> {
        self.slots.slot(index).map(stored_text)
    }

    /// Copy the string at a signed index into `out` with a NUL terminator.
    /// Returns the text length, not counting the terminator.
    pub fn get_into(&self, index: isize, out: &mut [u8]) -> Result<usize, ListError> {
        self.slots.get_into(index, out)
    }

    /// Replace the string at a signed index.
    pub fn set(&mut self, index: isize, value: &str) -> Result<(), ListError> {
        self.slots.set(index, Some(value.as_bytes()))
    }

    /// Index of the last string equal to `value`. Switches the list to
    /// ordinal comparison.
    pub fn find(&mut self, value: &str) -> Option<usize> {
        self.slots.lifecycle_mut().set_comparator(TextComparator::Ordinal);
        self.slots.find(value.as_bytes())
    }

    /// Index of the last string equal to `value` ignoring ASCII case.
    /// Switches the list to caseless comparison.
    pub fn find_caseless(&mut self, value: &str) -> Option<usize> {
        self.slots.lifecycle_mut().set_comparator(TextComparator::Caseless);
        self.slots.find(value.as_bytes())
    }

    /// Reverse `count` strings starting at a signed index (zero: to the end).
    pub fn reverse(&mut self, index: isize, count: usize) -> Result<(), ListError> {
        self.slots.reverse(index, count)
    }

    /// Rotate `count` strings starting at a signed index by `amount`.
    pub fn rotate(&mut self, amount: isize, index: isize, count: usize) -> Result<(), ListError> {
        self.slots.rotate(amount, index, count)
    }

    /// Append copies of a range of `src`.
    pub fn copy_from(
        &mut self,
        src: &TextList,
        index: isize,
        count: usize,
    ) -> Result<(), ListError> {
        self.slots.copy_from(&src.slots, index, count)
    }

    /// Append copies of a range of `src`, then shrink `src` by as many
    /// strings from its tail.
    pub fn move_from(
        &mut self,
        src: &mut TextList,
        index: isize,
        count: usize,
    ) -> Result<(), ListError> {
        self.slots.move_from(&mut src.slots, index, count)
    }

    /// Append text copies of a range of a generic list.
    ///
    /// Each element is read up to its first NUL and must be UTF-8.
    pub fn copy_from_slots<M: ElementLifecycle>(
        &mut self,
        src: &SlotList<M>,
        index: isize,
        count: usize,
    ) -> Result<(), ListError> {
        self.slots.copy_from(src, index, count)
    }

    /// The underlying generic list.
    pub fn as_slots(&self) -> &SlotList<TextLifecycle> {
        &self.slots
    }

    /// Replace every string, head to tail, with `transform(index, text)`.
    ///
    /// Either every string is replaced or, on error, none is.
    pub fn map<F>(&mut self, mut transform: F) -> Result<(), ListError>
    where
        F: FnMut(usize, &str) -> String,
    {
        self.slots
            .map_values(|i, bytes| as_text(bytes, i).map(|text| transform(i, text)))
    }

    /// Keep only the strings for which `predicate` holds, visiting tail to
    /// head.
    pub fn filter<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&str) -> bool,
    {
        self.slots.filter(|bytes| predicate(stored_text(bytes)));
    }

    /// Fold the strings tail to head into an accumulator.
    pub fn reduce<A, F>(&self, seed: A, mut combine: F) -> A
    where
        F: FnMut(A, &str) -> A,
    {
        self.slots.reduce(seed, |acc, bytes| combine(acc, stored_text(bytes)))
    }

    /// Drop every string, keeping one quantum reserved.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Iterate over the strings.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().map(stored_text)
    }
}

fn as_text(bytes: &[u8], index: usize) -> Result<&str, ListError> {
    std::str::from_utf8(bytes).map_err(|_| ListError::InvalidText { index: Some(index) })
}

/// Stored elements passed UTF-8 validation on allocation.
fn stored_text(bytes: &[u8]) -> &str {
    std::str::from_utf8(bytes).unwrap_or_default()
}

impl fmt::Debug for TextList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextList")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("growth_quantum", &self.growth_quantum())
            .field("comparator", &self.comparator())
            .finish()
    }
}

impl fmt::Display for TextList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for text in self.iter() {
            write!(f, "{text} ")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_list(values: &[&str]) -> TextList {
        let mut list = TextList::new(0, 4).unwrap();
        for v in values {
            list.push(v).unwrap();
        }
        list
    }

    fn contents(list: &TextList) -> Vec<&str> {
        list.iter().collect()
    }

    #[test]
    fn push_stops_at_nul() {
        let mut list = TextList::new(0, 2).unwrap();
        assert_eq!(list.push("hello\0world").unwrap(), "hello");
        assert_eq!(list.push("").unwrap(), "");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn pop_returns_owned_text() {
        let mut list = text_list(&["a", "bc"]);
        assert_eq!(list.pop().unwrap(), "bc");
        assert_eq!(list.pop().unwrap(), "a");
        assert_eq!(list.pop(), Err(ListError::Empty));
    }

    #[test]
    fn get_into_writes_terminator() {
        let list = text_list(&["abc"]);
        let mut out = [0xffu8; 4];
        assert_eq!(list.get_into(0, &mut out), Ok(3));
        assert_eq!(&out, b"abc\0");
        let mut short = [0u8; 3];
        assert!(list.get_into(0, &mut short).is_err());
    }

    #[test]
    fn set_and_negative_get() {
        let mut list = text_list(&["a", "b", "c"]);
        list.set(-2, "middle").unwrap();
        assert_eq!(list.get(1).unwrap(), "middle");
        assert_eq!(list.get(-1).unwrap(), "c");
        assert!(list.get(3).is_err());
        assert!(list.set(-4, "x").is_err());
    }

    #[test]
    fn find_switches_comparator() {
        let mut list = text_list(&["Apple", "banana", "APPLE"]);
        assert_eq!(list.find("apple"), None);
        assert_eq!(list.comparator(), TextComparator::Ordinal);
        assert_eq!(list.find_caseless("apple"), Some(2));
        assert_eq!(list.comparator(), TextComparator::Caseless);
        assert_eq!(list.find("Apple"), Some(0));
        assert_eq!(list.comparator(), TextComparator::Ordinal);
    }

    #[test]
    fn resize_fills_with_text() {
        let mut list = text_list(&["x"]);
        list.resize(3, "fill").unwrap();
        assert_eq!(contents(&list), ["x", "fill", "fill"]);
        list.resize(1, "").unwrap();
        assert_eq!(contents(&list), ["x"]);
    }

    #[test]
    fn remove_reverse_rotate() {
        let mut list = text_list(&["a", "b", "c", "d", "e"]);
        list.remove(-1, 1).unwrap();
        list.reverse(1, 2).unwrap();
        assert_eq!(contents(&list), ["a", "c", "b", "d"]);
        list.rotate(-1, 0, 0).unwrap();
        assert_eq!(contents(&list), ["c", "b", "d", "a"]);
    }

    #[test]
    fn copy_and_move_between_text_lists() {
        let mut src = text_list(&["one", "two", "three"]);
        let mut dest = TextList::new(0, 2).unwrap();
        dest.copy_from(&src, -2, 0).unwrap();
        assert_eq!(contents(&dest), ["two", "three"]);
        dest.move_from(&mut src, 0, 1).unwrap();
        assert_eq!(contents(&dest), ["two", "three", "one"]);
        assert_eq!(contents(&src), ["one", "two"]);
    }

    #[test]
    fn from_range_copies() {
        let src = text_list(&["a", "b", "c"]);
        let copy = TextList::from_range(&src, 1, 1).unwrap();
        assert_eq!(contents(&copy), ["b"]);
        assert_eq!(copy.growth_quantum(), src.growth_quantum());
    }

    #[test]
    fn copy_from_raw_slots_validates() {
        let mut raw = SlotList::new(0, 4, 4).unwrap();
        raw.push(Some(b"ok\0\0".as_slice())).unwrap();
        raw.push(Some([0xff, 0xfe, 0, 0].as_slice())).unwrap();
        let mut list = TextList::new(0, 4).unwrap();
        list.copy_from_slots(&raw, 0, 1).unwrap();
        assert_eq!(contents(&list), ["ok"]);
        assert!(list.copy_from_slots(&raw, 1, 1).is_err());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn map_is_all_or_nothing() {
        let mut list = text_list(&["a", "b"]);
        list.map(|i, text| format!("{text}{i}")).unwrap();
        assert_eq!(contents(&list), ["a0", "b1"]);
        list.map(|_, text| text.to_uppercase()).unwrap();
        assert_eq!(contents(&list), ["A0", "B1"]);
    }

    #[test]
    fn filter_and_reduce() {
        let mut list = text_list(&["keep", "drop", "keep too"]);
        list.filter(|text| text.starts_with("keep"));
        assert_eq!(contents(&list), ["keep", "keep too"]);
        let joined = list.reduce(String::new(), |mut acc, text| {
            acc.push_str(text);
            acc.push('|');
            acc
        });
        assert_eq!(joined, "keep too|keep|");
    }

    #[test]
    fn clear_keeps_a_quantum() {
        let mut list = text_list(&["a", "b", "c", "d", "e"]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 4);
    }

    #[test]
    fn display_lists_text() {
        assert_eq!(text_list(&["a", "b c"]).to_string(), "[ a b c ]");
        assert_eq!(text_list(&[]).to_string(), "[ ]");
    }
}
