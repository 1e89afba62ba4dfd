//! Reservation-managed containers for slotlist.
//!
//! Every container variant sits on the same storage layer:
//!
//! ```text
//! ReservedVec<T> (amortized reservation, signed indexing)
//! ├── structural ops (remove_range, truncate_tail, reverse, rotate)
//! ├── traversal (map_slots, filter_rev, fold_rev)
//! │
//! ├── NumList<T>    fixed-width values copied by value (IntList = NumList<i64>)
//! ├── SlotList<L>   owned byte blocks managed by an ElementLifecycle
//! └── TextList      SlotList<TextLifecycle> with &str accessors
//! ```
//!
//! # Reservation
//!
//! Capacity is always a whole number of growth quanta and never below one
//! quantum. Pushing onto a full list grows it by exactly one quantum; popping
//! shrinks it back once two quanta are free; bulk removal re-tightens it to
//! the smallest multiple that still fits.
//!
//! # Failure atomicity
//!
//! Operations that fail return an error and leave the list as it was.
//! Generic and text lists allocate new elements into a staging buffer before
//! touching any slot.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod num_list;
pub mod slot_list;
pub mod storage;
pub mod structural;
pub mod text_list;
mod traversal;

pub use num_list::{IntList, NumList};
pub use slot_list::SlotList;
pub use storage::ReservedVec;
pub use structural::Batch;
pub use text_list::TextList;
