//! Slotlist: resizable lists with quantum-based reservation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the slotlist sub-crates. For most users, adding `slotlist` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use slotlist::prelude::*;
//!
//! // Reserve 4 slots and grow 4 at a time.
//! let mut numbers = IntList::new(4, 4).unwrap();
//! for i in 0..10 {
//!     numbers.push(i).unwrap();
//! }
//! assert_eq!(numbers.capacity(), 12);
//!
//! numbers.remove(0, 5).unwrap();
//! assert_eq!(numbers.as_slice(), &[5, 6, 7, 8, 9]);
//! assert_eq!(numbers.capacity(), 8);
//!
//! // Negative indices count from the end.
//! assert_eq!(numbers.get(-1), Ok(9));
//!
//! let mut names = TextList::new(0, 8).unwrap();
//! names.push("Ada").unwrap();
//! names.push("grace").unwrap();
//! assert_eq!(names.find_caseless("GRACE"), Some(1));
//! assert_eq!(names.to_string(), "[ Ada grace ]");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `slotlist-core` | Errors, config, growth policy, index resolution, element lifecycles |
//! | [`array`] | `slotlist-array` | Reserved storage and the `NumList`, `SlotList` and `TextList` variants |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Shared types (`slotlist-core`).
///
/// Contains [`types::ListError`], [`types::ListConfig`], the
/// [`types::GrowthPolicy`] and the [`types::ElementLifecycle`] trait with
/// its raw and text implementations.
pub use slotlist_core as types;

/// Storage and container variants (`slotlist-array`).
///
/// Most users only need the list types, which are also available in the
/// [`prelude`].
pub use slotlist_array as array;

/// Common imports for typical slotlist usage.
///
/// ```rust
/// use slotlist::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use slotlist_array::{IntList, NumList, SlotList, TextList};

    // Configuration and lifecycles
    pub use slotlist_core::{ElementLifecycle, ListConfig, RawBytes, TextComparator, TextLifecycle};

    // Errors
    pub use slotlist_core::{ConfigError, ListError};
}
