//! Core types for the slotlist containers.
//!
//! This is the leaf crate with zero internal dependencies. It holds the
//! pieces every container variant shares:
//!
//! - [`ListError`] and [`ConfigError`], the error vocabulary.
//! - [`ListConfig`], construction-time parameters.
//! - [`GrowthPolicy`], the capacity rounding rules.
//! - [`index`], signed index and span resolution.
//! - [`ElementLifecycle`] with the [`RawBytes`] and [`TextLifecycle`]
//!   defaults, the injectable element ownership model.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod growth;
pub mod index;
pub mod lifecycle;

pub use config::{ConfigError, ListConfig};
pub use error::ListError;
pub use growth::GrowthPolicy;
pub use lifecycle::{ElementLifecycle, RawBytes, TextComparator, TextLifecycle};
