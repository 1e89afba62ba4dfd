//! Error types shared by every slotlist container.
//!
//! All containers report failure through [`ListError`]. Whatever the
//! variant, a failed operation leaves the container exactly as it found
//! it: same length, same elements, same capacity and growth quantum.

use std::error::Error;
use std::fmt;

use crate::config::ConfigError;

/// Errors returned by container operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// A signed index did not resolve to a live slot.
    IndexOutOfRange {
        /// The index as supplied by the caller.
        index: isize,
        /// Live length of the container at the time of the call.
        len: usize,
    },
    /// A range starting at `index` and spanning `count` slots runs past
    /// the live end of the container.
    RangeOutOfBounds {
        /// Start of the range as supplied by the caller.
        index: isize,
        /// Number of slots requested.
        count: usize,
        /// Live length of the container at the time of the call.
        len: usize,
    },
    /// A removal was requested with a count of zero.
    EmptyRange,
    /// The container holds no elements (`pop` on an empty list).
    Empty,
    /// Slot or element storage could not be acquired.
    AllocationFailed {
        /// Number of slots (for slot storage) or bytes (for element
        /// storage) that were requested.
        requested: usize,
    },
    /// A rotation amount larger than the span being rotated.
    RotationTooLarge {
        /// Requested rotation amount.
        amount: isize,
        /// Number of slots in the rotated span.
        span: usize,
    },
    /// A copy-out destination cannot hold the element.
    BufferTooSmall {
        /// Bytes needed to copy the element out.
        needed: usize,
        /// Bytes available in the destination.
        available: usize,
    },
    /// Text element bytes are not valid UTF-8.
    InvalidText {
        /// Live index of the offending element, when it is already stored.
        index: Option<usize>,
    },
    /// Container configuration failed validation.
    Config(ConfigError),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::RangeOutOfBounds { index, count, len } => {
                write!(
                    f,
                    "range of {count} slots at index {index} exceeds length {len}"
                )
            }
            Self::EmptyRange => write!(f, "range must span at least one slot"),
            Self::Empty => write!(f, "list is empty"),
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested}")
            }
            Self::RotationTooLarge { amount, span } => {
                write!(f, "rotation by {amount} exceeds span of {span} slots")
            }
            Self::BufferTooSmall { needed, available } => {
                write!(
                    f,
                    "destination buffer too small: need {needed} bytes, have {available}"
                )
            }
            Self::InvalidText { index } => {
                write!(f, "text element is not valid UTF-8")?;
                if let Some(idx) = index {
                    write!(f, " at index {idx}")?;
                }
                Ok(())
            }
            Self::Config(e) => write!(f, "invalid list configuration: {e}"),
        }
    }
}

impl Error for ListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for ListError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_index_and_len() {
        let e = ListError::IndexOutOfRange { index: -4, len: 3 };
        assert_eq!(e.to_string(), "index -4 out of range for length 3");
    }

    #[test]
    fn invalid_text_display_with_and_without_index() {
        assert_eq!(
            ListError::InvalidText { index: Some(2) }.to_string(),
            "text element is not valid UTF-8 at index 2"
        );
        assert_eq!(
            ListError::InvalidText { index: None }.to_string(),
            "text element is not valid UTF-8"
        );
    }

    #[test]
    fn config_error_is_the_source() {
        let e: ListError = ConfigError::ZeroGrowthQuantum.into();
        assert!(e.source().is_some());
        assert!(e.to_string().contains("growth quantum"));
    }
}
