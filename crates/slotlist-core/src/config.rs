//! Container configuration parameters.

use std::error::Error;
use std::fmt;

/// Configuration for a slotlist container.
///
/// Controls the starting reservation, the growth quantum used to round
/// every later reservation, and the nominal element width. Validated when
/// a container is constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListConfig {
    /// Slots to reserve up front.
    ///
    /// Rounded up to a multiple of `growth_quantum`; zero still reserves one
    /// quantum. Default: 0.
    pub initial_reserve: usize,

    /// Rounding unit for every capacity change, in slots.
    ///
    /// Default: 16. Must be non-zero.
    pub growth_quantum: usize,

    /// Nominal element width in bytes.
    ///
    /// Used by the generic container whenever an operation does not pass an
    /// explicit width. Advisory only for text lists, whose elements are sized
    /// to their content. Default: 0.
    pub element_width: usize,
}

impl ListConfig {
    /// Default growth quantum, in slots.
    pub const DEFAULT_GROWTH_QUANTUM: usize = 16;

    /// Default initial reservation, in slots.
    pub const DEFAULT_INITIAL_RESERVE: usize = 0;

    /// Create a config with the given reservation and growth quantum.
    pub fn new(initial_reserve: usize, growth_quantum: usize) -> Self {
        Self {
            initial_reserve,
            growth_quantum,
            element_width: 0,
        }
    }

    /// Replace the initial reservation.
    pub fn with_initial_reserve(mut self, initial_reserve: usize) -> Self {
        self.initial_reserve = initial_reserve;
        self
    }

    /// Replace the growth quantum.
    pub fn with_growth_quantum(mut self, growth_quantum: usize) -> Self {
        self.growth_quantum = growth_quantum;
        self
    }

    /// Replace the nominal element width.
    pub fn with_element_width(mut self, element_width: usize) -> Self {
        self.element_width = element_width;
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.growth_quantum == 0 {
            return Err(ConfigError::ZeroGrowthQuantum);
        }
        if self
            .initial_reserve
            .checked_add(self.growth_quantum)
            .is_none()
        {
            return Err(ConfigError::ReserveOverflow {
                requested: self.initial_reserve,
            });
        }
        Ok(())
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_RESERVE, Self::DEFAULT_GROWTH_QUANTUM)
    }
}

/// Errors detected by [`ListConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The growth quantum is zero.
    ZeroGrowthQuantum,
    /// The initial reservation cannot be rounded to a quantum multiple.
    ReserveOverflow {
        /// The configured reservation.
        requested: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroGrowthQuantum => write!(f, "growth quantum must be non-zero"),
            Self::ReserveOverflow { requested } => {
                write!(f, "initial reserve of {requested} slots overflows")
            }
        }
    }
}

impl Error for ConfigError {}
