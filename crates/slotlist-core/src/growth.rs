//! Capacity rounding policy.
//!
//! A [`GrowthPolicy`] turns a requested reservation into a target capacity.
//! Capacities are always whole multiples of the growth quantum and never
//! smaller than one quantum, so a container's footprint moves in quantum
//! steps no matter how it grows or shrinks.

/// Growth quantum and the arithmetic that goes with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    quantum: usize,
}

impl GrowthPolicy {
    /// Create a policy with the given quantum.
    ///
    /// Returns `None` for a zero quantum.
    pub fn new(quantum: usize) -> Option<Self> {
        (quantum > 0).then_some(Self { quantum })
    }

    /// The rounding unit, in slots.
    #[inline]
    pub fn quantum(&self) -> usize {
        self.quantum
    }

    /// Capacity to hold `requested` slots while `len` slots are live.
    ///
    /// A zero request means "re-tighten around the current length". The
    /// request is clamped to `len` so live slots are never dropped, rounded
    /// up to a multiple of the quantum and floored at one quantum. Returns
    /// `None` if the rounded value overflows `usize`.
    pub fn target_capacity(&self, requested: usize, len: usize) -> Option<usize> {
        let requested = if requested == 0 { len } else { requested };
        let requested = requested.max(len);
        let units = requested.div_ceil(self.quantum).max(1);
        units.checked_mul(self.quantum)
    }

    /// Whether a container holding `len` slots in `capacity` should give
    /// memory back.
    ///
    /// True once the free slack reaches twice the quantum.
    #[inline]
    pub fn should_shrink(&self, capacity: usize, len: usize) -> bool {
        capacity.saturating_sub(len) >= self.quantum.saturating_mul(2)
    }
}
