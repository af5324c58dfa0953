//! Duration abstraction for platform-agnostic timing.

/// Trait abstraction for duration types.
///
/// Every timer in the crate accumulates values of this type, so a board can
/// plug in its own duration (fugit, embassy-time, ...) or use [`Millis`].
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating addition (clamps at the type's maximum).
    fn saturating_add(self, other: Self) -> Self;
}

/// Millisecond duration backed by a `u32` (wraps after ~49.7 days).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl TimeDuration for Millis {
    const ZERO: Self = Millis(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        Millis(u32::try_from(millis).unwrap_or(u32::MAX))
    }

    fn saturating_add(self, other: Self) -> Self {
        Millis(self.0.saturating_add(other.0))
    }
}
