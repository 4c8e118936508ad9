//! Saturating Counter.
//!
//! A small unsigned counter clamped to `0..=max`. Increments at the ceiling
//! and decrements at the floor are no-ops, so no update sequence can leave
//! the declared range.

/// Bounded counter with clamped increment and decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatCounter {
    value: u16,
    max: u16,
}

impl SatCounter {
    /// Creates a counter with ceiling `max`, starting at `initial`.
    ///
    /// `initial` is clamped into range.
    pub const fn new(initial: u16, max: u16) -> Self {
        let value = if initial > max { max } else { initial };
        Self { value, max }
    }

    /// Creates a counter `bits` wide, starting at `initial`.
    pub const fn with_bits(initial: u16, bits: u32) -> Self {
        let max = if bits >= 16 {
            u16::MAX
        } else {
            (1 << bits) - 1
        };
        Self::new(initial, max)
    }

    /// Raises the value by one unless already at the ceiling.
    #[inline]
    pub const fn increment(&mut self) {
        if self.value < self.max {
            self.value += 1;
        }
    }

    /// Lowers the value by one unless already at zero.
    #[inline]
    pub const fn decrement(&mut self) {
        if self.value > 0 {
            self.value -= 1;
        }
    }

    /// Current value.
    #[inline]
    pub const fn get(self) -> u16 {
        self.value
    }

    /// Ceiling of the counter.
    #[inline]
    pub const fn max(self) -> u16 {
        self.max
    }

    /// True when the counter sits at its ceiling.
    #[inline]
    pub const fn is_saturated(self) -> bool {
        self.value == self.max
    }

    /// Midpoint of the range, rounded up (`2^(bits-1)` for a full-width counter).
    #[inline]
    pub const fn midpoint(self) -> u16 {
        self.max / 2 + self.max % 2
    }

    /// Overwrites the value, clamping it into range.
    pub const fn set(&mut self, value: u16) {
        self.value = if value > self.max { self.max } else { value };
    }
}
