//! Dead-Block Predictor.
//!
//! A one-bit-per-entry table indexed by block number. An eviction marks the
//! outgoing block's entry dead; a hit marks the entry alive again. When a
//! block is filled and its entry reads dead, the engine may insert it at the
//! most-evictable priority.
//!
//! The table is indexed by the low bits of the block number only, so blocks
//! sharing those bits share a prediction.

use super::hash;

/// Dead/alive prediction per hashed block number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadBlockTable {
    /// `true` = predicted dead.
    dead: Vec<bool>,
    /// log2 of the table size.
    bits: u32,
}

impl DeadBlockTable {
    /// Creates a table of `size` entries (a power of two), all alive.
    pub fn new(size: usize) -> Self {
        Self {
            dead: vec![false; size],
            bits: size.trailing_zeros(),
        }
    }

    /// Table index of `block`.
    #[inline]
    pub const fn index(&self, block: u64) -> usize {
        hash::block_index(block, self.bits)
    }

    /// Prediction for `block`.
    #[inline]
    pub fn is_dead(&self, block: u64) -> bool {
        self.dead[self.index(block)]
    }

    /// Records the eviction of `block`.
    #[inline]
    pub fn mark_dead(&mut self, block: u64) {
        let idx = self.index(block);
        self.dead[idx] = true;
    }

    /// Records a hit to `block`.
    #[inline]
    pub fn mark_alive(&mut self, block: u64) {
        let idx = self.index(block);
        self.dead[idx] = false;
    }

    /// Clears every prediction back to alive.
    pub fn reset(&mut self) {
        self.dead.fill(false);
    }

    /// Number of entries currently predicted dead.
    pub fn dead_entries(&self) -> usize {
        self.dead.iter().filter(|&&d| d).count()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.dead.len()
    }

    /// Always false; a table has at least one entry.
    pub fn is_empty(&self) -> bool {
        self.dead.is_empty()
    }
}
