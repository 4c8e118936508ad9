//! Signature-based Hit Predictor (SHiP-lite).
//!
//! Lines remember a hashed signature of the PC that filled them. The table
//! maps each signature to a 2-bit reuse counter trained on what happens to
//! those lines afterwards:
//!
//! - a hit to a line increments the counter of the line's signature;
//! - evicting a line that was never hit decrements it.
//!
//! Signatures whose fills keep getting reused drift to the top of the range;
//! signatures whose fills die untouched drift to the bottom. On a fill the
//! *incoming* PC's counter chooses the insertion priority.
//!
//! # Performance
//!
//! - **Time Complexity:** O(1) for lookup and both training paths
//! - **Space Complexity:** O(T) 2-bit counters, T = table entries
//! - **Hardware Cost:** Low - one small SRAM and a per-line signature field

use super::counter::SatCounter;
use super::hash;
use crate::common::constants::{SHIP_COUNTER_INIT, SHIP_COUNTER_MAX, SHIP_REUSE_THRESHOLD};

/// Signature reuse table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureTable {
    /// One reuse counter per signature.
    counters: Vec<SatCounter>,
    /// log2 of the table size.
    bits: u32,
}

impl SignatureTable {
    /// Creates a table of `size` entries (a power of two), every counter weak.
    pub fn new(size: usize) -> Self {
        Self {
            counters: vec![
                SatCounter::new(u16::from(SHIP_COUNTER_INIT), u16::from(SHIP_COUNTER_MAX));
                size
            ],
            bits: size.trailing_zeros(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Always false; a table has at least one entry.
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Signature of the instruction at `pc`.
    #[inline]
    pub const fn signature(&self, pc: u64) -> u32 {
        hash::pc_signature(pc, self.bits) as u32
    }

    /// Reuse counter of `signature`.
    #[inline]
    pub fn counter(&self, signature: u32) -> u8 {
        self.counters[self.slot(signature)].get() as u8
    }

    /// True when `signature` is predicted to be reused.
    pub fn predicts_reuse(&self, signature: u32) -> bool {
        self.counter(signature) >= SHIP_REUSE_THRESHOLD
    }

    /// Trains on a hit to a line filled under `signature`.
    #[inline]
    pub fn record_hit(&mut self, signature: u32) {
        let slot = self.slot(signature);
        self.counters[slot].increment();
    }

    /// Trains on the eviction of a never-reused line filled under `signature`.
    #[inline]
    pub fn record_dead_eviction(&mut self, signature: u32) {
        let slot = self.slot(signature);
        self.counters[slot].decrement();
    }

    /// Decays every counter by one step toward "no reuse".
    pub fn decay(&mut self) {
        for counter in &mut self.counters {
            counter.decrement();
        }
    }

    /// Number of signatures currently predicted to be reused.
    pub fn reuse_predicted(&self) -> usize {
        self.counters
            .iter()
            .filter(|c| c.get() >= u16::from(SHIP_REUSE_THRESHOLD))
            .count()
    }

    #[inline]
    fn slot(&self, signature: u32) -> usize {
        signature as usize & (self.counters.len() - 1)
    }
}
