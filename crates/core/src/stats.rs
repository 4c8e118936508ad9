//! Replacement statistics collection and reporting.
//!
//! This module tracks what the engine has observed since construction. It provides:
//! 1. **Counters:** Hits, misses, evictions, and bypass fills.
//! 2. **Summary:** An end-of-run snapshot of the predictor tables and the duel.

use std::fmt;

use crate::units::DuelPolicy;

/// Monotonic engine counters; reset only by constructing a new engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    /// Accesses reported as hits.
    pub hits: u64,
    /// Accesses reported as misses (fills).
    pub misses: u64,
    /// Fills that replaced a valid line.
    pub evictions: u64,
    /// Fills inserted at `MAX_RRPV`.
    pub bypasses: u64,
}

impl EngineStats {
    /// Total accesses observed.
    pub const fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit rate in `[0, 1]`; zero before the first access.
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for EngineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={} misses={} evictions={} bypasses={} hit_rate={:.4}",
            self.hits,
            self.misses,
            self.evictions,
            self.bypasses,
            self.hit_rate()
        )
    }
}

/// Snapshot of the engine's learned state for end-of-run reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSummary {
    /// Counters at the time of the snapshot.
    pub stats: EngineStats,
    /// Signatures whose counter predicts reuse.
    pub reuse_signatures: usize,
    /// Signature table entries.
    pub signature_entries: usize,
    /// Sets whose last miss was part of a stream.
    pub streaming_sets: usize,
    /// Total sets.
    pub sets: usize,
    /// Dead-block entries currently set.
    pub dead_entries: usize,
    /// Dead-block table entries.
    pub dead_block_entries: usize,
    /// Dueling selector value.
    pub selector: u16,
    /// Largest selector value.
    pub selector_max: u16,
    /// Policy followers currently use.
    pub winner: DuelPolicy,
}

impl fmt::Display for EngineSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.stats)?;
        writeln!(
            f,
            "reuse signatures: {}/{}",
            self.reuse_signatures, self.signature_entries
        )?;
        writeln!(f, "streaming sets: {}/{}", self.streaming_sets, self.sets)?;
        writeln!(
            f,
            "dead-block entries: {}/{}",
            self.dead_entries, self.dead_block_entries
        )?;
        write!(
            f,
            "selector: {}/{} (winner {:?})",
            self.selector, self.selector_max, self.winner
        )
    }
}
