//! Replacement decision engine.
//!
//! Composes the units into the contract a cache model calls once per access:
//!
//! 1. On a miss, [`ReplacementPolicy::select_victim`] picks the way to evict.
//! 2. On every access, [`ReplacementPolicy::on_access`] trains the predictors
//!    and, on a miss, chooses the fill's insertion priority.
//! 3. [`ReplacementPolicy::stats`] reports the running counters.
//!
//! Construction ([`ReplacementEngine::new`]) is the only fallible step.

/// Insertion-priority decision and override precedence.
pub mod insertion;

/// The engine owning every table.
pub mod replacement;

pub use self::insertion::{InsertionDecision, InsertionPolicy, InsertionReason, Signals};
pub use self::replacement::ReplacementEngine;

use crate::common::Access;
use crate::stats::EngineStats;

/// Host-facing contract of a cache replacement policy.
///
/// Every access must be reported through `on_access`, including prefetches
/// and writebacks, since the predictors learn from the full stream.
pub trait ReplacementPolicy: Send + Sync {
    /// Selects the way to evict from `set` on a miss.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    /// * `access` - The access that missed.
    ///
    /// # Returns
    ///
    /// A way index in `0..ways`. Aging performed during the scan is kept.
    fn select_victim(&mut self, set: usize, access: &Access) -> usize;

    /// Updates replacement state for one access.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    /// * `way` - The hit way, or the way returned by `select_victim` on a miss.
    /// * `access` - The access being reported.
    /// * `hit` - Whether the access hit.
    fn on_access(&mut self, set: usize, way: usize, access: &Access, hit: bool);

    /// Counters accumulated since construction.
    fn stats(&self) -> EngineStats;
}
