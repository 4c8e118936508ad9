//! Predictive cache replacement engine.
//!
//! This crate decides, for one set-associative cache, which line to evict on
//! a miss and what retention priority a filled or re-referenced line gets:
//! 1. **Recency:** 2-bit RRIP state per line with a bounded aging scan.
//! 2. **Predictors:** PC-signature reuse (SHiP-lite), dead-block, and per-set streaming detection.
//! 3. **Adaptation:** DIP-style set dueling between signature-guided and bimodal insertion.
//! 4. **Contract:** `select_victim` / `on_access` / `stats`, driven once per access by the host cache model.
//!
//! The engine never stores data or tags and never performs I/O; it only reads
//! access metadata and updates its own tables.
//!
//! ```
//! use rripsim_core::{Access, Config, ReplacementEngine, ReplacementPolicy};
//!
//! let mut engine = ReplacementEngine::new(64, 8, Config::default()).unwrap();
//! let access = Access::load(0x8000_1040, 0x400_123c);
//! let set = 1;
//!
//! let way = engine.select_victim(set, &access);
//! engine.on_access(set, way, &access, false);
//! engine.on_access(set, way, &access, true);
//!
//! assert_eq!(engine.line(set, way).rrpv, 0);
//! assert_eq!(engine.stats().hits, 1);
//! ```

/// Common types and constants (RRPV bounds, access descriptor, errors).
pub mod common;
/// Engine configuration (defaults, band mapping, hint precedence, dueling).
pub mod config;
/// Decision engine and the host-facing replacement contract.
pub mod engine;
/// Engine counters and end-of-run summary.
pub mod stats;
/// Predictor and recency units (counters, hashing, RRIP, SHiP, dead-block, streaming, dueling).
pub mod units;

/// Access descriptor passed to both engine entry points.
pub use crate::common::{Access, AccessKind, ConfigError};
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// The engine and its host contract.
pub use crate::engine::{ReplacementEngine, ReplacementPolicy};
/// Running counters.
pub use crate::stats::{EngineStats, EngineSummary};
