//! Predictor and bookkeeping units composed by the decision engine.
//!
//! Each unit owns one table and exposes its training and lookup rules in
//! isolation, so the engine only decides *when* to call them.

/// Saturating counters shared by every predictor.
pub mod counter;

/// Dead-block predictor indexed by block address.
pub mod dead_block;

/// Set-dueling (DIP-style) policy selector.
pub mod duel;

/// Index hashing for the predictor tables.
pub mod hash;

/// Per-line recency state and the RRIP victim scan.
pub mod rrip;

/// PC-signature reuse predictor (SHiP-lite).
pub mod ship;

/// Per-set constant-stride streaming detector.
pub mod stream;

pub use self::counter::SatCounter;
pub use self::dead_block::DeadBlockTable;
pub use self::duel::{DuelPolicy, SetDueling, SetLabel};
pub use self::rrip::{LineState, RecencyState};
pub use self::ship::SignatureTable;
pub use self::stream::{Direction, StreamDetector};
