//! Engine-wide constants.
//!
//! The RRPV field is two bits wide in every policy this engine models, so the
//! bound is fixed at compile time rather than configured.

/// Largest re-reference prediction value; a line at this value is evicted first.
pub const MAX_RRPV: u8 = 3;

/// Insertion value used by static RRIP: one step short of immediate eviction.
pub const SRRIP_INSERT_RRPV: u8 = MAX_RRPV - 1;

/// Upper bound of the per-signature reuse counters (2-bit).
pub const SHIP_COUNTER_MAX: u8 = 3;

/// Initial value of every signature counter ("weakly reused").
pub const SHIP_COUNTER_INIT: u8 = 1;

/// Signature counters at or above this value predict reuse.
pub const SHIP_REUSE_THRESHOLD: u8 = 2;

/// Low PC bits dropped before hashing (instructions are at least 4-byte aligned).
pub const PC_ALIGN_SHIFT: u32 = 2;
