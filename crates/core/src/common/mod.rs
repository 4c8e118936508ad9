//! Common types and constants shared by every engine component.
//!
//! This module provides:
//! 1. **Constants:** RRPV bounds and default table geometry.
//! 2. **Access descriptor:** The per-access metadata the host hands the engine.
//! 3. **Errors:** Construction-time configuration failures.

/// Per-access metadata (address, PC, access kind).
pub mod access;
/// RRPV bounds and default table geometry.
pub mod constants;
/// Configuration error type returned by engine construction.
pub mod error;

pub use access::{Access, AccessKind};
pub use error::ConfigError;
