//! Configuration for the replacement engine.
//!
//! This module defines every tunable the engine exposes. It provides:
//! 1. **Defaults:** Baseline table sizes and thresholds used by the reference policy.
//! 2. **Structures:** The root `Config` and the nested set-dueling `DuelConfig`.
//! 3. **Enums:** Signature band mapping and insertion-hint precedence.
//!
//! Configuration is supplied as JSON by the host (see [`Config::from_json`]) or
//! built from `Config::default()`. Validation runs once at engine construction.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the engine.
mod defaults {
    /// Cache line size in bytes.
    pub const LINE_BYTES: u64 = 64;

    /// Signature (SHiP) table entries.
    pub const SHIP_TABLE_SIZE: usize = 1024;

    /// Dead-block table entries.
    pub const DEAD_BLOCK_TABLE_SIZE: usize = 4096;

    /// Largest stride, in lines, that still counts as streaming.
    pub const STREAM_MAX_STRIDE_LINES: u64 = 2;

    /// One set in this many samples each dueling policy.
    pub const SAMPLE_RATIO: usize = 32;

    /// Width of the global dueling selector (0..=1023).
    pub const SELECTOR_BITS: u32 = 10;

    /// The bimodal policy inserts near-MRU once every this many fills.
    pub const BIMODAL_THROTTLE: u32 = 32;
}

/// Mapping from a signature reuse counter (0..=3) to an insertion RRPV.
///
/// Counter values map monotonically: a higher counter never yields a larger RRPV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SignatureBands {
    /// Reuse predicted (counter >= 2) inserts at 0, otherwise at `MAX_RRPV`.
    Two,
    /// Counter 3 inserts at 0, 1..=2 at `MAX_RRPV - 1`, 0 at `MAX_RRPV`.
    #[default]
    Three,
    /// Counter `c` inserts at `MAX_RRPV - c`.
    Four,
}

/// Override signals consulted, in order, before the set's dueling policy.
///
/// The first hint that fires decides the insertion RRPV; hints not listed
/// are ignored entirely, which lets each signal be exercised in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum InsertionHint {
    /// The incoming block's dead-block entry is set.
    DeadBlock,
    /// The set's streaming detector fired on this miss.
    Streaming,
}

/// Set-dueling (DIP-style) parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// When false every set is a follower and the selector never moves.
    pub enabled: bool,

    /// One set in `sample_ratio` samples policy A, the next one policy B.
    pub sample_ratio: usize,

    /// Width of the saturating global selector.
    pub selector_bits: u32,

    /// Period of near-MRU fills under the bimodal policy.
    pub bimodal_throttle: u32,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sample_ratio: defaults::SAMPLE_RATIO,
            selector_bits: defaults::SELECTOR_BITS,
            bimodal_throttle: defaults::BIMODAL_THROTTLE,
        }
    }
}

/// Root engine configuration.
///
/// # Examples
///
/// ```
/// use rripsim_core::config::{Config, InsertionHint, SignatureBands};
///
/// let json = r#"{
///     "line_bytes": 64,
///     "ship_table_size": 4096,
///     "bands": "Four",
///     "precedence": ["Streaming"],
///     "duel": { "sample_ratio": 64 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.ship_table_size, 4096);
/// assert_eq!(config.bands, SignatureBands::Four);
/// assert_eq!(config.precedence, vec![InsertionHint::Streaming]);
/// assert_eq!(config.duel.sample_ratio, 64);
/// assert_eq!(config.duel.selector_bits, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cache line size in bytes; addresses are aligned to it.
    pub line_bytes: u64,

    /// Entries in the PC-signature table.
    pub ship_table_size: usize,

    /// Entries in the dead-block table.
    pub dead_block_table_size: usize,

    /// Signature counter to insertion RRPV mapping.
    pub bands: SignatureBands,

    /// Largest stride (in lines, both directions) treated as streaming.
    pub stream_max_stride_lines: u64,

    /// Override hints, highest priority first.
    pub precedence: Vec<InsertionHint>,

    /// Set-dueling parameters.
    pub duel: DuelConfig,

    /// Accesses between decay passes over the predictor tables; 0 disables decay.
    pub decay_interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_bytes: defaults::LINE_BYTES,
            ship_table_size: defaults::SHIP_TABLE_SIZE,
            dead_block_table_size: defaults::DEAD_BLOCK_TABLE_SIZE,
            bands: SignatureBands::default(),
            stream_max_stride_lines: defaults::STREAM_MAX_STRIDE_LINES,
            precedence: vec![InsertionHint::DeadBlock, InsertionHint::Streaming],
            duel: DuelConfig::default(),
            decay_interval: 0,
        }
    }
}

impl Config {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed. The parsed
    /// values are not validated here; that happens at engine construction.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks the configuration against the cache geometry.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: zero sets or ways, a
    /// non-power-of-two table or line size, an unsupported stride limit,
    /// a selector width or sample ratio out of range, a zero bimodal
    /// throttle, or a duplicated precedence hint.
    pub fn validate(&self, num_sets: usize, num_ways: usize) -> Result<(), ConfigError> {
        if num_sets == 0 {
            return Err(ConfigError::ZeroSets);
        }
        if num_ways == 0 {
            return Err(ConfigError::ZeroWays);
        }
        if !self.line_bytes.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo {
                field: "line_bytes",
                value: self.line_bytes,
            });
        }
        if !self.ship_table_size.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo {
                field: "ship_table_size",
                value: self.ship_table_size as u64,
            });
        }
        if !self.dead_block_table_size.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo {
                field: "dead_block_table_size",
                value: self.dead_block_table_size as u64,
            });
        }
        if !(1..=2).contains(&self.stream_max_stride_lines) {
            return Err(ConfigError::InvalidStride(self.stream_max_stride_lines));
        }
        if !(2..=16).contains(&self.duel.selector_bits) {
            return Err(ConfigError::InvalidSelectorBits(self.duel.selector_bits));
        }
        if self.duel.sample_ratio < 2 {
            return Err(ConfigError::InvalidSampleRatio(self.duel.sample_ratio));
        }
        if self.duel.bimodal_throttle == 0 {
            return Err(ConfigError::ZeroBimodalThrottle);
        }
        for (i, hint) in self.precedence.iter().enumerate() {
            if self.precedence[..i].contains(hint) {
                return Err(ConfigError::DuplicateHint(*hint));
            }
        }
        Ok(())
    }

    /// Number of low address bits covered by one line.
    pub const fn line_shift(&self) -> u32 {
        self.line_bytes.trailing_zeros()
    }
}
