//! Configuration errors.
//!
//! Construction is the only fallible engine operation. Once an engine exists,
//! every counter saturates and every table index is masked, so there is no
//! runtime error path.

use thiserror::Error;

use crate::config::InsertionHint;

/// Reasons an engine could not be constructed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The cache must have at least one set.
    #[error("number of sets must be non-zero")]
    ZeroSets,

    /// The cache must have at least one way.
    #[error("number of ways must be non-zero")]
    ZeroWays,

    /// A table that is indexed by masking was sized to a non power of two.
    #[error("{field} must be a non-zero power of two (got {value})")]
    NotPowerOfTwo {
        /// Name of the offending configuration field.
        field: &'static str,
        /// Value supplied.
        value: u64,
    },

    /// Streaming strides are only recognised at one or two lines.
    #[error("stream_max_stride_lines must be 1 or 2 (got {0})")]
    InvalidStride(u64),

    /// The dueling selector must fit the `u16` it is stored in.
    #[error("duel.selector_bits must be in 2..=16 (got {0})")]
    InvalidSelectorBits(u32),

    /// Each policy needs its own residue class of sample sets.
    #[error("duel.sample_ratio must be at least 2 (got {0})")]
    InvalidSampleRatio(usize),

    /// The bimodal policy needs a non-zero near-MRU period.
    #[error("duel.bimodal_throttle must be non-zero")]
    ZeroBimodalThrottle,

    /// An insertion hint appears twice in the precedence list.
    #[error("insertion hint {0:?} listed more than once in precedence")]
    DuplicateHint(InsertionHint),

    /// The JSON document could not be parsed into a configuration.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}
