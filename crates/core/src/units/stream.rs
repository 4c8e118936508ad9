//! Streaming Detector.
//!
//! Flags sets whose misses walk memory at a constant small stride. Each set
//! remembers the last two block-aligned addresses it filled. On every miss
//! the detector compares the new delta with the previous one; if they match
//! and the stride is one or two lines (either direction), the set is
//! streaming for this miss. The flag is recomputed on every miss and is
//! never carried over on its own.
//!
//! An empty history slot (address 0) contributes a zero delta, so a cold set
//! never looks like a stream.

/// Direction of a detected stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// No stream on the last miss.
    #[default]
    None,
    /// Ascending addresses.
    Ascending,
    /// Descending addresses.
    Descending,
}

/// Per-set streaming state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SetHistory {
    /// `recent[0]` is the latest fill address, `recent[1]` the one before.
    recent: [u64; 2],
    /// Outcome of the last miss.
    direction: Direction,
}

/// Constant-stride streaming detector for every set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDetector {
    sets: Vec<SetHistory>,
    /// Line size in bytes.
    line_bytes: u64,
    /// Largest stride in lines still counted as streaming.
    max_stride_lines: u64,
}

impl StreamDetector {
    /// Creates a detector for `sets` sets.
    ///
    /// # Arguments
    ///
    /// * `sets` - Number of cache sets.
    /// * `line_bytes` - Line size in bytes.
    /// * `max_stride_lines` - Largest stride (1 or 2 lines) treated as streaming.
    pub fn new(sets: usize, line_bytes: u64, max_stride_lines: u64) -> Self {
        Self {
            sets: vec![SetHistory::default(); sets],
            line_bytes,
            max_stride_lines,
        }
    }

    /// Observes a miss to the block-aligned `addr` in `set`.
    ///
    /// Computes the streaming flag from the history *before* recording
    /// `addr`, then shifts `addr` into the history. Returns the flag.
    pub fn observe_miss(&mut self, set: usize, addr: u64) -> bool {
        let history = &mut self.sets[set];
        let [last, prev] = history.recent;

        let delta_new = if last == 0 {
            0
        } else {
            addr.wrapping_sub(last) as i64
        };
        let delta_old = if last == 0 || prev == 0 {
            0
        } else {
            last.wrapping_sub(prev) as i64
        };

        let stride = delta_new.unsigned_abs();
        let small = stride != 0
            && stride % self.line_bytes == 0
            && stride / self.line_bytes <= self.max_stride_lines;

        history.direction = if delta_new == delta_old && small {
            if delta_new > 0 {
                Direction::Ascending
            } else {
                Direction::Descending
            }
        } else {
            Direction::None
        };

        history.recent = [addr, last];
        history.direction != Direction::None
    }

    /// Streaming flag computed on the last miss to `set`.
    pub fn is_streaming(&self, set: usize) -> bool {
        self.sets[set].direction != Direction::None
    }

    /// Direction detected on the last miss to `set`.
    pub fn direction(&self, set: usize) -> Direction {
        self.sets[set].direction
    }

    /// Number of sets whose last miss was part of a stream.
    pub fn streaming_sets(&self) -> usize {
        self.sets
            .iter()
            .filter(|h| h.direction != Direction::None)
            .count()
    }
}
