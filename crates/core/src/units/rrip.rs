//! Re-Reference Interval Prediction (RRIP) recency state.
//!
//! Each line carries a 2-bit re-reference prediction value (RRPV): 0 means the
//! line is expected back soon, `MAX_RRPV` means it is first in line for
//! eviction. Victim selection looks for a line at `MAX_RRPV` and, when none
//! exists, ages the whole set and looks again.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `promote()`: O(1)
//!   - `find_victim()`: O(W × (MAX_RRPV + 1)) worst case, W = ways
//! - **Space Complexity:** O(S × W)
//! - **Hardware Cost:** Low - 2 bits per line plus a per-set priority scan
//! - **Best Case:** Mixed workloads where scans would otherwise flush the working set
//! - **Worst Case:** Pure recency-friendly loops that LRU already handles

use crate::common::constants::MAX_RRPV;

/// Replacement bookkeeping for one cache line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineState {
    /// Re-reference prediction value, always in `0..=MAX_RRPV`.
    pub rrpv: u8,
    /// Signature-table index of the PC that filled the line.
    pub signature: u32,
    /// Set on the first hit after the line was filled.
    pub reused: bool,
    /// False until the way is filled for the first time.
    pub valid: bool,
    /// Block number (address without line offset) of the resident line.
    pub block: u64,
}

impl Default for LineState {
    fn default() -> Self {
        Self {
            rrpv: MAX_RRPV,
            signature: 0,
            reused: false,
            valid: false,
            block: 0,
        }
    }
}

/// RRPV array for every set and way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecencyState {
    /// Lines stored set-major: `lines[set * ways + way]`.
    lines: Vec<LineState>,
    /// Number of ways in each set.
    ways: usize,
}

impl RecencyState {
    /// Creates the state for `sets × ways` lines, all empty at `MAX_RRPV`.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            lines: vec![LineState::default(); sets * ways],
            ways,
        }
    }

    /// Associativity.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Lines of `set` in way order.
    #[inline]
    pub fn set(&self, set: usize) -> &[LineState] {
        let base = set * self.ways;
        &self.lines[base..base + self.ways]
    }

    #[inline]
    fn set_mut(&mut self, set: usize) -> &mut [LineState] {
        let base = set * self.ways;
        &mut self.lines[base..base + self.ways]
    }

    /// State of one line.
    #[inline]
    pub fn line(&self, set: usize, way: usize) -> &LineState {
        &self.lines[set * self.ways + way]
    }

    /// Mutable state of one line.
    #[inline]
    pub fn line_mut(&mut self, set: usize, way: usize) -> &mut LineState {
        &mut self.lines[set * self.ways + way]
    }

    /// Marks a hit: the line moves to RRPV 0.
    #[inline]
    pub fn promote(&mut self, set: usize, way: usize) {
        self.line_mut(set, way).rrpv = 0;
    }

    /// First way of `set` that has never been filled.
    pub fn first_invalid(&self, set: usize) -> Option<usize> {
        self.set(set).iter().position(|l| !l.valid)
    }

    /// First way of `set` at `MAX_RRPV`, in way order.
    pub fn first_distant(&self, set: usize) -> Option<usize> {
        self.set(set).iter().position(|l| l.rrpv == MAX_RRPV)
    }

    /// Raises every line of `set` below `MAX_RRPV` by one.
    pub fn age(&mut self, set: usize) {
        for line in self.set_mut(set) {
            if line.rrpv < MAX_RRPV {
                line.rrpv += 1;
            }
        }
    }

    /// Selects the RRIP victim of `set`, aging the set as needed.
    ///
    /// Every aging round raises the set's minimum RRPV by one, so by round
    /// `MAX_RRPV` some line must sit at `MAX_RRPV`; the loop is bounded by
    /// `MAX_RRPV + 1` rounds. The returned way is always at `MAX_RRPV`.
    pub fn find_victim(&mut self, set: usize) -> usize {
        for _ in 0..=MAX_RRPV {
            if let Some(way) = self.first_distant(set) {
                return way;
            }
            self.age(set);
        }
        debug_assert!(
            self.first_distant(set).is_some(),
            "set {set} has no line at MAX_RRPV after {} aging rounds",
            MAX_RRPV + 1
        );
        self.first_distant(set).unwrap_or(0)
    }

    /// Writes the fill state of a newly inserted line.
    pub fn fill(&mut self, set: usize, way: usize, rrpv: u8, signature: u32, block: u64) {
        debug_assert!(rrpv <= MAX_RRPV);
        *self.line_mut(set, way) = LineState {
            rrpv: rrpv.min(MAX_RRPV),
            signature,
            reused: false,
            valid: true,
            block,
        };
    }
}
