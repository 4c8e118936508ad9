//! Set Dueling (DIP-style policy selection).
//!
//! A small sample of sets is hard-wired to each of two insertion policies;
//! every other set follows whichever policy is winning. The score is kept in
//! one global saturating selector:
//!
//! - a hit in a policy-A sample set, or a miss in a policy-B sample set,
//!   moves the selector up (toward A);
//! - a miss in a policy-A sample set, or a hit in a policy-B sample set,
//!   moves it down (toward B).
//!
//! Followers use policy A while the selector is at or above its midpoint.
//! Labels are assigned once from the set index and never change.

use super::counter::SatCounter;
use crate::config::DuelConfig;

/// The two insertion policies under duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuelPolicy {
    /// Policy A: insertion RRPV from the PC signature counter.
    Signature,
    /// Policy B: bimodal RRIP, nearly always distant.
    Bimodal,
}

/// Role of a set in the duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetLabel {
    /// Uses the current winner.
    Follower,
    /// Always uses policy A and trains the selector.
    SampleA,
    /// Always uses policy B and trains the selector.
    SampleB,
}

impl SetLabel {
    /// Fixed labelling rule: residue 0 samples A, residue 1 samples B.
    pub const fn for_set(set: usize, sample_ratio: usize) -> Self {
        match set % sample_ratio {
            0 => Self::SampleA,
            1 => Self::SampleB,
            _ => Self::Follower,
        }
    }
}

/// Global selector and per-set labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetDueling {
    labels: Vec<SetLabel>,
    selector: SatCounter,
}

impl SetDueling {
    /// Labels `sets` sets according to `config`.
    ///
    /// With dueling disabled every set is a follower, so the selector stays
    /// at its midpoint and policy A is used everywhere.
    pub fn new(sets: usize, config: &DuelConfig) -> Self {
        let labels = (0..sets)
            .map(|set| {
                if config.enabled {
                    SetLabel::for_set(set, config.sample_ratio)
                } else {
                    SetLabel::Follower
                }
            })
            .collect();
        let mut selector = SatCounter::with_bits(0, config.selector_bits);
        selector.set(selector.midpoint());
        Self { labels, selector }
    }

    /// Label of `set`.
    #[inline]
    pub fn label(&self, set: usize) -> SetLabel {
        self.labels[set]
    }

    /// Policy currently favoured by the selector.
    #[inline]
    pub const fn winner(&self) -> DuelPolicy {
        if self.selector.get() >= self.selector.midpoint() {
            DuelPolicy::Signature
        } else {
            DuelPolicy::Bimodal
        }
    }

    /// Policy `set` must use for its next fill.
    #[inline]
    pub fn policy_for(&self, set: usize) -> DuelPolicy {
        match self.labels[set] {
            SetLabel::SampleA => DuelPolicy::Signature,
            SetLabel::SampleB => DuelPolicy::Bimodal,
            SetLabel::Follower => self.winner(),
        }
    }

    /// Trains the selector with the outcome of an access to `set`.
    ///
    /// Followers leave the selector untouched. Returns the new winner when
    /// this access flipped it.
    pub fn record(&mut self, set: usize, hit: bool) -> Option<DuelPolicy> {
        let before = self.winner();
        match (self.labels[set], hit) {
            (SetLabel::SampleA, true) | (SetLabel::SampleB, false) => self.selector.increment(),
            (SetLabel::SampleA, false) | (SetLabel::SampleB, true) => self.selector.decrement(),
            (SetLabel::Follower, _) => return None,
        }
        let after = self.winner();
        (after != before).then_some(after)
    }

    /// Raw selector value.
    pub const fn selector(&self) -> u16 {
        self.selector.get()
    }

    /// Largest selector value.
    pub const fn selector_max(&self) -> u16 {
        self.selector.max()
    }

    /// Number of sets carrying `label`.
    pub fn count(&self, label: SetLabel) -> usize {
        self.labels.iter().filter(|&&l| l == label).count()
    }
}
