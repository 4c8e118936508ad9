//! Insertion-priority decision.
//!
//! On a fill the engine gathers one snapshot of every signal ([`Signals`]) and
//! hands it to [`InsertionPolicy::decide`]. The configured override hints are
//! consulted first, in precedence order; the first one that fires inserts at
//! `MAX_RRPV`. If none fires, the set's dueling policy decides:
//!
//! - **Signature** maps the incoming PC's reuse counter through the
//!   configured [`SignatureBands`].
//! - **Bimodal** inserts at `MAX_RRPV`, except one fill in every
//!   `bimodal_throttle` which goes to `MAX_RRPV - 1`.

use crate::common::constants::{MAX_RRPV, SHIP_REUSE_THRESHOLD, SRRIP_INSERT_RRPV};
use crate::config::{Config, InsertionHint, SignatureBands};
use crate::units::DuelPolicy;

/// Why a fill received its insertion RRPV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertionReason {
    /// The dead-block table predicted the incoming block dead.
    DeadBlock,
    /// The set is streaming.
    Streaming,
    /// Signature counter band (policy A).
    Signature,
    /// Bimodal RRIP (policy B).
    Bimodal,
}

/// Outcome of one insertion decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionDecision {
    /// RRPV written to the new line.
    pub rrpv: u8,
    /// Signal that chose it.
    pub reason: InsertionReason,
}

impl InsertionDecision {
    /// True when the line goes in at the most-evictable priority.
    pub const fn is_bypass(self) -> bool {
        self.rrpv == MAX_RRPV
    }
}

/// Signals sampled for one fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signals {
    /// Dead-block prediction for the incoming block.
    pub dead: bool,
    /// Streaming flag computed on this miss.
    pub streaming: bool,
    /// Dueling policy assigned to the set.
    pub policy: DuelPolicy,
    /// Reuse counter of the incoming PC's signature.
    pub counter: u8,
}

impl SignatureBands {
    /// Insertion RRPV for a signature counter in `0..=3`.
    pub const fn rrpv(self, counter: u8) -> u8 {
        match self {
            Self::Two => {
                if counter >= SHIP_REUSE_THRESHOLD {
                    0
                } else {
                    MAX_RRPV
                }
            }
            Self::Three => match counter {
                0 => MAX_RRPV,
                1 | 2 => SRRIP_INSERT_RRPV,
                _ => 0,
            },
            Self::Four => MAX_RRPV.saturating_sub(counter),
        }
    }
}

/// Combines the override hints with the dueling policies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionPolicy {
    precedence: Vec<InsertionHint>,
    bands: SignatureBands,
    bimodal_throttle: u32,
    /// Bimodal fills since the last near-MRU bimodal fill.
    bimodal_fills: u32,
}

impl InsertionPolicy {
    /// Builds the policy from a validated configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            precedence: config.precedence.clone(),
            bands: config.bands,
            bimodal_throttle: config.duel.bimodal_throttle,
            bimodal_fills: 0,
        }
    }

    /// Chooses the insertion RRPV for one fill.
    pub fn decide(&mut self, signals: &Signals) -> InsertionDecision {
        for hint in &self.precedence {
            let fired = match hint {
                InsertionHint::DeadBlock => signals.dead.then_some(InsertionReason::DeadBlock),
                InsertionHint::Streaming => signals.streaming.then_some(InsertionReason::Streaming),
            };
            if let Some(reason) = fired {
                return InsertionDecision {
                    rrpv: MAX_RRPV,
                    reason,
                };
            }
        }

        match signals.policy {
            DuelPolicy::Signature => InsertionDecision {
                rrpv: self.bands.rrpv(signals.counter),
                reason: InsertionReason::Signature,
            },
            DuelPolicy::Bimodal => InsertionDecision {
                rrpv: self.next_bimodal(),
                reason: InsertionReason::Bimodal,
            },
        }
    }

    fn next_bimodal(&mut self) -> u8 {
        self.bimodal_fills += 1;
        if self.bimodal_fills >= self.bimodal_throttle {
            self.bimodal_fills = 0;
            SRRIP_INSERT_RRPV
        } else {
            MAX_RRPV
        }
    }

    /// Override hints in the order they are consulted.
    pub fn precedence(&self) -> &[InsertionHint] {
        &self.precedence
    }
}
