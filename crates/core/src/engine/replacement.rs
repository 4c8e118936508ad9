//! Unified RRIP replacement engine.
//!
//! Owns the per-line recency state and every predictor table for one cache
//! instance. Nothing is shared between engines, so any number of them can
//! run side by side.
//!
//! Per access:
//!
//! - **Hit:** promote the line to RRPV 0, mark it reused, credit its
//!   signature, and clear the block's dead-block entry.
//! - **Miss:** train from the outgoing line (signature penalty if it was
//!   never reused, dead-block mark), let the streaming detector see the
//!   incoming block, then pick the insertion RRPV from the override hints
//!   and the set's dueling policy.
//! - **Both:** sample sets train the dueling selector; the optional decay
//!   pass runs every `decay_interval` accesses.

use tracing::{debug, trace};

use super::ReplacementPolicy;
use super::insertion::{InsertionDecision, InsertionPolicy, Signals};
use crate::common::constants::MAX_RRPV;
use crate::common::{Access, ConfigError};
use crate::config::Config;
use crate::stats::{EngineStats, EngineSummary};
use crate::units::hash;
use crate::units::{
    DeadBlockTable, DuelPolicy, LineState, RecencyState, SetDueling, SetLabel, SignatureTable,
    StreamDetector,
};

/// Replacement engine for one set-associative cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementEngine {
    config: Config,
    num_sets: usize,
    line_shift: u32,
    recency: RecencyState,
    signatures: SignatureTable,
    dead_blocks: DeadBlockTable,
    streams: StreamDetector,
    duel: SetDueling,
    insertion: InsertionPolicy,
    stats: EngineStats,
    /// Accesses since construction; drives the decay pass.
    accesses: u64,
    last_decision: Option<InsertionDecision>,
}

impl ReplacementEngine {
    /// Creates an engine for `num_sets × num_ways` lines.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the geometry is empty or `config` fails
    /// [`Config::validate`]. No engine is produced in that case.
    pub fn new(num_sets: usize, num_ways: usize, config: Config) -> Result<Self, ConfigError> {
        config.validate(num_sets, num_ways)?;

        debug!(
            sets = num_sets,
            ways = num_ways,
            line_bytes = config.line_bytes,
            ship_entries = config.ship_table_size,
            dead_block_entries = config.dead_block_table_size,
            bands = ?config.bands,
            precedence = ?config.precedence,
            dueling = config.duel.enabled,
            "replacement engine initialised"
        );

        Ok(Self {
            num_sets,
            line_shift: config.line_shift(),
            recency: RecencyState::new(num_sets, num_ways),
            signatures: SignatureTable::new(config.ship_table_size),
            dead_blocks: DeadBlockTable::new(config.dead_block_table_size),
            streams: StreamDetector::new(
                num_sets,
                config.line_bytes,
                config.stream_max_stride_lines,
            ),
            duel: SetDueling::new(num_sets, &config.duel),
            insertion: InsertionPolicy::new(&config),
            stats: EngineStats::default(),
            accesses: 0,
            last_decision: None,
            config,
        })
    }

    /// Configuration the engine was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Number of sets.
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Associativity.
    pub const fn num_ways(&self) -> usize {
        self.recency.ways()
    }

    /// Replacement state of one line.
    pub fn line(&self, set: usize, way: usize) -> &LineState {
        self.recency.line(set, way)
    }

    /// Replacement state of every way in `set`.
    pub fn lines(&self, set: usize) -> &[LineState] {
        self.recency.set(set)
    }

    /// Dueling label of `set`.
    pub fn label(&self, set: usize) -> SetLabel {
        self.duel.label(set)
    }

    /// Dueling policy `set` would use for its next fill.
    pub fn policy_for(&self, set: usize) -> DuelPolicy {
        self.duel.policy_for(set)
    }

    /// Raw dueling selector value.
    pub const fn selector(&self) -> u16 {
        self.duel.selector()
    }

    /// Policy currently used by follower sets.
    pub const fn winner(&self) -> DuelPolicy {
        self.duel.winner()
    }

    /// Streaming flag computed on the last miss to `set`.
    pub fn is_streaming(&self, set: usize) -> bool {
        self.streams.is_streaming(set)
    }

    /// Signature-table index of `pc`.
    pub const fn signature_of(&self, pc: u64) -> u32 {
        self.signatures.signature(pc)
    }

    /// Reuse counter of the signature `pc` hashes to.
    pub fn signature_counter(&self, pc: u64) -> u8 {
        self.signatures.counter(self.signatures.signature(pc))
    }

    /// Dead-block prediction for the block containing `address`.
    pub fn predicts_dead(&self, address: u64) -> bool {
        self.dead_blocks
            .is_dead(hash::block_number(address, self.line_shift))
    }

    /// Decision taken on the most recent fill, if any.
    pub const fn last_decision(&self) -> Option<InsertionDecision> {
        self.last_decision
    }

    /// End-of-run snapshot of the predictor tables and counters.
    pub fn summary(&self) -> EngineSummary {
        EngineSummary {
            stats: self.stats,
            reuse_signatures: self.signatures.reuse_predicted(),
            signature_entries: self.signatures.len(),
            streaming_sets: self.streams.streaming_sets(),
            sets: self.num_sets,
            dead_entries: self.dead_blocks.dead_entries(),
            dead_block_entries: self.dead_blocks.len(),
            selector: self.duel.selector(),
            selector_max: self.duel.selector_max(),
            winner: self.duel.winner(),
        }
    }

    fn on_hit(&mut self, set: usize, way: usize, block: u64) {
        self.stats.hits += 1;
        self.recency.promote(set, way);
        let line = self.recency.line_mut(set, way);
        line.reused = true;
        let signature = line.signature;
        self.signatures.record_hit(signature);
        self.dead_blocks.mark_alive(block);
    }

    fn on_fill(&mut self, set: usize, way: usize, access: &Access, block: u64) {
        self.stats.misses += 1;

        let outgoing = *self.recency.line(set, way);
        if outgoing.valid {
            self.stats.evictions += 1;
            if !outgoing.reused {
                self.signatures.record_dead_eviction(outgoing.signature);
            }
            self.dead_blocks.mark_dead(outgoing.block);
        }

        let streaming = self
            .streams
            .observe_miss(set, block << self.line_shift);
        let signature = self.signatures.signature(access.pc);
        let signals = Signals {
            dead: self.dead_blocks.is_dead(block),
            streaming,
            policy: self.duel.policy_for(set),
            counter: self.signatures.counter(signature),
        };
        let decision = self.insertion.decide(&signals);
        if decision.is_bypass() {
            self.stats.bypasses += 1;
        }

        trace!(
            set,
            way,
            block,
            rrpv = decision.rrpv,
            reason = ?decision.reason,
            kind = ?access.kind,
            "fill"
        );

        self.recency
            .fill(set, way, decision.rrpv, signature, block);
        self.last_decision = Some(decision);
    }

    fn tick_decay(&mut self) {
        let interval = self.config.decay_interval;
        if interval != 0 && self.accesses % interval == 0 {
            self.signatures.decay();
            self.dead_blocks.reset();
            debug!(accesses = self.accesses, "predictor tables decayed");
        }
    }
}

impl ReplacementPolicy for ReplacementEngine {
    /// Picks the first never-filled way, otherwise runs the RRIP scan.
    ///
    /// The returned way always has RRPV `MAX_RRPV`: empty ways are never
    /// promoted, and the scan only returns lines at `MAX_RRPV`.
    fn select_victim(&mut self, set: usize, access: &Access) -> usize {
        debug_assert!(set < self.num_sets, "set {set} out of range");
        let way = self
            .recency
            .first_invalid(set)
            .unwrap_or_else(|| self.recency.find_victim(set));
        debug_assert_eq!(self.recency.line(set, way).rrpv, MAX_RRPV);
        trace!(set, way, pc = access.pc, "victim selected");
        way
    }

    fn on_access(&mut self, set: usize, way: usize, access: &Access, hit: bool) {
        debug_assert!(set < self.num_sets, "set {set} out of range");
        debug_assert!(way < self.num_ways(), "way {way} out of range");
        self.accesses += 1;

        let block = hash::block_number(access.address, self.line_shift);
        if hit {
            self.on_hit(set, way, block);
        } else {
            self.on_fill(set, way, access, block);
        }

        if let Some(winner) = self.duel.record(set, hit) {
            debug!(
                ?winner,
                selector = self.duel.selector(),
                "set-dueling winner changed"
            );
        }

        self.tick_decay();
    }

    fn stats(&self) -> EngineStats {
        self.stats
    }
}
