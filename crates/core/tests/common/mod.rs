//! Shared test infrastructure.
//!
//! The engine never sees tags, so tests that replay access sequences need a
//! host: [`HostCache`] owns a tag array, decides hit or miss, and drives the
//! engine in contract order (`select_victim` then `on_access` on a miss,
//! `on_access` alone on a hit).

use rripsim_core::common::constants::MAX_RRPV;
use rripsim_core::{Access, AccessKind, Config, ReplacementEngine, ReplacementPolicy};
use tracing_subscriber::EnvFilter;

/// Line size used throughout the tests.
pub const LINE: u64 = 64;

/// Installs a test-writer subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Byte address of the line with tag `tag` in `set` for a cache of `sets` sets.
pub const fn addr_in_set(set: usize, tag: u64, sets: usize) -> u64 {
    (tag * sets as u64 + set as u64) * LINE
}

/// Result of one host access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the tag was resident.
    pub hit: bool,
    /// Set the address mapped to.
    pub set: usize,
    /// Way that hit, or way chosen as victim and filled.
    pub way: usize,
}

/// Minimal set-associative tag store driving a [`ReplacementEngine`].
#[derive(Debug)]
pub struct HostCache {
    engine: ReplacementEngine,
    tags: Vec<Option<u64>>,
    sets: usize,
    ways: usize,
}

impl HostCache {
    /// Builds a host cache around a fresh engine.
    pub fn new(sets: usize, ways: usize, config: Config) -> Self {
        init_tracing();
        let engine = ReplacementEngine::new(sets, ways, config).expect("valid test config");
        Self {
            engine,
            tags: vec![None; sets * ways],
            sets,
            ways,
        }
    }

    /// Host with the default configuration.
    pub fn with_defaults(sets: usize, ways: usize) -> Self {
        Self::new(sets, ways, Config::default())
    }

    /// Set index of `addr`.
    pub const fn set_of(&self, addr: u64) -> usize {
        ((addr / LINE) % self.sets as u64) as usize
    }

    /// Demand load.
    pub fn load(&mut self, addr: u64, pc: u64) -> Outcome {
        self.access(Access::load(addr, pc))
    }

    /// Performs one access, checking the victim post-condition on a miss.
    pub fn access(&mut self, access: Access) -> Outcome {
        let set = self.set_of(access.address);
        let block = access.address / LINE;
        let base = set * self.ways;

        if let Some(way) = (0..self.ways).find(|&w| self.tags[base + w] == Some(block)) {
            self.engine.on_access(set, way, &access, true);
            assert_eq!(self.engine.line(set, way).rrpv, 0, "hit must promote to 0");
            return Outcome { hit: true, set, way };
        }

        let way = self.engine.select_victim(set, &access);
        assert!(way < self.ways, "victim {way} out of range");
        assert_eq!(
            self.engine.line(set, way).rrpv,
            MAX_RRPV,
            "victim must sit at MAX_RRPV"
        );
        self.tags[base + way] = Some(block);
        self.engine.on_access(set, way, &access, false);
        Outcome {
            hit: false,
            set,
            way,
        }
    }

    /// Access with an explicit kind.
    pub fn access_kind(&mut self, addr: u64, pc: u64, kind: AccessKind) -> Outcome {
        self.access(Access::new(addr, pc, kind))
    }

    /// True when the block containing `addr` is resident.
    pub fn contains(&self, addr: u64) -> bool {
        let set = self.set_of(addr);
        let base = set * self.ways;
        self.tags[base..base + self.ways].contains(&Some(addr / LINE))
    }

    /// The engine under test.
    pub const fn engine(&self) -> &ReplacementEngine {
        &self.engine
    }
}
