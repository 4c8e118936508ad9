//! Signature Table (SHiP-lite) Tests.
//!
//! Hits push a signature toward "reused"; evictions of never-hit lines push
//! it toward "not reused". Counters never leave 0..=3.

use rripsim_core::common::constants::{SHIP_COUNTER_INIT, SHIP_COUNTER_MAX};
use rripsim_core::units::SignatureTable;

const PC: u64 = 0x0040_2a10;

#[test]
fn counters_start_weak() {
    let table = SignatureTable::new(64);
    assert_eq!(table.len(), 64);
    let sig = table.signature(PC);
    assert!(sig < 64);
    assert_eq!(table.counter(sig), SHIP_COUNTER_INIT);
    assert!(!table.predicts_reuse(sig));
    assert_eq!(table.reuse_predicted(), 0);
}

#[test]
fn hits_saturate_high() {
    let mut table = SignatureTable::new(1024);
    let sig = table.signature(PC);
    for _ in 0..5 {
        table.record_hit(sig);
    }
    assert_eq!(table.counter(sig), SHIP_COUNTER_MAX);
    assert!(table.predicts_reuse(sig));
    assert_eq!(table.reuse_predicted(), 1);
}

#[test]
fn dead_evictions_saturate_low() {
    let mut table = SignatureTable::new(1024);
    let sig = table.signature(PC);
    for _ in 0..5 {
        table.record_dead_eviction(sig);
    }
    assert_eq!(table.counter(sig), 0);
}

#[test]
fn training_is_per_signature() {
    let mut table = SignatureTable::new(1024);
    let a = table.signature(PC);
    let b = table.signature(PC + 4);
    assert_ne!(a, b);
    table.record_hit(a);
    table.record_hit(a);
    assert_eq!(table.counter(a), 3);
    assert_eq!(table.counter(b), SHIP_COUNTER_INIT);
}

#[test]
fn decay_lowers_every_counter_once() {
    let mut table = SignatureTable::new(16);
    let sig = table.signature(PC);
    table.record_hit(sig);
    table.record_hit(sig);
    table.decay();
    assert_eq!(table.counter(sig), 2);
    let other = (sig + 1) % 16;
    assert_eq!(table.counter(other), 0);
    table.decay();
    assert_eq!(table.counter(other), 0);
}
