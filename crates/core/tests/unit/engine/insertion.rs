//! Insertion Decision Tests.
//!
//! Each signal is exercised on its own by choosing which hints the
//! precedence list names; the band mappings are checked exhaustively.

use pretty_assertions::assert_eq;
use rripsim_core::common::constants::MAX_RRPV;
use rripsim_core::config::{Config, DuelConfig, InsertionHint, SignatureBands};
use rripsim_core::engine::{InsertionPolicy, InsertionReason, Signals};
use rripsim_core::units::DuelPolicy;
use rstest::rstest;

fn signals(dead: bool, streaming: bool, policy: DuelPolicy, counter: u8) -> Signals {
    Signals {
        dead,
        streaming,
        policy,
        counter,
    }
}

fn policy_with(precedence: Vec<InsertionHint>) -> InsertionPolicy {
    InsertionPolicy::new(&Config {
        precedence,
        ..Config::default()
    })
}

#[rstest]
#[case::two(SignatureBands::Two, [3, 3, 0, 0])]
#[case::three(SignatureBands::Three, [3, 2, 2, 0])]
#[case::four(SignatureBands::Four, [3, 2, 1, 0])]
fn band_mapping(#[case] bands: SignatureBands, #[case] expected: [u8; 4]) {
    let got: Vec<u8> = (0..=3).map(|c| bands.rrpv(c)).collect();
    assert_eq!(got, expected.to_vec());
}

#[rstest]
fn bands_are_monotonic(
    #[values(SignatureBands::Two, SignatureBands::Three, SignatureBands::Four)]
    bands: SignatureBands,
) {
    for c in 0..3u8 {
        assert!(bands.rrpv(c + 1) <= bands.rrpv(c));
    }
    assert_eq!(bands.rrpv(0), MAX_RRPV);
    assert_eq!(bands.rrpv(3), 0);
}

#[test]
fn dead_block_outranks_streaming_by_default() {
    let mut policy = policy_with(vec![InsertionHint::DeadBlock, InsertionHint::Streaming]);
    let d = policy.decide(&signals(true, true, DuelPolicy::Signature, 3));
    assert_eq!(d.rrpv, MAX_RRPV);
    assert_eq!(d.reason, InsertionReason::DeadBlock);
    assert!(d.is_bypass());
}

#[test]
fn precedence_order_is_respected() {
    let mut policy = policy_with(vec![InsertionHint::Streaming, InsertionHint::DeadBlock]);
    let d = policy.decide(&signals(true, true, DuelPolicy::Signature, 3));
    assert_eq!(d.reason, InsertionReason::Streaming);
    assert_eq!(policy.precedence(), &[InsertionHint::Streaming, InsertionHint::DeadBlock]);
}

#[test]
fn unlisted_hints_are_ignored() {
    let mut none = policy_with(vec![]);
    let d = none.decide(&signals(true, true, DuelPolicy::Signature, 3));
    assert_eq!(d.rrpv, 0);
    assert_eq!(d.reason, InsertionReason::Signature);

    let mut streaming_only = policy_with(vec![InsertionHint::Streaming]);
    let d = streaming_only.decide(&signals(true, false, DuelPolicy::Signature, 2));
    assert_eq!(d.rrpv, MAX_RRPV - 1);
    assert_eq!(d.reason, InsertionReason::Signature);
}

#[test]
fn streaming_fires_when_not_dead() {
    let mut policy = policy_with(vec![InsertionHint::DeadBlock, InsertionHint::Streaming]);
    let d = policy.decide(&signals(false, true, DuelPolicy::Signature, 3));
    assert_eq!(d.rrpv, MAX_RRPV);
    assert_eq!(d.reason, InsertionReason::Streaming);
}

#[test]
fn bimodal_inserts_near_mru_once_per_period() {
    let mut policy = InsertionPolicy::new(&Config {
        duel: DuelConfig {
            bimodal_throttle: 4,
            ..DuelConfig::default()
        },
        ..Config::default()
    });
    let rrpvs: Vec<u8> = (0..8)
        .map(|_| {
            let d = policy.decide(&signals(false, false, DuelPolicy::Bimodal, 3));
            assert_eq!(d.reason, InsertionReason::Bimodal);
            d.rrpv
        })
        .collect();
    assert_eq!(rrpvs, vec![3, 3, 3, 2, 3, 3, 3, 2]);
}

#[test]
fn bimodal_ignores_signature_counter() {
    let mut policy = policy_with(vec![]);
    let d = policy.decide(&signals(false, false, DuelPolicy::Bimodal, 3));
    assert_eq!(d.rrpv, MAX_RRPV);
}
