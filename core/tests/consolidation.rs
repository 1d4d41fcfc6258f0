//! Consolidation tests — the tier ladder and its invariants.

use life_clicker_core::state::{
    EconomyState, LAKES_PER_SEA, LIFE_PER_LAKE, OCEAN_CAP, SEAS_PER_OCEAN,
};

fn ledger(life: u64, lakes: u64, seas: u64, oceans: u64) -> EconomyState {
    EconomyState { life, lakes, seas, oceans, ..EconomyState::default() }
}

/// A spread of ledgers, including ones far outside the normalized ranges.
fn samples() -> Vec<EconomyState> {
    let mut out = Vec::new();
    for life in [0, 1, 199, 200, 201, 2_999, 3_000, 45_000, 1_000_000] {
        for lakes in [0, 14, 15, 16, 224, 225, 300] {
            for seas in [0, 14, 15, 29, 30, 105, 500] {
                for oceans in [0, 3, 6, 7, 9] {
                    out.push(ledger(life, lakes, seas, oceans));
                }
            }
        }
    }
    out
}

#[test]
fn consolidated_ledgers_are_normalized() {
    for start in samples() {
        let mut state = start.clone();
        state.consolidate();

        assert!(state.life < LIFE_PER_LAKE, "life not normalized for {start:?}");
        assert!(state.lakes < LAKES_PER_SEA, "lakes not normalized for {start:?}");
        assert!(state.oceans <= OCEAN_CAP, "oceans over cap for {start:?}");
        if state.oceans < OCEAN_CAP {
            assert!(state.seas < SEAS_PER_OCEAN, "seas not normalized for {start:?}");
        }
        assert!(state.is_consolidated());
    }
}

#[test]
fn consolidation_is_idempotent() {
    for start in samples() {
        let mut once = start.clone();
        once.consolidate();
        let mut twice = once.clone();
        let second = twice.consolidate();

        assert_eq!(once, twice, "second pass changed {start:?}");
        assert!(second.is_empty());
    }
}

/// Value is conserved whenever no ocean count was clamped away.
#[test]
fn consolidation_conserves_life_equivalent() {
    for start in samples().into_iter().filter(|s| s.oceans <= OCEAN_CAP) {
        let before = start.life_equivalent();
        let mut state = start.clone();
        state.consolidate();
        assert_eq!(state.life_equivalent(), before, "value changed for {start:?}");
    }
}

#[test]
fn exact_lake_threshold_promotes() {
    let mut state = ledger(200, 0, 0, 0);
    state.consolidate();
    assert_eq!((state.life, state.lakes), (0, 1));
}

#[test]
fn capped_oceans_bank_surplus_seas() {
    let mut state = ledger(0, 0, 20, 7);
    let promotion = state.consolidate();

    assert_eq!(state.oceans, 7);
    assert_eq!(state.seas, 20);
    assert!(promotion.is_empty());
}

#[test]
fn seas_keep_growing_past_the_cap() {
    let mut state = ledger(0, 14, 40, 7);
    state.lakes += 1;
    state.consolidate();

    assert_eq!(state.lakes, 0);
    assert_eq!(state.seas, 41);
    assert_eq!(state.oceans, 7);
}

#[test]
fn full_cascade_in_one_pass() {
    // 15 * 15 * 200 life is exactly one ocean.
    let mut state = ledger(LIFE_PER_LAKE * LAKES_PER_SEA * SEAS_PER_OCEAN, 0, 0, 0);
    let promotion = state.consolidate();

    assert_eq!(state, ledger(0, 0, 0, 1));
    assert_eq!(promotion.lakes, 225);
    assert_eq!(promotion.seas, 15);
    assert_eq!(promotion.oceans, 1);
}
