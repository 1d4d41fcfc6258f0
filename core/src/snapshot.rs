//! Save records — the economy state to/from its persisted JSON form.
//!
//! The record is a flat JSON object holding exactly the ledger fields.
//! Decoding merges over defaults, so records written before a field
//! existed (or after one was dropped) still load.

use crate::{error::GameResult, state::EconomyState};

/// Storage key the record lives under unless the config says otherwise.
pub const DEFAULT_SAVE_KEY: &str = "life-clicker-v1";

pub fn encode(state: &EconomyState) -> GameResult<String> {
    Ok(serde_json::to_string(state)?)
}

/// Parse a stored record. Fields absent from `json` keep their defaults.
pub fn decode(json: &str) -> GameResult<EconomyState> {
    Ok(serde_json::from_str(json)?)
}

/// Decode `raw`, falling back to defaults when it is absent or unreadable.
/// The result is always sanitized and consolidated.
pub fn restore(raw: Option<&str>) -> (EconomyState, bool) {
    let (state, restored) = match raw.map(decode) {
        Some(Ok(state)) => (state, true),
        Some(Err(e)) => {
            log::warn!("Discarding unreadable save record: {e}");
            (EconomyState::default(), false)
        }
        None => (EconomyState::default(), false),
    };
    (sanitize(state), restored)
}

/// Put zero rates that must be positive back to their defaults, then
/// consolidate.
pub fn sanitize(mut state: EconomyState) -> EconomyState {
    let defaults = EconomyState::default();
    if state.per_click == 0 {
        state.per_click = defaults.per_click;
    }
    if state.autosave_interval == 0 {
        state.autosave_interval = defaults.autosave_interval;
    }
    state.consolidate();
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_uses_camel_case_field_names() {
        let json = encode(&EconomyState::default()).unwrap();
        assert!(json.contains("\"perClick\":1"));
        assert!(json.contains("\"autosaveInterval\":45000"));
    }

    #[test]
    fn partial_record_merges_over_defaults() {
        let state = decode(r#"{"life":12,"lakes":3}"#).unwrap();
        assert_eq!(state.life, 12);
        assert_eq!(state.lakes, 3);
        assert_eq!(state.per_click, 1);
        assert_eq!(state.autosave_interval, 45_000);
    }

    #[test]
    fn zero_rates_are_restored_to_defaults() {
        let (state, restored) = restore(Some(r#"{"perClick":0,"autosaveInterval":0,"life":250}"#));
        assert!(restored);
        assert_eq!(state.per_click, 1);
        assert_eq!(state.autosave_interval, 45_000);
        assert_eq!((state.life, state.lakes), (50, 1));
    }
}
