use crate::{
    clock::DEFAULT_TICK_INTERVAL_MS,
    snapshot::DEFAULT_SAVE_KEY,
    types::Millis,
};
use serde::{Deserialize, Serialize};

/// Host-level settings. The economy's own constants live in `state` and
/// `upgrade`; nothing here changes how resources convert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Storage key the save record is written under.
    pub save_key: String,
    /// Wall time per accrual tick.
    pub tick_interval_ms: Millis,
    /// Prefix for generated session ids in the event log.
    pub session_prefix: String,
    /// Append every emitted event to the store's event log.
    pub log_events: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_key:         DEFAULT_SAVE_KEY.to_string(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            session_prefix:   "session".to_string(),
            log_events:       true,
        }
    }
}

impl GameConfig {
    /// Load from a JSON file. Fields missing from the file keep their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: GameConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        if config.tick_interval_ms == 0 {
            anyhow::bail!("{path}: tick_interval_ms must be positive");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"save_key":"slot-2"}"#).unwrap();
        assert_eq!(config.save_key, "slot-2");
        assert_eq!(config.tick_interval_ms, 1_000);
        assert!(config.log_events);
    }
}
