use crate::{
    types::{Amount, Millis},
    upgrade::UpgradeKind,
};
use serde::{Deserialize, Serialize};

/// All player-issued commands.
/// Variants are appended over time, never removed or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlayerCommand {
    // ── Accrual ───────────────────────────────────
    Click,
    Tick,
    Advance { elapsed_ms: Millis },

    // ── Shop ──────────────────────────────────────
    Purchase { kind: UpgradeKind },

    // ── Settings and lifecycle ────────────────────
    Reset,
    SetSound { enabled: bool },
    SetAutosaveInterval { ms: Millis },
    Save,
}

/// What a command produced, for hosts that echo results back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum CommandOutcome {
    Credited(Amount),
    Purchased(bool),
    Done,
}
