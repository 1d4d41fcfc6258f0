//! Game events — the record of everything the engine did.
//!
//! RULE: Every engine operation reports what it changed as events.
//! A presentation layer drains them to drive feedback (floating numbers,
//! save warnings); the store may append them to its event log.

use crate::{
    types::{Amount, Millis, SessionId},
    upgrade::UpgradeKind,
};
use serde::{Deserialize, Serialize};

/// Variants are appended over time, never removed or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    // ── Session ────────────────────────────────────
    SessionStarted {
        session_id: SessionId,
        restored:   bool,
    },

    // ── Accrual ────────────────────────────────────
    Clicked {
        amount: Amount,
    },
    /// One or more seconds of passive generation, credited together.
    Ticked {
        amount: Amount,
        ticks:  u64,
    },
    Consolidated {
        lakes:  Amount,
        seas:   Amount,
        oceans: Amount,
    },

    // ── Shop ───────────────────────────────────────
    UpgradePurchased {
        kind: UpgradeKind,
    },
    PurchaseRejected {
        kind:    UpgradeKind,
        balance: Amount,
        cost:    Amount,
    },

    // ── Settings and lifecycle ─────────────────────
    ProgressReset,
    SoundChanged {
        enabled: bool,
    },
    AutosaveIntervalChanged {
        ms: Millis,
    },

    // ── Persistence ────────────────────────────────
    Autosaved,
    SaveFailed {
        reason: String,
    },
}

impl GameEvent {
    /// Stable name used for the event_type column in event_log.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::SessionStarted { .. }          => "session_started",
            Self::Clicked { .. }                 => "clicked",
            Self::Ticked { .. }                  => "ticked",
            Self::Consolidated { .. }            => "consolidated",
            Self::UpgradePurchased { .. }        => "upgrade_purchased",
            Self::PurchaseRejected { .. }        => "purchase_rejected",
            Self::ProgressReset                  => "progress_reset",
            Self::SoundChanged { .. }            => "sound_changed",
            Self::AutosaveIntervalChanged { .. } => "autosave_interval_changed",
            Self::Autosaved                      => "autosaved",
            Self::SaveFailed { .. }              => "save_failed",
        }
    }
}

/// The event log entry as persisted to SQLite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub id:         Option<i64>,
    pub session_id: SessionId,
    pub event_type: String,
    pub payload:    String, // JSON-serialized GameEvent
    pub created_at: String,
}
