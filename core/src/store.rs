//! Persistence layer.
//!
//! RULE: Only store.rs talks to the database.
//! The engine goes through the `SaveStore` trait; it never executes SQL.

use crate::{
    error::GameResult,
    event::{EventLogEntry, GameEvent},
};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

/// A durable key-value slot for save records.
///
/// Any key-value medium works. `append_event` is optional; stores that
/// keep no history leave the default no-op in place.
pub trait SaveStore {
    fn load(&self, key: &str) -> GameResult<Option<String>>;

    fn save(&self, key: &str, state_json: &str) -> GameResult<()>;

    fn clear(&self, key: &str) -> GameResult<()>;

    fn append_event(&self, _session_id: &str, _event: &GameEvent) -> GameResult<()> {
        Ok(())
    }
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the save database at `path`.
    pub fn open(path: &str) -> GameResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only for real files; :memory: ignores it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> GameResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> GameResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_foundation.sql"))?;
        Ok(())
    }

    // ── Event log ──────────────────────────────────────────────

    pub fn events_for_session(&self, session_id: &str) -> GameResult<Vec<EventLogEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, session_id, event_type, payload, created_at
             FROM event_log WHERE session_id = ?1
             ORDER BY id ASC",
        )?;
        let entries = stmt
            .query_map(params![session_id], |row| {
                Ok(EventLogEntry {
                    id:         Some(row.get(0)?),
                    session_id: row.get(1)?,
                    event_type: row.get(2)?,
                    payload:    row.get(3)?,
                    created_at: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    pub fn event_count(&self, session_id: &str, event_type: &str) -> GameResult<i64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM event_log WHERE session_id = ?1 AND event_type = ?2",
            params![session_id, event_type],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// When the slot was last written, as an RFC 3339 timestamp.
    pub fn saved_at(&self, key: &str) -> GameResult<Option<String>> {
        let saved_at = self
            .conn
            .query_row(
                "SELECT saved_at FROM save_slot WHERE slot_key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(saved_at)
    }
}

impl SaveStore for SqliteStore {
    fn load(&self, key: &str) -> GameResult<Option<String>> {
        let json = self
            .conn
            .query_row(
                "SELECT state_json FROM save_slot WHERE slot_key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(json)
    }

    fn save(&self, key: &str, state_json: &str) -> GameResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO save_slot (slot_key, state_json, saved_at)
             VALUES (?1, ?2, ?3)",
            params![key, state_json, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn clear(&self, key: &str) -> GameResult<()> {
        self.conn
            .execute("DELETE FROM save_slot WHERE slot_key = ?1", params![key])?;
        Ok(())
    }

    fn append_event(&self, session_id: &str, event: &GameEvent) -> GameResult<()> {
        self.conn.execute(
            "INSERT INTO event_log (session_id, event_type, payload, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                session_id,
                event.type_name(),
                serde_json::to_string(event)?,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }
}
