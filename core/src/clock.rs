//! Game clock — turns elapsed wall time into tick and autosave firings.
//!
//! The host feeds real elapsed milliseconds into `advance()`. The clock
//! never reads the system time itself, so a session replays identically
//! from the same sequence of `advance()` calls.

use crate::types::Millis;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TICK_INTERVAL_MS: Millis = 1_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameClock {
    pub tick_interval:     Millis,
    pub autosave_interval: Millis,
    /// Total ticks fired since the clock was created.
    pub ticks_fired:       u64,
    since_tick:            Millis,
    since_autosave:        Millis,
}

/// What fired during one `advance()` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Firings {
    pub ticks:    u64,
    pub autosave: bool,
}

impl GameClock {
    pub fn new(tick_interval: Millis, autosave_interval: Millis) -> Self {
        Self {
            tick_interval:     tick_interval.max(1),
            autosave_interval: autosave_interval.max(1),
            ticks_fired:       0,
            since_tick:        0,
            since_autosave:    0,
        }
    }

    pub fn advance(&mut self, elapsed: Millis) -> Firings {
        self.since_tick = self.since_tick.saturating_add(elapsed);
        let ticks = self.since_tick / self.tick_interval;
        self.since_tick %= self.tick_interval;
        self.ticks_fired = self.ticks_fired.saturating_add(ticks);

        // Several missed autosaves collapse into one save.
        self.since_autosave = self.since_autosave.saturating_add(elapsed);
        let autosave = self.since_autosave >= self.autosave_interval;
        if autosave {
            self.since_autosave %= self.autosave_interval;
        }

        Firings { ticks, autosave }
    }

    /// Cancel the pending autosave and schedule a fresh one `interval` from now.
    pub fn reschedule_autosave(&mut self, interval: Millis) {
        self.autosave_interval = interval.max(1);
        self.since_autosave = 0;
    }

    /// Milliseconds until the next autosave fires.
    pub fn until_autosave(&self) -> Millis {
        self.autosave_interval - self.since_autosave
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_seconds_carry_over() {
        let mut clock = GameClock::new(1_000, 45_000);
        assert_eq!(clock.advance(600).ticks, 0);
        assert_eq!(clock.advance(600).ticks, 1);
        assert_eq!(clock.advance(800).ticks, 1);
        assert_eq!(clock.ticks_fired, 2);
    }

    #[test]
    fn reschedule_discards_pending_autosave_progress() {
        let mut clock = GameClock::new(1_000, 10_000);
        clock.advance(9_000);
        clock.reschedule_autosave(10_000);
        assert!(!clock.advance(2_000).autosave);
        assert_eq!(clock.until_autosave(), 8_000);
    }
}
