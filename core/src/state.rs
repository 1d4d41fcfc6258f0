//! The economy ledger and its tier ladder.
//!
//! RULE: `life`, `lakes`, `seas` and `oceans` only ever move between tiers
//! through `consolidate()`. Everything else adds to or debits a single tier
//! and then calls it.
//!
//! Ladder: 200 life -> 1 lake, 15 lakes -> 1 sea, 15 seas -> 1 ocean.
//! Oceans stop at OCEAN_CAP; surplus seas stay banked.

use crate::types::{Amount, Millis};
use serde::{Deserialize, Serialize};

pub const LIFE_PER_LAKE: Amount = 200;
pub const LAKES_PER_SEA: Amount = 15;
pub const SEAS_PER_OCEAN: Amount = 15;
pub const OCEAN_CAP: Amount = 7;

pub const DEFAULT_AUTOSAVE_INTERVAL_MS: Millis = 45_000;

/// Field names match the persisted record, so older saves load as-is.
/// Missing fields fall back to `Default`; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EconomyState {
    pub life:              Amount,
    pub per_click:         Amount,
    pub per_second:        Amount,
    pub sound:             bool,
    pub autosave_interval: Millis,
    pub lakes:             Amount,
    pub seas:              Amount,
    pub oceans:            Amount,
}

impl Default for EconomyState {
    fn default() -> Self {
        Self {
            life:              0,
            per_click:         1,
            per_second:        0,
            sound:             false,
            autosave_interval: DEFAULT_AUTOSAVE_INTERVAL_MS,
            lakes:             0,
            seas:              0,
            oceans:            0,
        }
    }
}

/// Units gained at each tier by a single consolidation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Promotion {
    pub lakes:  Amount,
    pub seas:   Amount,
    pub oceans: Amount,
}

impl Promotion {
    pub fn is_empty(&self) -> bool {
        self.lakes == 0 && self.seas == 0 && self.oceans == 0
    }
}

impl EconomyState {
    /// Promote surplus up the ladder, once per tier, top-down.
    ///
    /// Seas produced in this pass are checked against the ocean tier in
    /// the same pass, but no tier is revisited.
    pub fn consolidate(&mut self) -> Promotion {
        let mut promotion = Promotion::default();

        let lakes_gained = self.life / LIFE_PER_LAKE;
        if lakes_gained > 0 {
            self.life -= lakes_gained * LIFE_PER_LAKE;
            self.lakes = self.lakes.saturating_add(lakes_gained);
            promotion.lakes = lakes_gained;
        }

        let seas_gained = self.lakes / LAKES_PER_SEA;
        if seas_gained > 0 {
            self.lakes -= seas_gained * LAKES_PER_SEA;
            self.seas = self.seas.saturating_add(seas_gained);
            promotion.seas = seas_gained;
        }

        if self.oceans < OCEAN_CAP {
            let oceans_gained = (self.seas / SEAS_PER_OCEAN).min(OCEAN_CAP - self.oceans);
            if oceans_gained > 0 {
                self.seas -= oceans_gained * SEAS_PER_OCEAN;
                self.oceans += oceans_gained;
                promotion.oceans = oceans_gained;
            }
        }

        self.oceans = self.oceans.min(OCEAN_CAP);
        promotion
    }

    /// Everything banked, expressed in life units. Saturates at u64::MAX.
    pub fn life_equivalent(&self) -> Amount {
        let per_sea = LIFE_PER_LAKE * LAKES_PER_SEA;
        let per_ocean = per_sea * SEAS_PER_OCEAN;
        self.life
            .saturating_add(self.lakes.saturating_mul(LIFE_PER_LAKE))
            .saturating_add(self.seas.saturating_mul(per_sea))
            .saturating_add(self.oceans.saturating_mul(per_ocean))
    }

    /// True when no tier holds a promotable surplus.
    pub fn is_consolidated(&self) -> bool {
        self.life < LIFE_PER_LAKE
            && self.lakes < LAKES_PER_SEA
            && (self.seas < SEAS_PER_OCEAN || self.oceans >= OCEAN_CAP)
            && self.oceans <= OCEAN_CAP
    }
}
