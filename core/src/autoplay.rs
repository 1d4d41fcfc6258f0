//! Scripted player for headless sessions.
//!
//! Each simulated second the player clicks a few times, maybe buys the
//! best upgrade it can afford, then lets one second of wall time pass.
//! All choices come from a seeded `PlayerRng`, so a seed fully
//! determines the resulting ledger. The player is the engine's only host
//! during a run, so it drains the engine's events every second.

use crate::{
    engine::EconomyEngine,
    rng::PlayerRng,
    store::SaveStore,
    types::Amount,
    upgrade::UpgradeKind,
};
use serde::Serialize;

/// Lake-priced upgrades first; they are worth more per unit spent.
pub const PREFERENCE: [UpgradeKind; 4] = [
    UpgradeKind::Click2,
    UpgradeKind::AutoDrip2,
    UpgradeKind::Click1,
    UpgradeKind::AutoDrip1,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoplaySettings {
    pub min_clicks_per_second: u64,
    pub max_clicks_per_second: u64,
    /// Probability of attempting one purchase each second.
    pub buy_chance:            f64,
}

impl Default for AutoplaySettings {
    fn default() -> Self {
        Self {
            min_clicks_per_second: 3,
            max_clicks_per_second: 8,
            buy_chance:            0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AutoplayReport {
    pub seconds:   u64,
    pub clicks:    u64,
    pub purchases: u64,
    pub credited:  Amount,
}

pub struct Autoplayer {
    rng:      PlayerRng,
    settings: AutoplaySettings,
}

impl Autoplayer {
    pub fn new(seed: u64, settings: AutoplaySettings) -> Self {
        Self { rng: PlayerRng::new(seed), settings }
    }

    pub fn play_second<S: SaveStore>(
        &mut self,
        engine: &mut EconomyEngine<S>,
        report: &mut AutoplayReport,
    ) {
        let clicks = self.rng.range_inclusive(
            self.settings.min_clicks_per_second,
            self.settings.max_clicks_per_second,
        );
        for _ in 0..clicks {
            report.credited = report.credited.saturating_add(engine.click());
        }
        report.clicks += clicks;

        if self.rng.chance(self.settings.buy_chance) {
            let choice = PREFERENCE.iter().copied().find(|k| engine.can_afford(*k));
            if let Some(kind) = choice {
                if engine.purchase(kind) {
                    report.purchases += 1;
                }
            }
        }

        let interval = engine.clock.tick_interval;
        report.credited = report.credited.saturating_add(engine.advance(interval));
        report.seconds += 1;
        engine.drain_events();
    }

    pub fn play<S: SaveStore>(&mut self, engine: &mut EconomyEngine<S>, seconds: u64) -> AutoplayReport {
        let mut report = AutoplayReport::default();
        for _ in 0..seconds {
            self.play_second(engine, &mut report);
        }
        log::info!(
            "autoplay: {} s, {} clicks, {} purchases, {} credited",
            report.seconds,
            report.clicks,
            report.purchases,
            report.credited
        );
        report
    }
}
