//! The economy engine — sole owner of the ledger.
//!
//! RULES:
//!   - Only the engine mutates `EconomyState`. Hosts read it through
//!     `state()` and change it through the operations below.
//!   - Every operation that touches a tier leaves the ledger consolidated.
//!   - Every mutation is saved before the operation returns. A failed save
//!     is reported as a `SaveFailed` event; the in-memory ledger stays
//!     authoritative and play continues.
//!   - Operations run to completion in call order. Time only enters
//!     through `tick()` and `advance()`.

use crate::{
    clock::GameClock,
    command::{CommandOutcome, PlayerCommand},
    config::GameConfig,
    error::{GameError, GameResult},
    event::GameEvent,
    snapshot,
    state::EconomyState,
    store::{SaveStore, SqliteStore},
    types::{Amount, Millis, SessionId},
    upgrade::{self, ShopEntry, UpgradeKind},
};
use uuid::Uuid;

pub struct EconomyEngine<S: SaveStore = SqliteStore> {
    pub session_id: SessionId,
    pub clock:      GameClock,
    state:          EconomyState,
    config:         GameConfig,
    store:          S,
    pending:        Vec<GameEvent>,
}

impl<S: SaveStore> EconomyEngine<S> {
    /// Start a session from whatever the store holds under the save key.
    /// An absent or unreadable record starts from defaults.
    pub fn new(config: GameConfig, store: S) -> Self {
        let raw = match store.load(&config.save_key) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Cannot read save slot '{}': {e}; starting fresh", config.save_key);
                None
            }
        };
        let (state, restored) = snapshot::restore(raw.as_deref());
        Self::start(config, store, state, restored)
    }

    /// Start a session from an explicit ledger instead of the store.
    /// The ledger is cleaned up and consolidated exactly like a loaded one.
    pub fn with_state(config: GameConfig, store: S, state: EconomyState) -> Self {
        Self::start(config, store, snapshot::sanitize(state), false)
    }

    fn start(config: GameConfig, store: S, state: EconomyState, restored: bool) -> Self {
        let session_id = format!("{}-{}", config.session_prefix, Uuid::new_v4());
        let clock = GameClock::new(config.tick_interval_ms, state.autosave_interval);
        let mut engine = Self {
            session_id,
            clock,
            state,
            config,
            store,
            pending: Vec::new(),
        };
        log::info!(
            "Session {} started ({})",
            engine.session_id,
            if restored { "restored" } else { "fresh" }
        );
        engine.emit(GameEvent::SessionStarted {
            session_id: engine.session_id.clone(),
            restored,
        });
        engine.persist();
        engine
    }

    // ── Read surface ───────────────────────────────────────────

    pub fn state(&self) -> &EconomyState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn shop(&self) -> Vec<ShopEntry> {
        upgrade::shop(&self.state)
    }

    pub fn can_afford(&self, kind: UpgradeKind) -> bool {
        kind.spec().affordable(&self.state)
    }

    /// Number of emitted events not yet drained.
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Take every event emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    // ── Accrual ────────────────────────────────────────────────

    /// Credit one manual click. Returns the amount credited.
    pub fn click(&mut self) -> Amount {
        let amount = self.state.per_click;
        self.state.life = self.state.life.saturating_add(amount);
        self.emit(GameEvent::Clicked { amount });
        self.settle();
        self.persist();
        amount
    }

    /// Credit one second of passive generation. Returns the amount
    /// credited; zero (and nothing else happens) when `per_second` is zero.
    pub fn tick(&mut self) -> Amount {
        let amount = self.accrue_ticks(1);
        if amount > 0 {
            self.persist();
        }
        amount
    }

    /// Feed elapsed wall time. Credits every tick that came due in one
    /// step, then runs the autosave if its timer fired. Returns the total
    /// credited. Cost does not depend on how much time elapsed.
    pub fn advance(&mut self, elapsed: Millis) -> Amount {
        let firings = self.clock.advance(elapsed);
        let credited = self.accrue_ticks(firings.ticks);
        if credited > 0 && !firings.autosave {
            self.persist();
        }
        if firings.autosave {
            self.autosave();
        }
        credited
    }

    /// Credit `ticks` seconds of generation at once. The consolidated form
    /// of a total is unique, so this matches crediting them one by one.
    fn accrue_ticks(&mut self, ticks: u64) -> Amount {
        let amount = self.state.per_second.saturating_mul(ticks);
        if amount == 0 {
            return 0;
        }
        self.state.life = self.state.life.saturating_add(amount);
        self.emit(GameEvent::Ticked { amount, ticks });
        self.settle();
        amount
    }

    // ── Shop ───────────────────────────────────────────────────

    /// Buy one upgrade. Returns false, with the ledger untouched, when
    /// the balance in the upgrade's currency is below its cost.
    pub fn purchase(&mut self, kind: UpgradeKind) -> bool {
        let spec = kind.spec();
        if !spec.apply(&mut self.state) {
            let balance = spec.currency.balance(&self.state);
            log::debug!("purchase {kind} rejected: balance={balance} cost={}", spec.cost);
            self.emit(GameEvent::PurchaseRejected { kind, balance, cost: spec.cost });
            return false;
        }
        log::debug!(
            "purchase {kind}: per_click={} per_second={}",
            self.state.per_click,
            self.state.per_second
        );
        self.emit(GameEvent::UpgradePurchased { kind });
        self.settle();
        self.persist();
        true
    }

    // ── Settings and lifecycle ─────────────────────────────────

    /// Back to defaults, with the saved record discarded.
    pub fn reset(&mut self) {
        self.state = EconomyState::default();
        self.clock.reschedule_autosave(self.state.autosave_interval);
        if let Err(e) = self.store.clear(&self.config.save_key) {
            log::warn!("Cannot clear save slot '{}': {e}", self.config.save_key);
            self.emit(GameEvent::SaveFailed { reason: e.to_string() });
        }
        log::info!("Session {}: progress reset", self.session_id);
        self.emit(GameEvent::ProgressReset);
    }

    pub fn set_sound(&mut self, enabled: bool) {
        self.state.sound = enabled;
        self.emit(GameEvent::SoundChanged { enabled });
        self.persist();
    }

    /// Change the autosave cadence. The timer restarts immediately.
    pub fn set_autosave_interval(&mut self, ms: Millis) -> GameResult<()> {
        if ms == 0 {
            return Err(GameError::InvalidAutosaveInterval);
        }
        self.state.autosave_interval = ms;
        self.clock.reschedule_autosave(ms);
        self.emit(GameEvent::AutosaveIntervalChanged { ms });
        self.persist();
        Ok(())
    }

    /// Consolidate and write the ledger. Returns whether the write succeeded.
    pub fn save(&mut self) -> bool {
        self.settle();
        self.persist()
    }

    fn autosave(&mut self) {
        if self.save() {
            log::debug!("Session {}: autosaved", self.session_id);
            self.emit(GameEvent::Autosaved);
        }
    }

    /// Dispatch a serialized player command.
    pub fn apply(&mut self, command: PlayerCommand) -> GameResult<CommandOutcome> {
        let outcome = match command {
            PlayerCommand::Click => CommandOutcome::Credited(self.click()),
            PlayerCommand::Tick => CommandOutcome::Credited(self.tick()),
            PlayerCommand::Advance { elapsed_ms } => {
                CommandOutcome::Credited(self.advance(elapsed_ms))
            }
            PlayerCommand::Purchase { kind } => CommandOutcome::Purchased(self.purchase(kind)),
            PlayerCommand::Reset => {
                self.reset();
                CommandOutcome::Done
            }
            PlayerCommand::SetSound { enabled } => {
                self.set_sound(enabled);
                CommandOutcome::Done
            }
            PlayerCommand::SetAutosaveInterval { ms } => {
                self.set_autosave_interval(ms)?;
                CommandOutcome::Done
            }
            PlayerCommand::Save => {
                self.save();
                CommandOutcome::Done
            }
        };
        Ok(outcome)
    }

    // ── Internals ──────────────────────────────────────────────

    fn settle(&mut self) {
        let promotion = self.state.consolidate();
        if promotion.is_empty() {
            return;
        }
        log::debug!(
            "consolidated: +{} lakes +{} seas +{} oceans",
            promotion.lakes,
            promotion.seas,
            promotion.oceans
        );
        self.emit(GameEvent::Consolidated {
            lakes:  promotion.lakes,
            seas:   promotion.seas,
            oceans: promotion.oceans,
        });
    }

    fn persist(&mut self) -> bool {
        let result = snapshot::encode(&self.state)
            .and_then(|json| self.store.save(&self.config.save_key, &json));
        match result {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Cannot write save slot '{}': {e}", self.config.save_key);
                self.emit(GameEvent::SaveFailed { reason: e.to_string() });
                false
            }
        }
    }

    fn emit(&mut self, event: GameEvent) {
        if self.config.log_events {
            if let Err(e) = self.store.append_event(&self.session_id, &event) {
                log::warn!("Cannot append {} to event log: {e}", event.type_name());
            }
        }
        self.pending.push(event);
    }
}

impl EconomyEngine<SqliteStore> {
    /// Engine over a fresh, migrated in-memory database with default config.
    pub fn build_test() -> GameResult<Self> {
        let store = SqliteStore::in_memory()?;
        store.migrate()?;
        Ok(Self::new(GameConfig::default(), store))
    }

    /// Same as `build_test`, starting from `state`.
    pub fn build_test_with_state(state: EconomyState) -> GameResult<Self> {
        let store = SqliteStore::in_memory()?;
        store.migrate()?;
        Ok(Self::with_state(GameConfig::default(), store, state))
    }
}
