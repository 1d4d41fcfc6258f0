//! Life Clicker economy core.
//!
//! A ledger of tiered resources (life, lakes, seas, oceans), the engine
//! that credits clicks and ticks, sells upgrades and keeps the ledger
//! consolidated, and a SQLite-backed save slot.

pub mod autoplay;
pub mod clock;
pub mod command;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod event;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod types;
pub mod upgrade;
