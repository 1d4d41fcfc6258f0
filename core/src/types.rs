//! Shared primitive types used across the economy.

/// A resource quantity. Every tier is counted in whole units.
pub type Amount = u64;

/// A wall-clock duration in milliseconds.
pub type Millis = u64;

/// The identifier of one play session, used to group logged events.
pub type SessionId = String;
