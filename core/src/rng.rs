//! Deterministic random number generation for scripted players.
//!
//! RULE: The economy itself is never random. Only the autoplayer draws
//! from an RNG, and it always draws from a `PlayerRng` seeded by the caller.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub struct PlayerRng {
    inner: Pcg64Mcg,
}

impl PlayerRng {
    pub fn new(seed: u64) -> Self {
        Self { inner: Pcg64Mcg::seed_from_u64(seed) }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [lo, hi]. Returns `lo` when the range is empty.
    pub fn range_inclusive(&mut self, lo: u64, hi: u64) -> u64 {
        if hi <= lo {
            return lo;
        }
        match (hi - lo).checked_add(1) {
            Some(span) => lo + self.inner.next_u64() % span,
            // [0, u64::MAX]: every draw is already in range.
            None => self.inner.next_u64(),
        }
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}
