//! Production environment backed by OS randomness.
//!
//! Ticket draws are not reproducible. Use
//! [`raffle_core::SeededEnv`] (the `--seed` flag) for repeatable runs.

use raffle_core::Environment;
use rand::RngCore;

/// Production environment drawing from the thread-local OS-seeded RNG.
#[derive(Clone, Debug, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        rand::rng().fill_bytes(buffer);
    }
}
