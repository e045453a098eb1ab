//! Environment abstraction for deterministic testing.
//!
//! Decouples ticket allocation from the source of randomness. Production uses
//! OS entropy; tests and `--seed` runs use [`SeededEnv`] so that the sequence
//! of drawn tickets is reproducible.

use std::sync::{Arc, Mutex, PoisonError};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Abstract environment providing randomness.
///
/// # Invariants
///
/// - `random_bytes()` fills the whole buffer
/// - Given the same seed, a deterministic implementation produces the same
///   sequence of bytes
pub trait Environment: Clone + Send + Sync + 'static {
    /// Fills the provided buffer with random bytes.
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Generates a random `u64`.
    fn random_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }

    /// Generates a uniformly distributed value in `low..=high`.
    ///
    /// Uses rejection sampling so that no value in the range is favoured.
    fn random_in_range(&self, low: u64, high: u64) -> u64 {
        debug_assert!(low <= high, "invalid range {low}..={high}");
        let Some(span) = (high - low).checked_add(1) else {
            return self.random_u64();
        };

        let limit = u64::MAX - (u64::MAX % span);
        loop {
            let value = self.random_u64();
            if value < limit {
                return low + value % span;
            }
        }
    }
}

/// Deterministic environment backed by a seeded `ChaCha8` stream.
///
/// Clones share the same stream, so draws made through any clone advance it
/// for all of them.
#[derive(Clone, Debug)]
pub struct SeededEnv {
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl SeededEnv {
    /// Create an environment whose draws are fixed by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))) }
    }
}

impl Environment for SeededEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        // A panic while holding the lock cannot leave the RNG half-updated.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.fill_bytes(buffer);
    }
}
