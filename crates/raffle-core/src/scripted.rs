//! Scripted randomness for tests.
//!
//! Only built for this crate's tests and under the `test-utils` feature.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::Environment;

/// Environment that replays a fixed script of draws.
///
/// Each draw takes the next scripted value, cycling when the script runs out.
/// Values outside the requested range are wrapped into it. Used to pin ticket
/// numbers in transcript tests.
///
/// A ticket purchase redraws until it finds a free number, so a script whose
/// every value is already held makes that purchase loop forever.
#[derive(Clone, Debug)]
pub struct ScriptedEnv {
    draws: Arc<[u64]>,
    cursor: Arc<AtomicUsize>,
}

impl ScriptedEnv {
    /// Create an environment replaying `draws`. An empty script always draws 0.
    pub fn new(draws: &[u64]) -> Self {
        Self { draws: draws.into(), cursor: Arc::default() }
    }

    fn next_draw(&self) -> u64 {
        let index = self.cursor.fetch_add(1, Ordering::SeqCst);
        if self.draws.is_empty() { 0 } else { self.draws[index % self.draws.len()] }
    }
}

impl Environment for ScriptedEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        for chunk in buffer.chunks_mut(8) {
            let bytes = self.next_draw().to_be_bytes();
            chunk.copy_from_slice(&bytes[8 - chunk.len()..]);
        }
    }

    fn random_u64(&self) -> u64 {
        self.next_draw()
    }

    fn random_in_range(&self, low: u64, high: u64) -> u64 {
        let draw = self.next_draw();
        if (low..=high).contains(&draw) {
            return draw;
        }
        match (high - low).checked_add(1) {
            Some(span) => low + draw % span,
            None => draw,
        }
    }
}
