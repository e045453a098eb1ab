//! Menu loop runtime.
//!
//! Drives the [`Raffle`] engine one menu cycle at a time:
//!
//! ```text
//! Running --check/purchase--> Running
//! Running --stop program----> Stopped (terminal)
//! ```
//!
//! An input-stream failure ends the loop early and is returned to the caller.

use std::io::{BufRead, Write};

use raffle_core::Environment;

use crate::{PromptError, Prompter, Raffle};

/// State of the menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Menu cycles continue.
    Running,
    /// The operator chose to stop. Terminal.
    Stopped,
}

/// Runtime that owns the prompter and the engine.
pub struct Runtime<R, W, E: Environment> {
    prompter: Prompter<R, W>,
    raffle: Raffle<E>,
    state: LoopState,
}

impl<R: BufRead, W: Write, E: Environment> Runtime<R, W, E> {
    /// Create a runtime reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, env: E) -> Self {
        Self { prompter: Prompter::new(input, output), raffle: Raffle::new(env), state: LoopState::Running }
    }

    /// Current loop state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The engine, for inspecting held tickets.
    pub fn raffle(&self) -> &Raffle<E> {
        &self.raffle
    }

    /// Run one menu cycle. A stopped runtime stays stopped.
    pub fn step(&mut self) -> Result<LoopState, PromptError> {
        if self.state == LoopState::Running && !self.raffle.menu_cycle(&mut self.prompter)? {
            self.state = LoopState::Stopped;
        }
        Ok(self.state)
    }

    /// Run menu cycles until the operator stops the program.
    ///
    /// # Errors
    ///
    /// Returns the first input-stream failure; no further cycles are run.
    pub fn run(&mut self) -> Result<(), PromptError> {
        tracing::debug!("raffle menu loop started");

        while self.step()? == LoopState::Running {}

        tracing::debug!(held = self.raffle.registry().len(), "raffle menu loop stopped");
        Ok(())
    }

    /// Consume the runtime, returning its streams.
    pub fn into_inner(self) -> (R, W) {
        self.prompter.into_inner()
    }
}
