//! Raffle engine.
//!
//! [`Raffle`] owns the ticket registry and the randomness environment and runs
//! one menu cycle at a time. Every operator-facing message is written through
//! the [`Prompter`] passed into each call, so the engine holds no I/O of its
//! own.

use std::io::{BufRead, Write};

use raffle_core::{
    CheckOutcome, Environment, MenuItem, PurchaseOutcome, TicketNumber, TicketRegistry,
};

use crate::{PromptError, Prompter};

const WELCOME: &str = "\nWelcome to the Raffle. Select an option by number from below.";

/// Raffle engine.
#[derive(Debug, Clone)]
pub struct Raffle<E: Environment> {
    registry: TicketRegistry,
    env: E,
}

impl<E: Environment> Raffle<E> {
    /// Create an engine with an empty registry.
    pub fn new(env: E) -> Self {
        Self { registry: TicketRegistry::new(), env }
    }

    /// Tickets currently held.
    pub fn registry(&self) -> &TicketRegistry {
        &self.registry
    }

    /// Run one menu cycle.
    ///
    /// Returns `false` once the operator chooses to stop the program.
    pub fn menu_cycle<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<bool, PromptError> {
        let selection = prompter.read_selection(WELCOME, &MenuItem::labels())?;
        let item = MenuItem::from_label(&selection)
            .ok_or_else(|| PromptError::UnknownSelection(selection.clone()))?;

        tracing::debug!(?item, "menu selection");
        self.run_menu_item(item, prompter)
    }

    /// Dispatch a menu item. Returns `false` for [`MenuItem::StopProgram`].
    pub fn run_menu_item<R: BufRead, W: Write>(
        &mut self,
        item: MenuItem,
        prompter: &mut Prompter<R, W>,
    ) -> Result<bool, PromptError> {
        if item == MenuItem::StopProgram {
            prompter.say("\nThank you for using the raffle.")?;
            return Ok(false);
        }

        let name = prompter.read_line("\nWhat is your name?")?;
        match item {
            MenuItem::Check => {
                self.check_ticket(&name, prompter)?;
            },
            MenuItem::Purchase => {
                self.purchase_ticket(&name, prompter)?;
            },
            MenuItem::StopProgram => {},
        }

        Ok(true)
    }

    /// Buy a ticket for `name` and report the result.
    pub fn purchase_ticket<R: BufRead, W: Write>(
        &mut self,
        name: &str,
        prompter: &mut Prompter<R, W>,
    ) -> Result<PurchaseOutcome, PromptError> {
        let outcome = self.registry.purchase(name, &self.env);

        match outcome {
            PurchaseOutcome::Purchased(ticket) => {
                prompter.say(&format!("\nSuccessfully bought raffle ticket number {ticket}."))?;
            },
            PurchaseOutcome::AlreadyHolding(_) => {
                prompter.say(
                    "\nYou already have a ticket. Please check it before purchasing another.",
                )?;
            },
            PurchaseOutcome::SoldOut => {
                prompter.say(&format!(
                    "\nAll {} raffle tickets have been sold. Please try again after a ticket has been checked.",
                    TicketNumber::CAPACITY
                ))?;
            },
        }

        Ok(outcome)
    }

    /// Check `name`'s ticket, asking for the number they hold.
    ///
    /// The ticket number is only asked for when `name` holds a ticket. A wrong
    /// number keeps the ticket; the right one consumes it.
    pub fn check_ticket<R: BufRead, W: Write>(
        &mut self,
        name: &str,
        prompter: &mut Prompter<R, W>,
    ) -> Result<CheckOutcome, PromptError> {
        if !self.registry.contains(name) {
            prompter.say("\nYou haven't bought a ticket yet.")?;
            return Ok(CheckOutcome::NoTicket);
        }

        let guess = prompter.read_int("What is your ticket number?")?;
        let outcome = self.registry.check(name, guess);

        let message = match outcome {
            CheckOutcome::NoTicket => "\nYou haven't bought a ticket yet.",
            CheckOutcome::NotOwner => "\nYou don't own this ticket.",
            CheckOutcome::Won(_) => "\nYou won the raffle!",
            CheckOutcome::Lost(_) => "\nYou lost the raffle.",
        };
        prompter.say(message)?;

        Ok(outcome)
    }
}
