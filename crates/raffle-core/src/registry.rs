//! Ticket registry.
//!
//! Maps a user name to the single ticket that user currently holds. Ticket
//! numbers held at the same time are pairwise distinct.
//!
//! # Invariants
//!
//! - A name maps to at most one ticket.
//! - No two names hold the same ticket number.
//! - An entry is only removed when its holder checks it with the right number.

use std::collections::HashMap;

use crate::{Environment, TicketNumber};

/// Result of a purchase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// A new ticket was assigned.
    Purchased(TicketNumber),
    /// The name already holds this ticket. Nothing changed.
    AlreadyHolding(TicketNumber),
    /// Every ticket number is held. Nothing changed.
    SoldOut,
}

/// Result of checking a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The name holds no ticket.
    NoTicket,
    /// The guessed number is not the one the name holds. The ticket is kept.
    NotOwner,
    /// Prime ticket. The ticket was consumed.
    Won(TicketNumber),
    /// Non-prime ticket. The ticket was consumed.
    Lost(TicketNumber),
}

/// In-memory registry of held tickets.
#[derive(Debug, Clone, Default)]
pub struct TicketRegistry {
    tickets: HashMap<String, TicketNumber>,
}

impl TicketRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket held by `name`. `None` if they hold none.
    pub fn get(&self, name: &str) -> Option<TicketNumber> {
        self.tickets.get(name).copied()
    }

    /// Whether `name` holds a ticket.
    pub fn contains(&self, name: &str) -> bool {
        self.tickets.contains_key(name)
    }

    /// Whether any name holds `ticket`.
    pub fn is_taken(&self, ticket: TicketNumber) -> bool {
        self.tickets.values().any(|held| *held == ticket)
    }

    /// Number of held tickets.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Whether no tickets are held.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Whether every ticket number in the range is held.
    pub fn is_full(&self) -> bool {
        self.tickets.len() >= TicketNumber::CAPACITY
    }

    /// Iterate over `(name, ticket)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TicketNumber)> {
        self.tickets.iter().map(|(name, ticket)| (name.as_str(), *ticket))
    }

    /// Assign a fresh random ticket to `name`.
    ///
    /// Draws uniformly from the ticket range and redraws while the number is
    /// held by anyone.
    pub fn purchase<E: Environment>(&mut self, name: &str, env: &E) -> PurchaseOutcome {
        if let Some(held) = self.get(name) {
            return PurchaseOutcome::AlreadyHolding(held);
        }
        if self.is_full() {
            tracing::warn!(held = self.len(), "all ticket numbers are held");
            return PurchaseOutcome::SoldOut;
        }

        let ticket = loop {
            let drawn =
                env.random_in_range(u64::from(TicketNumber::MIN), u64::from(TicketNumber::MAX));
            let Ok(candidate) = TicketNumber::new(drawn as i64) else {
                continue;
            };
            if !self.is_taken(candidate) {
                break candidate;
            }
            tracing::debug!(%candidate, "ticket already held, redrawing");
        };

        self.tickets.insert(name.to_string(), ticket);
        tracing::info!(name, %ticket, "ticket purchased");
        PurchaseOutcome::Purchased(ticket)
    }

    /// Check `name`'s ticket against the number they claim to hold.
    ///
    /// A matching guess consumes the ticket whatever the result; a wrong
    /// guess leaves it in place.
    pub fn check(&mut self, name: &str, guess: i64) -> CheckOutcome {
        let Some(held) = self.get(name) else {
            return CheckOutcome::NoTicket;
        };
        if i64::from(held.get()) != guess {
            tracing::debug!(name, guess, "ticket number mismatch");
            return CheckOutcome::NotOwner;
        }

        self.tickets.remove(name);
        let outcome = if held.is_winner() { CheckOutcome::Won(held) } else { CheckOutcome::Lost(held) };
        tracing::info!(name, ticket = %held, ?outcome, "ticket checked");
        outcome
    }
}
