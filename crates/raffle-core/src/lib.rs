//! Raffle domain core
//!
//! Pure state for the console raffle: no terminal, no process state. Everything
//! the menu loop mutates lives in a [`TicketRegistry`] owned by a single engine
//! instance.
//!
//! # Components
//!
//! - [`TicketNumber`]: a ticket number within the fixed raffle range
//! - [`TicketRegistry`]: name to ticket mapping with unique ticket numbers
//! - [`MenuItem`]: the fixed menu table and its label mapping
//! - [`Environment`]: source of randomness for ticket draws

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod env;
pub mod error;
mod menu;
mod registry;
#[cfg(any(test, feature = "test-utils"))]
mod scripted;
mod ticket;

pub use env::{Environment, SeededEnv};
pub use error::TicketError;
pub use menu::{MENU_ITEMS, MenuItem};
pub use registry::{CheckOutcome, PurchaseOutcome, TicketRegistry};
#[cfg(any(test, feature = "test-utils"))]
pub use scripted::ScriptedEnv;
pub use ticket::{TicketNumber, is_prime};
