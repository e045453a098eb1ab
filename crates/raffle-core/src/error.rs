//! Error types for the raffle core.
//!
//! Business-rule violations (a second purchase, a wrong guess) are not errors;
//! they are reported through [`crate::PurchaseOutcome`] and
//! [`crate::CheckOutcome`]. Only construction of invalid values fails here.

use thiserror::Error;

/// Errors raised when building domain values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketError {
    /// Ticket number outside the raffle range
    #[error("ticket number {value} is outside {min}..={max}")]
    OutOfRange {
        /// Rejected value
        value: i64,
        /// Lowest valid ticket number
        min: u16,
        /// Highest valid ticket number
        max: u16,
    },
}
