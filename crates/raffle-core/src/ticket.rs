//! Ticket numbers and the primality rule that decides a win.

use std::fmt;

use crate::TicketError;

/// A raffle ticket number in `TicketNumber::MIN..=TicketNumber::MAX`.
///
/// The range is fixed; the only way to build one is [`TicketNumber::new`],
/// so every value held by the registry is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TicketNumber(u16);

impl TicketNumber {
    /// Lowest ticket number.
    pub const MIN: u16 = 1;

    /// Highest ticket number.
    pub const MAX: u16 = 500;

    /// Number of distinct tickets that can be held at once.
    pub const CAPACITY: usize = (Self::MAX - Self::MIN + 1) as usize;

    /// Build a ticket number, rejecting values outside the raffle range.
    pub fn new(value: i64) -> Result<Self, TicketError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(TicketError::OutOfRange { value, min: Self::MIN, max: Self::MAX });
        }
        Ok(Self(value as u16))
    }

    /// Raw numeric value.
    pub fn get(self) -> u16 {
        self.0
    }

    /// Whether this ticket wins the raffle (its number is prime).
    pub fn is_winner(self) -> bool {
        is_prime(u64::from(self.0))
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exact primality by trial division. 0 and 1 are not prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // Remaining candidates are of the form 6k +/- 1.
    let mut divisor = 5u64;
    while divisor.saturating_mul(divisor) <= n {
        if n % divisor == 0 || n % (divisor + 2) == 0 {
            return false;
        }
        divisor += 6;
    }
    true
}
