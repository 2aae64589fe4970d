use std::fmt;

/// Payload stored on every node of a dollar game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Purse {
    /// Current amount, possibly negative.
    pub amount: i64,
    /// Number of times this node gave to its neighbours.
    pub gives: u32,
    /// Number of times this node took from its neighbours.
    pub takes: u32,
}

impl Purse {
    /// Creates a purse holding `amount` with zeroed move counters.
    pub const fn with_amount(amount: i64) -> Self {
        Self {
            amount,
            gives: 0,
            takes: 0,
        }
    }

    /// Returns whether the amount is negative.
    pub const fn in_debt(&self) -> bool {
        self.amount < 0
    }
}

impl fmt::Display for Purse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.amount)
    }
}
