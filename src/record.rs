//! The persisted player record.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A player's saved name, bankroll, and win/loss/push counters.
///
/// This is the only shape written to storage. Unknown fields are rejected on
/// load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerRecord {
    /// Player name.
    pub name: String,
    /// Money available to wager.
    pub bankroll: u64,
    /// Rounds won.
    pub wins: u64,
    /// Rounds lost.
    pub losses: u64,
    /// Rounds tied.
    pub pushes: u64,
}

impl PlayerRecord {
    /// Creates a record with no rounds played.
    pub fn new(name: impl Into<String>, bankroll: u64) -> Self {
        Self {
            name: name.into(),
            bankroll,
            wins: 0,
            losses: 0,
            pushes: 0,
        }
    }

    /// Returns the number of rounds settled.
    #[must_use]
    pub const fn rounds(&self) -> u64 {
        self.wins + self.losses + self.pushes
    }
}

impl fmt::Display for PlayerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "============== Stats for {} ==============", self.name)?;
        writeln!(f, "Total Money: {}", self.bankroll)?;
        writeln!(f, "Total Wins: {}", self.wins)?;
        writeln!(f, "Total Losses: {}", self.losses)?;
        write!(f, "Total Pushes: {}", self.pushes)
    }
}
