//! Round outcome types and evaluation.

use core::fmt;

use crate::hand::BLACKJACK;

/// Result of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    Victory,
    /// Player loses (player busts or dealer has the higher total).
    Defeat,
    /// Tie.
    Push,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Victory => "Victory",
            Self::Defeat => "Defeat",
            Self::Push => "Push",
        })
    }
}

/// Decides a round from both hands' totals and card counts.
///
/// Rules are checked in priority order:
/// 1. a player bust loses
/// 2. a dealer bust wins
/// 3. when both hold 21, a two-card 21 beats a longer 21, otherwise push
/// 4. equal totals push
/// 5. the higher total wins
#[must_use]
pub const fn evaluate(
    player_total: u8,
    player_size: usize,
    dealer_total: u8,
    dealer_size: usize,
) -> Outcome {
    if player_total > BLACKJACK {
        Outcome::Defeat
    } else if dealer_total > BLACKJACK {
        Outcome::Victory
    } else if player_total == BLACKJACK && dealer_total == BLACKJACK {
        if player_size == 2 && dealer_size > 2 {
            Outcome::Victory
        } else if dealer_size == 2 && player_size > 2 {
            Outcome::Defeat
        } else {
            Outcome::Push
        }
    } else if player_total == dealer_total {
        Outcome::Push
    } else if player_total > dealer_total {
        Outcome::Victory
    } else {
        Outcome::Defeat
    }
}

/// The settled result of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// Net bankroll change (`+bet`, `-bet`, or 0).
    pub net: i64,
    /// The final wager, after any double down.
    pub bet: u64,
    /// The player's final hand total.
    pub player_total: u8,
    /// The dealer's final hand total.
    pub dealer_total: u8,
}
