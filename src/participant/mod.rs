//! The shared turn contract for everyone seated at the table.

use crate::card::Card;
use crate::console::Console;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;

mod dealer;
mod player;

pub use dealer::Dealer;
pub use player::Player;

/// A move returned from a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Took one more card.
    Hit,
    /// Kept the current hand.
    Stand,
    /// Doubled the wager and took exactly one more card.
    DoubleDown,
}

impl Move {
    /// Returns whether the move ends the mover's participation in the round.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Stand | Self::DoubleDown)
    }
}

/// Where a participant is within the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    /// Dealt in, not yet asked to move.
    #[default]
    Waiting,
    /// May be asked for another move.
    Acting,
    /// Stood, doubled down, or busted.
    Done,
}

impl TurnState {
    /// Returns the state that follows `mv`, given whether the hand is now bust.
    #[must_use]
    pub const fn after(mv: Move, busted: bool) -> Self {
        if busted || mv.is_final() {
            Self::Done
        } else {
            Self::Acting
        }
    }
}

/// Something that holds a hand and takes turns.
pub trait Participant {
    /// Chooses and performs one move, drawing from `deck` as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out or the console fails.
    fn take_turn<C: Console + ?Sized>(
        &mut self,
        deck: &mut Deck,
        console: &mut C,
    ) -> Result<Move, RoundError>;

    /// Receives a card into the hand.
    fn deal_card(&mut self, card: Card);

    /// Returns the current hand.
    fn hand(&self) -> &Hand;

    /// Returns whether the hand total exceeds 21.
    fn has_busted(&self) -> bool {
        self.hand().is_bust()
    }
}
