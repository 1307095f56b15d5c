use tracing::debug;

use crate::card::Card;
use crate::console::Console;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;

use super::{Move, Participant};

const DEFAULT_STANDS_ON: u8 = 17;

/// The house. Hits below a fixed total and never sees the player's cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealer {
    hand: Hand,
    stands_on: u8,
}

impl Dealer {
    /// Creates a dealer that stands on 17.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_stands_on(DEFAULT_STANDS_ON)
    }

    /// Creates a dealer that hits while its total is below `stands_on`.
    #[must_use]
    pub const fn with_stands_on(stands_on: u8) -> Self {
        Self {
            hand: Hand::new(),
            stands_on,
        }
    }

    /// Returns the total the dealer stands on.
    #[must_use]
    pub const fn stands_on(&self) -> u8 {
        self.stands_on
    }

    /// Returns the move the dealer makes at `total`.
    #[must_use]
    pub const fn decide(&self, total: u8) -> Move {
        if total < self.stands_on {
            Move::Hit
        } else {
            Move::Stand
        }
    }

    /// Turns the hidden card face up and shows the whole hand.
    pub fn reveal_hand<C: Console + ?Sized>(&mut self, console: &mut C) {
        if let Some(card) = self.hand.oldest_mut() {
            if card.is_face_down() {
                card.flip();
            }
        }
        debug!(total = self.hand.total(), "dealer revealed hand");
        console.display(&format!("Dealer's hand:\n{}", self.hand));
    }

    /// Discards the hand for a new round.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}

impl Participant for Dealer {
    fn take_turn<C: Console + ?Sized>(
        &mut self,
        deck: &mut Deck,
        _console: &mut C,
    ) -> Result<Move, RoundError> {
        let mv = self.decide(self.hand.total());
        if mv == Move::Hit {
            let card = deck.draw()?;
            self.deal_card(card);
        }
        debug!(?mv, total = self.hand.total(), "dealer move");
        Ok(mv)
    }

    /// The first card into an empty hand is turned face down.
    fn deal_card(&mut self, mut card: Card) {
        let hidden = self.hand.is_empty();
        if card.is_face_down() != hidden {
            card.flip();
        }
        self.hand.add_card(card);
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }
}
