//! The per-round card source.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Suit, Value};
use crate::error::RoundError;

/// A deck of cards drawn from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates one of every suit and value, shuffled with `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for value in Value::ALL {
                cards.push(Card::new(suit, value));
            }
        }

        cards.shuffle(rng);
        Self {
            cards: cards.into(),
        }
    }

    /// Creates a deck that yields `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Draws the next card.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, RoundError> {
        let card = self.cards.pop_front().ok_or(RoundError::DeckExhausted)?;
        debug!(%card, remaining = self.cards.len(), "drew card");
        Ok(card)
    }

    /// Returns the card that would be drawn next.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
