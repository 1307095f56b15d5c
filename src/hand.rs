//! Hand representation and scoring.

use alloc::collections::VecDeque;
use core::fmt;

use crate::card::{Card, Value};

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// Sum of non-ace scores plus the ace count at or below which one ace counts as 11.
const SOFT_THRESHOLD: u8 = 11;

/// Extra points for the single ace promoted to 11.
const ACE_BONUS: u8 = 10;

/// Resolves a non-ace subtotal and an ace count into a hand total.
///
/// At most one ace is ever promoted to 11. Every other ace counts as 1.
const fn resolve_aces(subtotal: u8, aces: u8) -> (u8, bool) {
    let low = subtotal.saturating_add(aces);
    if aces > 0 && low <= SOFT_THRESHOLD {
        (low + ACE_BONUS, true)
    } else {
        (low, false)
    }
}

fn evaluate_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> (u8, bool) {
    let mut subtotal: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.value() == Value::Ace {
            aces += 1;
        } else {
            subtotal = subtotal.saturating_add(card.value().score());
        }
    }

    resolve_aces(subtotal, aces)
}

/// An ordered collection of cards, most recently dealt first.
///
/// Scoring always uses the true card values, regardless of which cards are
/// face down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: VecDeque<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Adds a card in front of the existing cards.
    ///
    /// The card's face orientation is left as it is.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Returns whether the hand is a natural (two cards totalling 21).
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.len() == 2 && self.total() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at `index`, where 0 is the most recently added card.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the first card dealt into the hand.
    pub fn oldest_mut(&mut self) -> Option<&mut Card> {
        self.cards.back_mut()
    }

    /// Iterates over the cards, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl core::ops::Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
