use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::Card;
use crate::console::{Console, prompt_until};
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::record::PlayerRecord;
use crate::result::Outcome;

use super::{Move, Participant};

/// Prompt shown when the player must choose a move.
pub const MOVE_PROMPT: &str = "Hit, Stand, or Double Down? ";

fn parse_move(answer: &str) -> Result<Move, String> {
    let normalized = answer
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    match normalized.as_str() {
        "hit" => Ok(Move::Hit),
        "stand" => Ok(Move::Stand),
        "double down" => Ok(Move::DoubleDown),
        _ => Err("Please enter hit, stand, or double down.".to_owned()),
    }
}

/// The human seat, driven by console input.
///
/// The bankroll lives in the player's [`PlayerRecord`], so every change to it
/// is persisted with the statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    record: PlayerRecord,
    bet: u64,
    hand: Hand,
}

impl Player {
    /// Creates a new player with no rounds played.
    pub fn new(name: impl Into<String>, bankroll: u64) -> Self {
        Self::from_record(PlayerRecord::new(name, bankroll))
    }

    /// Creates a player from a loaded record.
    #[must_use]
    pub const fn from_record(record: PlayerRecord) -> Self {
        Self {
            record,
            bet: 0,
            hand: Hand::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Returns the persisted record.
    #[must_use]
    pub const fn record(&self) -> &PlayerRecord {
        &self.record
    }

    /// Consumes the player, returning the persisted record.
    #[must_use]
    pub fn into_record(self) -> PlayerRecord {
        self.record
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> u64 {
        self.record.bankroll
    }

    /// Sets the bankroll.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::OutOfFunds`] if `bankroll` is negative.
    pub fn set_bankroll(&mut self, bankroll: i64) -> Result<(), RoundError> {
        self.record.bankroll = u64::try_from(bankroll).map_err(|_| RoundError::OutOfFunds)?;
        Ok(())
    }

    /// Applies a signed change to the bankroll.
    ///
    /// Returns `false` and leaves the bankroll untouched if the result would
    /// be negative.
    pub fn update_bankroll(&mut self, delta: i64) -> bool {
        match self.record.bankroll.checked_add_signed(delta) {
            Some(bankroll) => {
                self.record.bankroll = bankroll;
                true
            }
            None => {
                warn!(player = %self.record.name, delta, "rejected bankroll adjustment");
                false
            }
        }
    }

    /// Returns the current wager.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Sets the wager for the round.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::OutOfFunds`] if `amount` is zero or exceeds the
    /// bankroll.
    pub const fn place_bet(&mut self, amount: u64) -> Result<(), RoundError> {
        if amount == 0 || amount > self.record.bankroll {
            return Err(RoundError::OutOfFunds);
        }
        self.bet = amount;
        Ok(())
    }

    /// Asks for a wager between `min_bet` and the bankroll until one is valid.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::OutOfFunds`] without prompting if the bankroll
    /// cannot cover `min_bet`, or a console error if input ends.
    pub fn ante<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        min_bet: u64,
    ) -> Result<u64, RoundError> {
        let min_bet = min_bet.max(1);
        let bankroll = self.record.bankroll;
        if bankroll < min_bet {
            return Err(RoundError::OutOfFunds);
        }

        let text = format!("Place your bet ({min_bet}-{bankroll}): ");
        let bet = prompt_until(console, &text, |answer| {
            match answer.trim().parse::<u64>() {
                Ok(bet) if (min_bet..=bankroll).contains(&bet) => Ok(bet),
                _ => Err(format!(
                    "Bet must be a whole number from {min_bet} to {bankroll}."
                )),
            }
        })?;

        self.bet = bet;
        debug!(player = %self.record.name, bet, "ante placed");
        Ok(bet)
    }

    /// Returns whether the wager can be doubled.
    #[must_use]
    pub const fn can_double_down(&self) -> bool {
        self.bet <= self.record.bankroll / 2
    }

    /// Doubles the wager if the bankroll covers twice the bet.
    ///
    /// Returns `false` and leaves the bet unchanged otherwise.
    pub const fn double_down(&mut self) -> bool {
        if !self.can_double_down() {
            return false;
        }
        self.bet *= 2;
        true
    }

    /// Records a settled round.
    ///
    /// A victory needs a positive `amount`, a defeat a negative `amount` the
    /// bankroll can cover. A push ignores `amount`. Returns `false`, changing
    /// nothing, if `amount` does not fit the outcome.
    pub fn update_stats(&mut self, outcome: Outcome, amount: i64) -> bool {
        let valid = match outcome {
            Outcome::Victory => amount > 0,
            Outcome::Defeat => amount < 0 && amount.unsigned_abs() <= self.record.bankroll,
            Outcome::Push => true,
        };
        if !valid {
            warn!(player = %self.record.name, %outcome, amount, "rejected settlement");
            return false;
        }

        match outcome {
            Outcome::Victory => {
                if !self.update_bankroll(amount) {
                    return false;
                }
                self.record.wins += 1;
            }
            Outcome::Defeat => {
                if !self.update_bankroll(amount) {
                    return false;
                }
                self.record.losses += 1;
            }
            Outcome::Push => self.record.pushes += 1,
        }
        true
    }

    /// Renders the player's statistics.
    #[must_use]
    pub fn stats_report(&self) -> String {
        self.record.to_string()
    }

    /// Discards the hand for a new round.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }
}

impl Participant for Player {
    fn take_turn<C: Console + ?Sized>(
        &mut self,
        deck: &mut Deck,
        console: &mut C,
    ) -> Result<Move, RoundError> {
        let mv = loop {
            let mv = prompt_until(console, MOVE_PROMPT, parse_move)?;
            if mv == Move::DoubleDown && !self.double_down() {
                console.display("You cannot afford to double down.");
                continue;
            }
            break mv;
        };

        if mv != Move::Stand {
            let card = deck.draw()?;
            self.deal_card(card);
        }
        debug!(
            player = %self.record.name,
            ?mv,
            total = self.hand.total(),
            bet = self.bet,
            "player move"
        );
        Ok(mv)
    }

    /// Player cards are always dealt face up.
    fn deal_card(&mut self, mut card: Card) {
        if card.is_face_down() {
            card.flip();
        }
        self.hand.add_card(card);
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }
}
