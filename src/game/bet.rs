use tracing::debug;

use crate::console::Console;
use crate::error::RoundError;
use crate::participant::{Participant, Player, TurnState};

use super::{Game, RoundPhase};

/// Cards each side receives before play starts.
const OPENING_CARDS: usize = 2;

impl Game {
    /// Starts a round: clears both hands, takes the player's ante, and deals
    /// two cards each, alternating player and dealer.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::OutOfFunds`] if the player cannot ante,
    /// [`RoundError::DeckExhausted`] if the deck runs out, or a console error.
    pub fn deal<C: Console + ?Sized>(
        &mut self,
        player: &mut Player,
        console: &mut C,
    ) -> Result<(), RoundError> {
        self.phase = RoundPhase::Deal;
        player.clear_hand();
        self.dealer.clear_hand();

        player.ante(console, self.options.min_bet)?;

        for _ in 0..OPENING_CARDS {
            player.deal_card(self.deck.draw()?);
            self.dealer.deal_card(self.deck.draw()?);
        }

        self.player_state = TurnState::Waiting;
        self.dealer_state = TurnState::Waiting;
        self.phase = RoundPhase::Alternate;

        debug!(
            player_total = player.hand().total(),
            bet = player.bet(),
            remaining = self.deck.len(),
            "dealt opening hands"
        );
        Ok(())
    }
}
