use tracing::info;

use crate::console::Console;
use crate::error::RoundError;
use crate::participant::{Participant, Player};
use crate::result::{Outcome, Settlement, evaluate};

use super::{Game, RoundPhase};

impl Game {
    /// Dealer turns the hidden card face up and shows the hand.
    pub fn reveal<C: Console + ?Sized>(&mut self, console: &mut C) {
        self.phase = RoundPhase::Reveal;
        self.dealer.reveal_hand(console);
    }

    /// Compares the player's hand with the dealer's.
    ///
    /// Face orientation is ignored; the true card values are used.
    pub fn evaluate(&mut self, player: &Player) -> Outcome {
        self.phase = RoundPhase::Evaluate;
        let player_hand = player.hand();
        let dealer_hand = self.dealer.hand();
        evaluate(
            player_hand.total(),
            player_hand.len(),
            dealer_hand.total(),
            dealer_hand.len(),
        )
    }

    /// Applies `outcome` to the player's bankroll and statistics.
    ///
    /// A victory pays the bet, a defeat takes it, and a push changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::OutOfFunds`] if the bankroll cannot cover the loss.
    pub fn settle(
        &mut self,
        player: &mut Player,
        outcome: Outcome,
    ) -> Result<Settlement, RoundError> {
        let bet = player.bet();
        let stake = i64::try_from(bet).map_err(|_| RoundError::OutOfFunds)?;
        let net = match outcome {
            Outcome::Victory => stake,
            Outcome::Defeat => -stake,
            Outcome::Push => 0,
        };

        if !player.update_stats(outcome, net) {
            return Err(RoundError::OutOfFunds);
        }
        self.phase = RoundPhase::Settle;

        let settlement = Settlement {
            outcome,
            net,
            bet,
            player_total: player.hand().total(),
            dealer_total: self.dealer.hand().total(),
        };
        info!(
            player = %player.name(),
            %outcome,
            net,
            bankroll = player.bankroll(),
            "round settled"
        );
        Ok(settlement)
    }
}
