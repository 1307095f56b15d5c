use crate::console::Console;
use crate::error::RoundError;
use crate::participant::{Move, Participant, Player, TurnState};

use super::{Game, RoundPhase, RoundStatus};

impl Game {
    /// Shows the dealer's visible cards and the player's hand.
    fn show_table<C: Console + ?Sized>(&self, player: &Player, console: &mut C) {
        console.display(&format!("Dealer's hand:\n{}", self.dealer.hand()));
        console.display(&format!(
            "Your hand:\n{}\nTotal: {}",
            player.hand(),
            player.hand().total()
        ));
    }

    /// Runs one alternation step: the player moves (while still allowed),
    /// then the dealer moves.
    ///
    /// Once the player stands or doubles down, later steps treat the player
    /// as standing and only the dealer keeps drawing. A bust on either side
    /// ends the round immediately. The round also ends when the player has
    /// finished and the dealer stands.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out or the console fails.
    pub fn play_round<C: Console + ?Sized>(
        &mut self,
        player: &mut Player,
        console: &mut C,
    ) -> Result<RoundStatus, RoundError> {
        let player_move = if self.can_player_move() {
            self.show_table(player, console);
            self.player_state = TurnState::Acting;

            let mv = player.take_turn(&mut self.deck, console)?;
            let busted = player.has_busted();
            self.player_state = TurnState::after(mv, busted);
            if busted {
                console.display(&format!("Bust! {}", player.hand().total()));
                return Ok(self.finish_alternating());
            }
            mv
        } else {
            Move::Stand
        };

        // The dealer is asked again on every step, so it stays Acting until
        // the round ends.
        self.dealer_state = TurnState::Acting;
        let dealer_move = self.dealer.take_turn(&mut self.deck, console)?;
        if self.dealer.has_busted() || (player_move.is_final() && dealer_move == Move::Stand) {
            self.dealer_state = TurnState::Done;
            return Ok(self.finish_alternating());
        }
        Ok(RoundStatus::Continue)
    }

    fn finish_alternating(&mut self) -> RoundStatus {
        self.phase = RoundPhase::Reveal;
        RoundStatus::Over
    }
}
