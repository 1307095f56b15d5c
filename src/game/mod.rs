//! Round controller.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::console::Console;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::options::TableOptions;
use crate::participant::{Dealer, Player, TurnState};
use crate::result::Settlement;

mod actions;
mod bet;
mod showdown;
pub mod state;

pub use state::{RoundPhase, RoundStatus};

/// A single blackjack table: one player against the dealer.
///
/// The game owns the deck and the dealer. The player is passed in for each
/// round so the caller can load and save it around play.
pub struct Game {
    /// Table options.
    options: TableOptions,
    /// Cards for the current round.
    deck: Deck,
    /// The house.
    dealer: Dealer,
    /// Current round phase.
    phase: RoundPhase,
    /// Player's turn state for the current round.
    player_state: TurnState,
    /// Dealer's turn state for the current round.
    dealer_state: TurnState,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, TableOptions};
    ///
    /// let game = Game::new(TableOptions::default(), 42);
    /// assert!(game.deck().is_empty());
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self {
            options,
            deck: Deck::default(),
            dealer: Dealer::with_stands_on(options.dealer_stands_on),
            phase: RoundPhase::Deal,
            player_state: TurnState::Waiting,
            dealer_state: TurnState::Waiting,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Plays a full round on a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::OutOfFunds`] if the player cannot ante, or an
    /// error if the deck runs out or the console fails.
    pub fn new_hand<C: Console + ?Sized>(
        &mut self,
        player: &mut Player,
        console: &mut C,
    ) -> Result<Settlement, RoundError> {
        self.deck = Deck::shuffled(&mut self.rng);
        debug!(cards = self.deck.len(), "shuffled new deck");
        self.play_hand(player, console)
    }

    /// Plays a full round on the current deck: deal, alternate turns until
    /// the round is over, reveal, evaluate, and settle.
    ///
    /// # Errors
    ///
    /// Same as [`Game::new_hand`].
    pub fn play_hand<C: Console + ?Sized>(
        &mut self,
        player: &mut Player,
        console: &mut C,
    ) -> Result<Settlement, RoundError> {
        self.deal(player, console)?;

        while self.play_round(player, console)? == RoundStatus::Continue {}

        self.reveal(console);
        let outcome = self.evaluate(player);
        self.settle(player, outcome)
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Replaces the deck used by the next deal.
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Returns the current deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the player's turn state.
    #[must_use]
    pub const fn player_state(&self) -> TurnState {
        self.player_state
    }

    /// Returns the dealer's turn state.
    ///
    /// The dealer stays `Acting` while the round alternates, including after
    /// a stand, and becomes `Done` only when its move ends the round.
    #[must_use]
    pub const fn dealer_state(&self) -> TurnState {
        self.dealer_state
    }

    /// Returns whether the player will be asked for another move.
    #[must_use]
    pub const fn can_player_move(&self) -> bool {
        !matches!(self.player_state, TurnState::Done)
    }
}
