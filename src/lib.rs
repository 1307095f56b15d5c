//! A single-table blackjack engine for the terminal.
//!
//! The crate provides a [`Game`] type that runs a round from ante to
//! settlement, a [`Player`] whose bankroll and statistics persist through a
//! [`Storage`] backend, and a rule-bound [`Dealer`]. Player input goes
//! through the [`Console`] trait so rounds can be scripted.
//!
//! # Example
//!
//! ```
//! use bjtable::{Game, Outcome, Player, ScriptedConsole, TableOptions};
//!
//! let mut game = Game::new(TableOptions::default(), 42);
//! let mut player = Player::new("Ada", 100);
//! let mut console = ScriptedConsole::new(["10", "stand"]);
//!
//! let settlement = game.new_hand(&mut player, &mut console).unwrap();
//! match settlement.outcome {
//!     Outcome::Victory => assert_eq!(player.bankroll(), 110),
//!     Outcome::Defeat => assert_eq!(player.bankroll(), 90),
//!     Outcome::Push => assert_eq!(player.bankroll(), 100),
//! }
//! ```

extern crate alloc;

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod menu;
pub mod options;
pub mod participant;
pub mod record;
pub mod result;
pub mod storage;

// Re-export main types
pub use card::{Card, DECK_SIZE, FACE_DOWN_MASK, Suit, Value};
pub use console::{Console, ScriptedConsole, Terminal, prompt_until};
pub use deck::Deck;
pub use error::{ConsoleError, MenuError, RoundError, StorageError};
pub use game::{Game, RoundPhase, RoundStatus};
pub use hand::{BLACKJACK, Hand};
pub use options::TableOptions;
pub use participant::{Dealer, Move, Participant, Player, TurnState};
pub use record::PlayerRecord;
pub use result::{Outcome, Settlement, evaluate};
pub use storage::{FileStorage, MemoryStorage, Storage};
