//! Error types for game operations.

use std::io;

use thiserror::Error;

/// Errors that can end a round early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The player cannot cover a bet or the adjustment would overdraw the bankroll.
    #[error("out of funds")]
    OutOfFunds,
    /// A card was drawn from an empty deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
    /// The input source closed while a choice was still required.
    #[error("input closed")]
    InputClosed,
    /// Reading input or writing output failed.
    #[error("console i/o failed: {0}")]
    Input(io::ErrorKind),
}

/// Errors raised by a [`Console`](crate::Console).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// No more input is available.
    #[error("input closed")]
    Closed,
    /// Underlying terminal i/o failed.
    #[error("console i/o failed: {0}")]
    Io(io::ErrorKind),
}

impl From<ConsoleError> for RoundError {
    fn from(err: ConsoleError) -> Self {
        match err {
            ConsoleError::Closed => Self::InputClosed,
            ConsoleError::Io(kind) => Self::Input(kind),
        }
    }
}

impl From<io::Error> for ConsoleError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.kind())
    }
}

/// Errors that can occur while loading or saving a player record.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No record exists for the player.
    #[error("no saved player named {0:?}")]
    NotFound(String),
    /// The stored record could not be decoded.
    #[error("malformed player record: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Reading or writing the record failed.
    #[error("storage i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// Errors that stop the main menu.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The console failed or closed.
    #[error(transparent)]
    Console(#[from] ConsoleError),
    /// A round failed in a way the menu cannot recover from.
    #[error("round aborted: {0}")]
    Round(RoundError),
    /// A player record could not be written back.
    #[error("failed to save player: {0}")]
    Save(#[source] StorageError),
}

impl From<RoundError> for MenuError {
    fn from(err: RoundError) -> Self {
        match err {
            RoundError::InputClosed => Self::Console(ConsoleError::Closed),
            RoundError::Input(kind) => Self::Console(ConsoleError::Io(kind)),
            other => Self::Round(other),
        }
    }
}
