#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod feedback;
pub use feedback::Grade;

pub mod session;
pub use session::{GameSession, Status};

pub mod hint;
pub use hint::HintStyle;

pub mod registry;
pub use registry::SessionRegistry;

pub mod words;
pub use words::WordList;

pub mod command;
pub use command::Command;

pub mod bot;
pub use bot::WordleBot;

pub mod render;

pub type Result<T> = std::result::Result<T, WordleError>;

/// The errors that `wordle_chat` can produce.
#[derive(Debug, Error)]
pub enum WordleError {
    #[error("game encountered error")]
    Game {
        #[from]
        kind: GameError,
    },

    /// The word source has no entry of the requested length; no session
    /// was created.
    #[error("no word of length {0} is available")]
    NoWordAvailable(usize),

    /// A guess, hint, or stop arrived for a conversation with no active
    /// game.
    #[error("no game is active for this conversation")]
    NoSessionActive,
}

#[derive(Debug, Error)]
pub enum GameError {
    /// The guess does not have the same length as the secret. Rejected
    /// before an attempt is consumed.
    #[error("the guess has {found} letters, expected {expected}")]
    WrongLength { expected: usize, found: usize },

    /// The guess contains characters outside `A..Z`.
    #[error("the guess contains non-alphabetic characters")]
    NotAlphabetic,

    /// The guess was already submitted this session.
    #[error("the word \"{0}\" was already guessed this game")]
    AlreadyGuessed(String),

    /// The guess is not in the configured word list (strict mode only).
    #[error("the word \"{0}\" is not in the word list")]
    NotInWordlist(String),

    /// A guess reached a session already in a terminal state. With
    /// per-conversation serialization in place this indicates a caller
    /// bug, so it fails loudly instead of touching history.
    #[error("the game has already ended")]
    GameOver,
}
