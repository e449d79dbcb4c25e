//! The per-conversation game state machine.

use std::collections::HashMap;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    feedback::{self, Grade},
    hint::HintStyle,
    GameError, Result,
};

/// The grid handed to renderers: `max_attempts` rows of `word_length`
/// cells, each either empty or a graded letter.
pub type Grid = Vec<Vec<Option<(char, Grade)>>>;

/// The lifecycle state of a [`GameSession`].
///
/// `Won` and `Exhausted` are terminal; a session in either state accepts
/// no further guesses.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Status {
    /// The game accepts guesses.
    Active,

    /// The most recent guess matched the secret.
    Won,

    /// The attempt budget ran out without a win.
    Exhausted,
}

impl Status {
    /// Returns true for [`Won`](Status::Won) and
    /// [`Exhausted`](Status::Exhausted).
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Active)
    }
}

/// One scored guess: the word as submitted (uppercased) and its grades,
/// in letter order. Immutable once appended to the history.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct GuessRecord {
    word: String,
    grades: Vec<Grade>,
}

impl GuessRecord {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }
}

/// A single Wordle game: one secret, an append-only guess history, and
/// the cumulative letter bookkeeping that powers hints.
///
/// The attempt budget is `word length + 1`. Guesses with the wrong length
/// and guesses after the game has ended are rejected without consuming an
/// attempt or touching the history.
///
/// # Examples
///
/// ```rust
/// use wordle_chat::{GameSession, Status};
///
/// let mut session = GameSession::new("robot");
/// let (record, status) = session.submit_guess("BOOKS")?;
/// assert_eq!(record.word(), "BOOKS");
/// assert_eq!(status, Status::Active);
///
/// let (_, status) = session.submit_guess("robot")?;
/// assert_eq!(status, Status::Won);
/// #
/// # Ok::<_, wordle_chat::WordleError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    secret: String,
    max_attempts: usize,
    guesses: Vec<GuessRecord>,
    discovered: HashMap<char, usize>,
    status: Status,
}

impl GameSession {
    /// Creates a new session around `secret`, which is uppercased and
    /// fixed for the life of the session.
    pub fn new(secret: &str) -> Self {
        let secret = secret.to_ascii_uppercase();
        let max_attempts = secret.chars().count() + 1;
        GameSession {
            secret,
            max_attempts,
            guesses: Vec::new(),
            discovered: HashMap::new(),
            status: Status::Active,
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn word_length(&self) -> usize {
        self.secret.chars().count()
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// The number of guesses scored so far.
    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The guess history in chronological order.
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Per-letter count of how many copies of each letter the player has
    /// typed in a single guess, maximized over the whole history. Only
    /// hints consume this; see [`hint`](crate::hint).
    pub fn discovered(&self) -> &HashMap<char, usize> {
        &self.discovered
    }

    /// Returns true if `word` already appears in the history
    /// (case-insensitive).
    pub fn already_guessed(&self, word: &str) -> bool {
        let word = word.to_ascii_uppercase();
        self.guesses.iter().any(|record| record.word == word)
    }

    /// Scores `word` against the secret and appends it to the history.
    ///
    /// Returns the new record together with the session's resulting
    /// status: [`Status::Won`] if the guess matched the secret exactly,
    /// [`Status::Exhausted`] if this was the final attempt, and
    /// [`Status::Active`] otherwise.
    ///
    /// Errors with [`GameError::GameOver`] if the session is already
    /// terminal and [`GameError::WrongLength`] on a length mismatch; in
    /// both cases no attempt is consumed and the history is unchanged.
    pub fn submit_guess(&mut self, word: &str) -> Result<(&GuessRecord, Status)> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver.into());
        }

        let word = word.to_ascii_uppercase();
        let expected = self.word_length();
        let found = word.chars().count();
        if found != expected {
            return Err(GameError::WrongLength { expected, found }.into());
        }

        let grades = feedback::evaluate(&self.secret, &word);

        // A later guess can raise the discovered count for a letter but
        // never lower it.
        for (c, n) in word.chars().counts() {
            let seen = self.discovered.entry(c).or_insert(0);
            if n > *seen {
                *seen = n;
            }
        }

        let won = word == self.secret;
        self.guesses.push(GuessRecord { word, grades });

        self.status = if won {
            Status::Won
        } else if self.guesses.len() >= self.max_attempts {
            Status::Exhausted
        } else {
            Status::Active
        };

        Ok((self.guesses.last().unwrap(), self.status))
    }

    /// Derives a hint for this session per `style` without mutating any
    /// state. `None` means there is nothing to reveal yet.
    pub fn hint(&self, style: HintStyle) -> Option<String> {
        style.derive(&self.secret, &self.discovered)
    }

    /// Produces the full `max_attempts` × `word_length` grid for the
    /// renderer boundary, with unplayed cells left empty.
    pub fn grid(&self) -> Grid {
        let width = self.word_length();
        (0..self.max_attempts)
            .map(|row| match self.guesses.get(row) {
                Some(record) => record
                    .word
                    .chars()
                    .zip(record.grades.iter())
                    .map(|(c, &grade)| Some((c, grade)))
                    .collect(),
                None => vec![None; width],
            })
            .collect()
    }
}
