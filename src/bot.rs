//! The message-handler glue: one struct owning the registry, the
//! vocabulary, and the hint policy.

use rand::Rng;

use crate::{
    hint::HintStyle,
    registry::SessionRegistry,
    session::{Grid, Status},
    words::WordList,
    GameError, Result, WordleError,
};

/// What a caller needs to announce a freshly started game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameInfo {
    pub word_length: usize,
    pub max_attempts: usize,
}

/// The outcome of a scored guess, ready for the renderer boundary.
///
/// `answer` is revealed only once the game has reached a terminal state.
#[derive(Clone, Debug)]
pub struct GuessReply {
    pub grid: Grid,
    pub status: Status,
    pub attempts: usize,
    pub max_attempts: usize,
    pub answer: Option<String>,
}

/// Drives Wordle games for any number of concurrent conversations.
///
/// All methods take `&self`; the registry's per-conversation locking
/// keeps each game's operations linearized while different conversations
/// proceed in parallel. Configuration uses consuming builder methods.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use wordle_chat::{bot::WordleBot, HintStyle, Status, WordList};
///
/// let bot = WordleBot::new(WordList::from_text("robot")).hint_style(HintStyle::FirstLetter);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
///
/// bot.start_game("chat", 5, &mut rng)?;
/// assert_eq!(bot.hint("chat")?, Some("R____".into()));
///
/// let reply = bot.guess("chat", "robot")?;
/// assert_eq!(reply.status, Status::Won);
/// assert_eq!(reply.answer.as_deref(), Some("ROBOT"));
/// #
/// # Ok::<_, wordle_chat::WordleError>(())
/// ```
#[derive(Debug, Default)]
pub struct WordleBot {
    registry: SessionRegistry,
    words: WordList,
    hint_style: HintStyle,
    strict: bool,
}

impl WordleBot {
    /// Creates a bot over `words` with cumulative-discovery hints and
    /// lenient guess validation.
    pub fn new(words: WordList) -> Self {
        WordleBot {
            registry: SessionRegistry::new(),
            words,
            hint_style: HintStyle::default(),
            strict: false,
        }
    }

    /// Sets the hint derivation style.
    pub fn hint_style(self, hint_style: HintStyle) -> Self {
        WordleBot { hint_style, ..self }
    }

    /// Requires every guess to appear in the word list.
    pub fn strict_words(self) -> Self {
        WordleBot {
            strict: true,
            ..self
        }
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Starts a game for `id` with a secret of `length` letters picked
    /// from the word list, replacing any game the conversation already
    /// had.
    ///
    /// Errors with [`WordleError::NoWordAvailable`] when the vocabulary
    /// has no word of that length; in that case no session is created
    /// and any existing game is left untouched.
    pub fn start_game(&self, id: &str, length: usize, rng: &mut impl Rng) -> Result<GameInfo> {
        let secret = self
            .words
            .pick(length, rng)
            .ok_or(WordleError::NoWordAvailable(length))?;
        log::debug!("starting game for {}, the answer is {}", id, secret);

        let session = self.registry.start(id, secret);
        let session = session.lock().unwrap();
        Ok(GameInfo {
            word_length: session.word_length(),
            max_attempts: session.max_attempts(),
        })
    }

    /// Validates and scores one guess for `id`.
    ///
    /// Pre-validation (alphabetic content, known word in strict mode,
    /// length, repeat detection) runs before the session is touched, so a
    /// rejected guess never consumes an attempt. On a terminal outcome
    /// the session is evicted from the registry before returning.
    pub fn guess(&self, id: &str, word: &str) -> Result<GuessReply> {
        let word = word.trim().to_ascii_uppercase();
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::NotAlphabetic.into());
        }
        if self.strict && !self.words.contains(&word) {
            return Err(GameError::NotInWordlist(word).into());
        }

        let session = self.registry.get(id).ok_or(WordleError::NoSessionActive)?;
        let mut session = session.lock().unwrap();

        let expected = session.word_length();
        let found = word.chars().count();
        if found != expected {
            return Err(GameError::WrongLength { expected, found }.into());
        }
        if session.already_guessed(&word) {
            return Err(GameError::AlreadyGuessed(word).into());
        }

        let (_, status) = session.submit_guess(&word)?;
        let reply = GuessReply {
            grid: session.grid(),
            status,
            attempts: session.attempts(),
            max_attempts: session.max_attempts(),
            answer: if status.is_terminal() {
                Some(session.secret().to_string())
            } else {
                None
            },
        };
        drop(session);

        if reply.status.is_terminal() {
            self.registry.stop(id);
        }
        Ok(reply)
    }

    /// Derives a hint for `id`'s game per the configured style. `None`
    /// means there is nothing to reveal yet. Never mutates game state.
    pub fn hint(&self, id: &str) -> Result<Option<String>> {
        let session = self.registry.get(id).ok_or(WordleError::NoSessionActive)?;
        let session = session.lock().unwrap();
        Ok(session.hint(self.hint_style))
    }

    /// Abandons `id`'s game, erroring if none is active.
    pub fn stop(&self, id: &str) -> Result<()> {
        if self.registry.stop(id) {
            Ok(())
        } else {
            Err(WordleError::NoSessionActive)
        }
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    fn bot(words: &str) -> WordleBot {
        WordleBot::new(WordList::from_text(words))
    }

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(99)
    }

    #[test]
    fn start_fails_without_a_word_of_that_length() {
        let bot = bot("robot");
        assert!(matches!(
            bot.start_game("chat", 9, &mut rng()),
            Err(WordleError::NoWordAvailable(9))
        ));
        assert!(bot.registry().is_empty());
    }

    #[test]
    fn start_replaces_the_previous_game() {
        let bot = bot("robot");
        bot.start_game("chat", 5, &mut rng()).unwrap();
        bot.guess("chat", "tills").unwrap();

        bot.start_game("chat", 5, &mut rng()).unwrap();
        let session = bot.registry().get("chat").unwrap();
        assert_eq!(session.lock().unwrap().attempts(), 0);
    }

    #[test]
    fn rejected_guesses_consume_no_attempt() {
        let bot = bot("robot");
        bot.start_game("chat", 5, &mut rng()).unwrap();

        assert!(matches!(
            bot.guess("chat", "c4t"),
            Err(WordleError::Game {
                kind: GameError::NotAlphabetic
            })
        ));
        assert!(matches!(
            bot.guess("chat", "cat"),
            Err(WordleError::Game {
                kind: GameError::WrongLength { .. }
            })
        ));

        bot.guess("chat", "tills").unwrap();
        assert!(matches!(
            bot.guess("chat", "tills"),
            Err(WordleError::Game {
                kind: GameError::AlreadyGuessed(_)
            })
        ));

        let session = bot.registry().get("chat").unwrap();
        assert_eq!(session.lock().unwrap().attempts(), 1);
    }

    #[test]
    fn strict_mode_requires_known_words() {
        let bot = bot("robot tills").strict_words();
        bot.start_game("chat", 5, &mut rng()).unwrap();

        assert!(matches!(
            bot.guess("chat", "zzzzz"),
            Err(WordleError::Game {
                kind: GameError::NotInWordlist(_)
            })
        ));
        assert!(bot.guess("chat", "tills").is_ok());
    }

    #[test]
    fn winning_evicts_the_session_and_reveals_the_answer() {
        let bot = bot("robot");
        bot.start_game("chat", 5, &mut rng()).unwrap();

        let reply = bot.guess("chat", "robot").unwrap();
        assert_eq!(reply.status, Status::Won);
        assert_eq!(reply.answer.as_deref(), Some("ROBOT"));
        assert_eq!(reply.attempts, 1);

        assert!(matches!(
            bot.guess("chat", "robot"),
            Err(WordleError::NoSessionActive)
        ));
    }

    #[test]
    fn exhausting_the_budget_evicts_the_session() {
        let bot = bot("robot");
        bot.start_game("chat", 5, &mut rng()).unwrap();

        let misses = ["tills", "crane", "spoon", "level", "amber", "frost"];
        for (i, miss) in misses.iter().enumerate() {
            let reply = bot.guess("chat", miss).unwrap();
            if i < 5 {
                assert_eq!(reply.status, Status::Active);
            } else {
                assert_eq!(reply.status, Status::Exhausted);
                assert_eq!(reply.answer.as_deref(), Some("ROBOT"));
            }
        }
        assert!(bot.registry().is_empty());
    }

    #[test]
    fn hints_accumulate_without_mutating_state() {
        let bot = bot("level");
        bot.start_game("chat", 5, &mut rng()).unwrap();

        assert_eq!(bot.hint("chat").unwrap(), None);

        bot.guess("chat", "plume").unwrap();
        let hint = bot.hint("chat").unwrap().unwrap();
        // One L typed so far: exactly one of LEVEL's two L's shows.
        assert_eq!(hint.matches('L').count(), 1);
        assert_eq!(bot.hint("chat").unwrap().unwrap(), hint);
    }

    #[test]
    fn operations_without_a_session_report_no_session() {
        let bot = bot("robot");
        assert!(matches!(
            bot.guess("chat", "robot"),
            Err(WordleError::NoSessionActive)
        ));
        assert!(matches!(bot.hint("chat"), Err(WordleError::NoSessionActive)));
        assert!(matches!(bot.stop("chat"), Err(WordleError::NoSessionActive)));
    }

    #[test]
    fn stop_removes_the_game() {
        let bot = bot("robot");
        bot.start_game("chat", 5, &mut rng()).unwrap();
        bot.stop("chat").unwrap();
        assert!(bot.registry().is_empty());
    }
}
