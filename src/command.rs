//! Recognizing game intents in free-form chat text.

/// The word length used when `wordle start` gives none.
pub const DEFAULT_LENGTH: usize = 5;

/// A recognized game intent.
///
/// [`parse()`](Command::parse) maps the `wordle ...` command forms onto
/// the first three variants; any other non-empty message is treated as a
/// candidate guess, to be validated downstream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// Begin a new game with a secret of the given length.
    Start { length: usize },

    /// Abandon the current game.
    Stop,

    /// Ask for a hint.
    Hint,

    /// A candidate guess, exactly as the player typed it.
    Guess(&'a str),
}

impl<'a> Command<'a> {
    /// Parses one chat message into a [`Command`].
    ///
    /// Returns `None` for empty messages and for `wordle` commands with
    /// an unknown subcommand or a malformed length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordle_chat::Command;
    ///
    /// assert_eq!(Command::parse("wordle start 6"), Some(Command::Start { length: 6 }));
    /// assert_eq!(Command::parse("wordle start"), Some(Command::Start { length: 5 }));
    /// assert_eq!(Command::parse("Wordle Stop"), Some(Command::Stop));
    /// assert_eq!(Command::parse("crane"), Some(Command::Guess("crane")));
    /// assert_eq!(Command::parse("   "), None);
    /// ```
    pub fn parse(text: &'a str) -> Option<Command<'a>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut parts = trimmed.split_whitespace();
        let first = parts.next()?;
        if !first.eq_ignore_ascii_case("wordle") {
            return Some(Command::Guess(trimmed));
        }

        match parts.next() {
            Some(sub) if sub.eq_ignore_ascii_case("start") => {
                let length = match parts.next() {
                    Some(raw) => raw.parse().ok()?,
                    None => DEFAULT_LENGTH,
                };
                Some(Command::Start { length })
            }
            Some(sub) if sub.eq_ignore_ascii_case("stop") => Some(Command::Stop),
            Some(sub) if sub.eq_ignore_ascii_case("hint") => Some(Command::Hint),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn recognizes_start_with_and_without_length() {
        assert_eq!(
            Command::parse("wordle start 7"),
            Some(Command::Start { length: 7 })
        );
        assert_eq!(
            Command::parse("wordle start"),
            Some(Command::Start {
                length: DEFAULT_LENGTH
            })
        );
    }

    #[test]
    fn rejects_malformed_lengths() {
        assert_eq!(Command::parse("wordle start five"), None);
        assert_eq!(Command::parse("wordle start -3"), None);
    }

    #[test]
    fn recognizes_stop_and_hint_case_insensitively() {
        assert_eq!(Command::parse("WORDLE STOP"), Some(Command::Stop));
        assert_eq!(Command::parse("wordle hint"), Some(Command::Hint));
    }

    #[test]
    fn unknown_subcommands_are_not_guesses() {
        assert_eq!(Command::parse("wordle"), None);
        assert_eq!(Command::parse("wordle dance"), None);
    }

    #[test]
    fn anything_else_is_a_candidate_guess() {
        assert_eq!(Command::parse("  crane "), Some(Command::Guess("crane")));
        assert_eq!(Command::parse("not a word"), Some(Command::Guess("not a word")));
    }
}
