//! Partial-reveal hints derived from a session's guess history.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The placeholder emitted for positions a hint does not reveal.
pub const BLANK: char = '_';

/// How hints are derived for a game.
///
/// The three styles cover the range found in the wild: no hints at all,
/// the classic "first letter" giveaway, and a cumulative reveal based on
/// which letters the player has already typed.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum HintStyle {
    /// Hints are turned off; derivation always yields `None`.
    Disabled,

    /// Always reveal the first letter of the secret, regardless of
    /// history.
    FirstLetter,

    /// Reveal the secret positions whose letters the player has already
    /// discovered through past guesses.
    Discovered,
}

impl Default for HintStyle {
    fn default() -> Self {
        HintStyle::Discovered
    }
}

impl HintStyle {
    /// Derives a masked reveal of `secret` for this style, or `None` when
    /// there is nothing to reveal. Read-only: neither input is mutated.
    pub fn derive(self, secret: &str, discovered: &HashMap<char, usize>) -> Option<String> {
        match self {
            HintStyle::Disabled => None,
            HintStyle::FirstLetter => first_letter(secret),
            HintStyle::Discovered => derive_hint(secret, discovered),
        }
    }
}

fn first_letter(secret: &str) -> Option<String> {
    let mut chars = secret.chars();
    let first = chars.next()?;
    let mut masked = String::new();
    masked.push(first.to_ascii_uppercase());
    for _ in chars {
        masked.push(BLANK);
    }
    Some(masked)
}

/// Reveals the secret positions covered by `discovered`, blanking the
/// rest.
///
/// The scan walks the secret left to right, consuming one discovered copy
/// per revealed position, so earliest occurrences win and a repeated
/// letter is never revealed more times than the history supports. The
/// discovered counts themselves are only loosely bounded (a guess with
/// two `L`s raises the count to two whether or not the secret holds two),
/// but consuming them against actual secret positions caps the reveal at
/// the secret's true frequency.
///
/// Returns `None` when no discovered letter occurs in the secret.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use wordle_chat::hint::derive_hint;
///
/// let discovered = HashMap::from([('L', 1), ('Z', 4)]);
/// assert_eq!(derive_hint("LEVEL", &discovered), Some("L____".into()));
/// assert_eq!(derive_hint("ROBOT", &discovered), None);
/// ```
pub fn derive_hint(secret: &str, discovered: &HashMap<char, usize>) -> Option<String> {
    let mut available = discovered.clone();
    let mut masked = String::new();
    let mut revealed = false;

    for c in secret.chars().map(|c| c.to_ascii_uppercase()) {
        match available.get_mut(&c) {
            Some(n) if *n > 0 => {
                *n -= 1;
                masked.push(c);
                revealed = true;
            }
            _ => masked.push(BLANK),
        }
    }

    revealed.then(|| masked)
}
