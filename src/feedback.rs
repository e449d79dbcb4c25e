//! Letter-by-letter grading of guesses against a secret.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A grade that indicates the correctness of one letter in a guess.
///
/// [`evaluate()`] returns one of these for every letter of the guess, in
/// order. `Correct` means that the letter is in the correct position.
/// `Almost` means that the letter is in the word, but not in that position.
/// `Incorrect` means that the word does not contain that letter (or that
/// every copy of it has already been accounted for).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Grade {
    /// The letter guessed is in the correct position.
    Correct,

    /// The letter guessed is in the word, but not there.
    Almost,

    /// The word does not contain that letter.
    Incorrect,
}

/// Grades `guess` against `secret`, one [`Grade`] per letter.
///
/// Both words are treated as case-insensitive letter sequences and must
/// have the same length; upholding the length precondition is the caller's
/// job ([`GameSession`](crate::session::GameSession) checks it before ever
/// calling in here).
///
/// In the case that a guess contains two or more of the same letter, the
/// following is true:
///
/// 1. All of those letters in the correct position grade [`Grade::Correct`].
/// 2. The result never contains more copies of [`Grade::Correct`] and
///    [`Grade::Almost`] together than the copies of that letter in the
///    secret. For instance, if the secret is `SOBER` and you guess `SPOOL`,
///    the first `O` grades `Almost` and the second `Incorrect`.
///
/// # Examples
///
/// ```rust
/// use wordle_chat::feedback::{evaluate, Grade::*};
///
/// assert_eq!(evaluate("ROBOT", "BOOKS"), [Almost, Correct, Almost, Incorrect, Incorrect]);
/// assert_eq!(evaluate("APPLE", "apple"), [Correct; 5]);
/// ```
pub fn evaluate(secret: &str, guess: &str) -> Vec<Grade> {
    debug_assert_eq!(secret.chars().count(), guess.chars().count());

    let secret: Vec<char> = secret.chars().map(|c| c.to_ascii_uppercase()).collect();
    let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();

    let mut grades = vec![Grade::Incorrect; secret.len()];

    // First pass: exact positions win outright. Secret letters that were
    // not consumed by an exact match stay available for `Almost` grades.
    let mut remaining: HashMap<char, usize> = HashMap::new();
    for (i, (&g, &s)) in guess.iter().zip(secret.iter()).enumerate() {
        if g == s {
            grades[i] = Grade::Correct;
        } else {
            *remaining.entry(s).or_insert(0) += 1;
        }
    }

    // Second pass: each `Almost` consumes one remaining copy, so repeated
    // guess letters can never outnumber the secret's true frequency.
    for (i, &g) in guess.iter().enumerate() {
        if grades[i] == Grade::Correct {
            continue;
        }
        match remaining.get_mut(&g) {
            Some(n) if *n > 0 => {
                grades[i] = Grade::Almost;
                *n -= 1;
            }
            _ => {}
        }
    }

    grades
}
