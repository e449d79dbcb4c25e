//! Word sources for choosing secrets.

use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};

/// A small built-in vocabulary so the crate is playable without any
/// external word file. Lengths range from three to seven letters.
const DEFAULT_WORDS: &[&str] = &[
    "ace", "arc", "bat", "cat", "dog", "ear", "fog", "gem", "hat", "ice", "jam", "key", "log",
    "map", "net", "oak", "pen", "rat", "sun", "toy", "urn", "van", "wax", "yak", "zip", "acid",
    "bend", "cave", "dusk", "echo", "fern", "gaze", "hint", "iris", "jolt", "kite", "lamp",
    "mint", "nest", "opal", "pond", "quiz", "rust", "sage", "tide", "vine", "wolf", "word",
    "yarn", "zinc", "amber", "brave", "crane", "dwell", "ember", "frost", "gleam", "hatch",
    "inlet", "jewel", "knack", "level", "lunar", "mirth", "noble", "ocean", "plume", "quilt",
    "raven", "robot", "shard", "spoon", "sober", "tills", "thorn", "umber", "vivid", "whale",
    "yield", "zesty", "anchor", "bishop", "canyon", "dampen", "effigy", "fathom", "glacier",
    "hamper", "insect", "jargon", "kernel", "lagoon", "mantle", "nectar", "orchid", "pigeon",
    "quiver", "ransom", "sombre", "tundra", "urchin", "velvet", "willow", "zephyr", "almanac",
    "bracket", "cascade", "dolphin", "epsilon", "fixture", "gondola", "harvest", "inquest",
    "javelin", "keyhole", "lantern", "monarch", "nutmeg", "obelisk", "pageant", "quartet",
    "redwood", "sawdust", "tempest", "upsilon", "vagrant", "walnut", "wizard",
];

/// A case-normalized vocabulary to pick secrets from.
///
/// Words are uppercased on the way in; entries with non-alphabetic
/// characters are dropped, and duplicates collapse. Built from any
/// iterator of strings or from whitespace-separated text (the usual
/// one-word-per-line file format works as-is).
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use wordle_chat::WordList;
///
/// let words = WordList::from_text("robot apple\nlevel crane x9y");
/// assert_eq!(words.len(), 4);
/// assert!(words.contains("ROBOT"));
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// assert!(words.pick(5, &mut rng).is_some());
/// assert_eq!(words.pick(9, &mut rng), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Builds a word list from an iterator of candidate words.
    pub fn from_iterator<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim();
                if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
                    Some(word.to_ascii_uppercase())
                } else {
                    None
                }
            })
            .unique()
            .collect();
        WordList { words }
    }

    /// Builds a word list from whitespace-separated text.
    pub fn from_text(text: &str) -> Self {
        Self::from_iterator(text.split_whitespace())
    }

    /// Picks a uniformly random word of exactly `length` letters, or
    /// `None` if the list holds no word of that length.
    ///
    /// The random source is injected so callers can pin outcomes in
    /// tests.
    pub fn pick(&self, length: usize, rng: &mut impl Rng) -> Option<&str> {
        let candidates: Vec<&String> = self
            .words
            .iter()
            .filter(|word| word.chars().count() == length)
            .collect();
        candidates.choose(rng).map(|word| word.as_str())
    }

    /// Returns true if `word` is in the list (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_ascii_uppercase();
        self.words.iter().any(|w| *w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordList {
    /// The built-in vocabulary.
    fn default() -> Self {
        Self::from_iterator(DEFAULT_WORDS)
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    #[test]
    fn normalizes_and_deduplicates() {
        let words = WordList::from_text("robot ROBOT Robot apple");
        assert_eq!(words.len(), 2);
        assert!(words.contains("robot"));
    }

    #[test]
    fn rejects_non_alphabetic_entries() {
        let words = WordList::from_text("robot r0bot ro-bot");
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn pick_respects_requested_length() {
        let words = WordList::from_text("cat robot apple anchor");
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..20 {
            let word = words.pick(5, &mut rng).unwrap();
            assert_eq!(word.chars().count(), 5);
        }
        assert_eq!(words.pick(4, &mut rng), None);
    }

    #[test]
    fn pick_is_deterministic_for_a_pinned_rng() {
        let words = WordList::default();
        let first = words.pick(5, &mut SmallRng::seed_from_u64(7));
        let second = words.pick(5, &mut SmallRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn default_list_covers_common_lengths() {
        let words = WordList::default();
        let mut rng = SmallRng::seed_from_u64(0);
        for length in 3..=7 {
            assert!(words.pick(length, &mut rng).is_some());
        }
    }
}
