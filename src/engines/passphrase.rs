//! Passphrase engine: word sequences from a built-in list.

use crate::rand::{RandomSource, sampler};

use super::charset::{DIGITS, SYMBOLS};
use super::{GeneratedSecret, SecretKind};

/// Built-in word list. Fixed at build time; all lowercase ASCII.
pub const WORD_LIST: &[&str] = &[
    "apple", "banana", "orange", "grape", "lemon", "lime", "melon", "peach",
    "pear", "plum", "berry", "cherry", "kiwi", "mango", "papaya", "cloud",
    "forest", "flower", "mountain", "river", "ocean", "stream", "meadow",
    "valley", "canyon", "desert", "island", "jungle", "aurora", "breeze",
    "cascade", "comet", "cosmos", "crystal", "delta", "dune", "echo", "ember",
    "galaxy", "glacier", "haven", "horizon", "lagoon", "lumen", "mirage",
    "nebula", "nova", "oasis", "orbit", "origin", "pulse", "quasar", "quest",
    "radiant", "ripple", "serene", "shadow", "solar", "spirit", "summit",
    "synergy", "tempest", "tidal", "tundra", "umbra", "union", "unity",
    "valor", "vector", "vertex", "vibrant", "vista", "vortex", "wave", "willow",
    "winter", "wonder", "yellow", "zodiac", "zone", "zephyr", "zenith",
    "azure", "blue", "green", "indigo", "ivory", "jade", "khaki", "lilac",
];

/// Passphrase generation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphraseConfig {
    /// Number of words; wraps around the word list when larger than it.
    pub word_count: usize,
    /// Joined between words; may be empty.
    pub separator: String,
    /// Uppercase the first character of each word.
    pub capitalize: bool,
    /// Append one random digit.
    pub append_number: bool,
    /// Append one random symbol.
    pub append_symbol: bool,
}

impl Default for PassphraseConfig {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".into(),
            capitalize: true,
            append_number: true,
            append_symbol: false,
        }
    }
}

/// Generate a passphrase. `word_count == 0` yields an empty phrase.
pub fn generate<R: RandomSource + ?Sized>(
    rng: &mut R,
    config: &PassphraseConfig,
) -> GeneratedSecret {
    let mut shuffled: Vec<&str> = WORD_LIST.to_vec();
    sampler::shuffle(rng, &mut shuffled);

    let mut words: Vec<String> = Vec::with_capacity(config.word_count);
    for i in 0..config.word_count {
        let word = shuffled[i % shuffled.len()];
        if config.capitalize {
            let mut w = String::with_capacity(word.len());
            w.push(word.as_bytes()[0].to_ascii_uppercase() as char);
            w.push_str(&word[1..]);
            words.push(w);
        } else {
            words.push(word.to_string());
        }
    }

    let mut phrase = words.join(&config.separator);

    if config.append_number {
        phrase.push(sampler::choose(rng, DIGITS) as char);
    }
    if config.append_symbol {
        phrase.push(sampler::choose(rng, SYMBOLS) as char);
    }

    GeneratedSecret::new(phrase, SecretKind::Passphrase, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::SystemSource;

    fn plain(word_count: usize) -> PassphraseConfig {
        PassphraseConfig {
            word_count,
            separator: "-".into(),
            capitalize: true,
            append_number: false,
            append_symbol: false,
        }
    }

    #[test]
    fn word_list_is_lowercase_ascii() {
        for word in WORD_LIST {
            assert!(!word.is_empty());
            assert!(word.bytes().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn three_capitalized_words_joined_by_dash() {
        let mut rng = SystemSource;
        let secret = generate(&mut rng, &plain(3));
        let words: Vec<&str> = secret.value.split('-').collect();
        assert_eq!(words.len(), 3);
        for word in words {
            let first = word.as_bytes()[0];
            assert!(first.is_ascii_uppercase());
            assert!(WORD_LIST.contains(&word.to_ascii_lowercase().as_str()));
        }
    }

    #[test]
    fn word_count_beyond_list_wraps_around() {
        let mut rng = SystemSource;
        let count = WORD_LIST.len() + 5;
        let secret = generate(&mut rng, &plain(count));
        assert_eq!(secret.value.split('-').count(), count);
    }

    #[test]
    fn zero_words_is_empty() {
        let mut rng = SystemSource;
        assert!(generate(&mut rng, &plain(0)).value.is_empty());
    }

    #[test]
    fn empty_separator_concatenates() {
        let mut rng = SystemSource;
        let config = PassphraseConfig {
            word_count: 2,
            separator: String::new(),
            capitalize: false,
            append_number: false,
            append_symbol: false,
        };
        let secret = generate(&mut rng, &config);
        assert!(!secret.value.contains('-'));
        assert!(secret.value.bytes().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn append_number_adds_one_trailing_digit() {
        let mut rng = SystemSource;
        let config = PassphraseConfig {
            append_number: true,
            append_symbol: false,
            ..plain(3)
        };
        let secret = generate(&mut rng, &config);
        assert!(secret.value.as_bytes()[secret.value.len() - 1].is_ascii_digit());
    }

    #[test]
    fn append_symbol_adds_one_trailing_symbol() {
        let mut rng = SystemSource;
        let config = PassphraseConfig {
            append_number: false,
            append_symbol: true,
            ..plain(3)
        };
        let secret = generate(&mut rng, &config);
        let last = secret.value.as_bytes()[secret.value.len() - 1];
        assert!(crate::engines::charset::SYMBOLS.contains(&last));
    }

    #[test]
    fn number_precedes_symbol_when_both_set() {
        let mut rng = SystemSource;
        let config = PassphraseConfig {
            append_number: true,
            append_symbol: true,
            ..plain(2)
        };
        let secret = generate(&mut rng, &config);
        let bytes = secret.value.as_bytes();
        assert!(bytes[bytes.len() - 2].is_ascii_digit());
        assert!(crate::engines::charset::SYMBOLS.contains(&bytes[bytes.len() - 1]));
    }

    #[test]
    fn no_duplicate_words_within_list_bounds() {
        // Selection walks a shuffled copy, so a phrase shorter than the list
        // never repeats a word.
        let mut rng = SystemSource;
        for _ in 0..10 {
            let secret = generate(&mut rng, &plain(8));
            let mut words: Vec<&str> = secret.value.split('-').collect();
            words.sort_unstable();
            let before = words.len();
            words.dedup();
            assert_eq!(words.len(), before);
        }
    }
}
