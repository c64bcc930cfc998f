//! Birthday-bound collision estimates for the handle space.

use mythologise_core::base32;
use mythologise_core::handle::{HandleScheme, MAX_TAG_CHARS, MIN_TAG_CHARS};
use mythologise_core::lexicon::{self, LEGACY_ADJECTIVE_COUNT, LEGACY_NOUN_COUNT};
use serde::Serialize;

/// Symbols per tag character.
pub const TAG_ALPHABET_SIZE: f64 = base32::ALPHABET.len() as f64;

/// Word-level counts that, with the tag, size the handle space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconCounts {
    pub nouns: u64,
    /// Distinct adjective choices a handle can show (pairs for the paired scheme).
    pub adjectives: u64,
}

impl LexiconCounts {
    pub const fn new(nouns: u64, adjectives: u64) -> Self {
        Self { nouns, adjectives }
    }

    /// Counts for the built-in lexicon under `scheme`.
    pub fn for_scheme(scheme: HandleScheme) -> Self {
        match scheme {
            HandleScheme::Paired => {
                let lex = lexicon::lexicon();
                Self::new(lex.nouns.len() as u64, lex.eligible_pairs())
            }
            HandleScheme::Legacy => {
                Self::new(LEGACY_NOUN_COUNT as u64, LEGACY_ADJECTIVE_COUNT as u64)
            }
        }
    }

    pub const fn combinations(&self) -> u64 {
        self.nouns * self.adjectives
    }
}

/// Expected colliding pairs and the chance of at least one collision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayStats {
    /// Expected number of colliding pairs (`lambda`).
    pub expected_colliding_pairs: f64,
    pub p_at_least_one: f64,
}

/// Number of distinct handles for `combinations` word layouts and a tag of
/// `tag_chars` characters.
pub fn space_size(combinations: u64, tag_chars: u32) -> f64 {
    combinations as f64 * TAG_ALPHABET_SIZE.powi(tag_chars as i32)
}

/// Bits of entropy in a space of `space` handles.
pub fn entropy_bits(space: f64) -> f64 {
    space.log2()
}

/// Birthday approximation for `users` draws from `space`.
///
/// `p = 1 - e^-lambda`, computed with `exp_m1` so tiny `lambda` does not
/// round to zero. Fewer than two users cannot collide.
pub fn birthday_stats(space: f64, users: u64) -> BirthdayStats {
    if users < 2 {
        return BirthdayStats {
            expected_colliding_pairs: 0.0,
            p_at_least_one: 0.0,
        };
    }
    let n = users as f64;
    let lambda = n * (n - 1.0) / (2.0 * space);
    BirthdayStats {
        expected_colliding_pairs: lambda,
        p_at_least_one: -(-lambda).exp_m1(),
    }
}

/// Smallest tag length in `[2, 48]` whose collision chance for `users` is at
/// most `target`, or `None` if no length in range gets there.
pub fn find_minimum_tag_chars(combinations: u64, users: u64, target: f64) -> Option<u32> {
    (MIN_TAG_CHARS..=MAX_TAG_CHARS).find(|&tag_chars| {
        birthday_stats(space_size(combinations, tag_chars), users).p_at_least_one <= target
    })
}
