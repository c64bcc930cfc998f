//! Initial-consonant mutation (lenition) for adjectives after feminine nouns.
//!
//! This is one narrow rule, not a grammar engine: an `h` is inserted after
//! the first letter of the first word when that letter can lenite.

/// Consonants that take lenition.
pub const LENITABLE: [char; 9] = ['b', 'c', 'd', 'f', 'g', 'm', 'p', 's', 't'];

/// Letter inserted by the mutation.
pub const MUTATION_LETTER: char = 'h';

const VOWELS: [char; 10] = ['a', 'á', 'e', 'é', 'i', 'í', 'o', 'ó', 'u', 'ú'];

/// `s` followed by one of these never lenites.
const S_CLUSTER_EXCEPTIONS: [char; 5] = ['c', 'f', 'm', 'p', 't'];

/// Returns true when the first non-space letter is a vowel (accented or not).
pub fn starts_with_vowel(word: &str) -> bool {
    word.trim()
        .chars()
        .next()
        .and_then(|c| c.to_lowercase().next())
        .is_some_and(|c| VOWELS.contains(&c))
}

/// Apply lenition to the first word of `word`.
///
/// The input is trimmed. When the rule does not apply the trimmed input is
/// returned unchanged; when it does, the words are rejoined with single
/// spaces.
pub fn lenite(word: &str) -> String {
    let trimmed = word.trim();
    let mut parts = trimmed.split_whitespace();
    let Some(first) = parts.next() else {
        return trimmed.to_string();
    };

    if !is_lenitable(first) {
        return trimmed.to_string();
    }

    let mut chars = first.chars();
    let mut mutated = String::with_capacity(trimmed.len() + 1);
    if let Some(initial) = chars.next() {
        mutated.push(initial);
    }
    mutated.push(MUTATION_LETTER);
    mutated.extend(chars);

    for rest in parts {
        mutated.push(' ');
        mutated.push_str(rest);
    }
    mutated
}

fn is_lenitable(word: &str) -> bool {
    if starts_with_vowel(word) {
        return false;
    }
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let second = chars.next();

    if second == Some(MUTATION_LETTER) {
        return false;
    }
    if first == 's' && second.is_some_and(|c| S_CLUSTER_EXCEPTIONS.contains(&c)) {
        return false;
    }
    LENITABLE.contains(&first)
}
