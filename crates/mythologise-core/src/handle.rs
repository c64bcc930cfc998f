//! Keyed, deterministic handle derivation.
//!
//! `digest = HMAC-SHA256(key = secret, message = stable_id)`. Words are
//! picked from the lexicon by summing a fixed base byte with a per-attempt
//! "lane" byte, and the tag is Base32 over a window starting at byte 2.
//!
//! **CRITICAL**: the byte offsets in [`offsets`], the lexicon order, the
//! tag window and the Base32 alphabet together form a wire format. Changing
//! any of them renames existing users. Treat a change as a migration.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use tracing::{debug, warn};

use crate::base32;
use crate::error::{DerivationError, Result};
use crate::lexicon::{self, adjective_root, ADJECTIVES, LEGACY_ADJECTIVE_COUNT, LEGACY_NOUN_COUNT};

type HmacSha256 = Hmac<Sha256>;

/// Size of the HMAC-SHA256 output.
pub const DIGEST_BYTES: usize = 32;

/// First digest byte consumed by the tag.
pub const TAG_SOURCE_OFFSET: usize = 2;

/// Shortest tag accepted.
pub const MIN_TAG_CHARS: u32 = 2;

/// Longest tag the digest can supply at 5 bits per character.
pub const MAX_TAG_CHARS: u32 = (((DIGEST_BYTES - TAG_SOURCE_OFFSET) * 8) / base32::BITS_PER_CHAR) as u32;

/// Default tag length for the paired scheme.
pub const DEFAULT_TAG_CHARS: u32 = 12;

/// Tag length the legacy scheme was published with.
pub const LEGACY_TAG_CHARS: u32 = 4;

/// Bounded number of denylist rerolls.
pub const MAX_ATTEMPTS: usize = 8;

/// Lowercase substrings that must never appear in a handle.
pub const DENYLIST: &[&str] = &[];

/// Digest byte offsets for word selection. FROZEN.
///
/// Each pick is `(digest[BASE] + digest[LANE + attempt]) mod len`. The lanes
/// are disjoint so the three picks do not correlate.
pub mod offsets {
    pub const NOUN_BASE: usize = 0;
    pub const NOUN_LANE: usize = 10;
    pub const CORE_BASE: usize = 1;
    pub const CORE_LANE: usize = 18;
    pub const QUALIFIER_BASE: usize = 2;
    pub const QUALIFIER_LANE: usize = 26;
}

/// Number of characters in a handle's tag, validated to `[2, 48]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u32")]
pub struct TagChars(u32);

impl TagChars {
    pub const DEFAULT: Self = Self(DEFAULT_TAG_CHARS);
    pub const LEGACY: Self = Self(LEGACY_TAG_CHARS);
    pub const MIN: Self = Self(MIN_TAG_CHARS);
    pub const MAX: Self = Self(MAX_TAG_CHARS);

    /// Validate a whole number. Fails with a range violation outside `[2, 48]`.
    pub fn new(value: i64) -> Result<Self> {
        if value < i64::from(MIN_TAG_CHARS) || value > i64::from(MAX_TAG_CHARS) {
            return Err(DerivationError::RangeViolation {
                min: MIN_TAG_CHARS,
                max: MAX_TAG_CHARS,
                got: value,
            });
        }
        Ok(Self(value as u32))
    }

    /// Validate an untyped number.
    ///
    /// NaN, infinities and fractional values are type violations; whole
    /// numbers are then range checked.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(DerivationError::TypeViolation(format!(
                "tag_chars must be a whole number, got {value}"
            )));
        }
        Self::new(value as i64)
    }

    /// Get the number of characters.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Digest bytes the tag window needs (never fewer than 2).
    pub const fn source_bytes(self) -> usize {
        let needed = (self.0 as usize * base32::BITS_PER_CHAR).div_ceil(8);
        if needed < 2 {
            2
        } else {
            needed
        }
    }
}

impl Default for TagChars {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for TagChars {
    type Error = DerivationError;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_f64(value)
    }
}

impl From<TagChars> for u32 {
    fn from(value: TagChars) -> Self {
        value.0
    }
}

impl fmt::Display for TagChars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which word layout a handle uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleScheme {
    /// `noun-core-qualifier-tag` over the full lexicon.
    #[default]
    Paired,
    /// `noun-adjective-tag` over the legacy lexicon prefix.
    Legacy,
}

/// Options that shape a derived handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivationOptions {
    pub tag_chars: TagChars,
    pub separator: String,
    pub scheme: HandleScheme,
}

impl Default for DerivationOptions {
    fn default() -> Self {
        Self {
            tag_chars: TagChars::DEFAULT,
            separator: "-".to_string(),
            scheme: HandleScheme::Paired,
        }
    }
}

impl DerivationOptions {
    /// Options matching handles issued under the legacy scheme.
    pub fn legacy() -> Self {
        Self {
            tag_chars: TagChars::LEGACY,
            separator: "-".to_string(),
            scheme: HandleScheme::Legacy,
        }
    }

    /// Set the tag length.
    pub fn with_tag_chars(mut self, tag_chars: TagChars) -> Self {
        self.tag_chars = tag_chars;
        self
    }

    /// Set the string placed between words and before the tag.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the word layout.
    pub fn with_scheme(mut self, scheme: HandleScheme) -> Self {
        self.scheme = scheme;
        self
    }
}

/// The 32-byte HMAC output a handle is read from.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HandleDigest([u8; DIGEST_BYTES]);

impl HandleDigest {
    /// Compute `HMAC-SHA256(secret, stable_id)`.
    pub fn compute(stable_id: &str, secret: &[u8]) -> Self {
        let mut mac = match HmacSha256::new_from_slice(secret) {
            Ok(mac) => mac,
            Err(_) => unreachable!("HMAC accepts keys of any length"),
        };
        mac.update(stable_id.as_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_BYTES]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    /// Byte at `index`, or `0` past the end of the digest.
    ///
    /// Late attempts read qualifier lanes beyond byte 31; those read as zero.
    pub fn byte_at(&self, index: usize) -> u8 {
        self.0.get(index).copied().unwrap_or(0)
    }

    fn lane_index(&self, base: usize, lane: usize, len: usize) -> usize {
        (usize::from(self.byte_at(base)) + usize::from(self.byte_at(lane))) % len
    }

    /// The tag for this digest: Base32 over the tag window, truncated.
    pub fn tag(&self, tag_chars: TagChars) -> String {
        let end = TAG_SOURCE_OFFSET + tag_chars.source_bytes();
        let mut tag = base32::encode(&self.0[TAG_SOURCE_OFFSET..end]);
        tag.truncate(tag_chars.get() as usize);
        tag
    }
}

impl fmt::Debug for HandleDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandleDigest({}...)", &hex::encode(self.0)[..8])
    }
}

/// The pieces of a handle before joining and lowercasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleParts {
    /// Noun followed by its (inflected) adjectives.
    pub words: Vec<String>,
    /// The chosen noun and adjective lemmas, before inflection.
    pub lemmas: Vec<&'static str>,
    /// Uppercase Base32 tag.
    pub tag: String,
    /// Attempt that produced these parts.
    pub attempt: usize,
}

impl HandleParts {
    /// Join words and tag with `separator` and lowercase the result.
    pub fn render(&self, separator: &str) -> String {
        let mut out = String::new();
        for word in &self.words {
            out.push_str(word);
            out.push_str(separator);
        }
        out.push_str(&self.tag);
        out.to_lowercase()
    }
}

/// Derive a handle using the built-in denylist.
pub fn derive(stable_id: &str, secret: &[u8], options: &DerivationOptions) -> String {
    derive_with_denylist(stable_id, secret, options, DENYLIST)
}

/// Derive a handle, rerolling away from any `denylist` substring.
pub fn derive_with_denylist(
    stable_id: &str,
    secret: &[u8],
    options: &DerivationOptions,
    denylist: &[&str],
) -> String {
    derive_parts(stable_id, secret, options, denylist).render(&options.separator)
}

/// Derive the parts of a handle.
///
/// Up to [`MAX_ATTEMPTS`] layouts are tried in order. If every one contains
/// a denylisted substring, attempt 0 is returned unconditionally.
pub fn derive_parts(
    stable_id: &str,
    secret: &[u8],
    options: &DerivationOptions,
    denylist: &[&str],
) -> HandleParts {
    let digest = HandleDigest::compute(stable_id, secret);

    for attempt in 0..MAX_ATTEMPTS {
        let parts = compose(&digest, options, attempt);
        let rendered = parts.render(&options.separator);
        if !is_denied(&rendered, denylist) {
            return parts;
        }
        debug!(attempt, "handle contains a denylisted substring, rerolling");
    }

    warn!(
        attempts = MAX_ATTEMPTS,
        "every handle attempt was denylisted, using attempt 0"
    );
    compose(&digest, options, 0)
}

fn is_denied(handle: &str, denylist: &[&str]) -> bool {
    denylist
        .iter()
        .any(|bad| !bad.is_empty() && handle.contains(bad))
}

/// Build the parts for one attempt.
pub fn compose(digest: &HandleDigest, options: &DerivationOptions, attempt: usize) -> HandleParts {
    let (lemmas, words) = match options.scheme {
        HandleScheme::Paired => paired_words(digest, attempt),
        HandleScheme::Legacy => legacy_words(digest, attempt),
    };
    HandleParts {
        words,
        lemmas,
        tag: digest.tag(options.tag_chars),
        attempt,
    }
}

fn paired_words(digest: &HandleDigest, attempt: usize) -> (Vec<&'static str>, Vec<String>) {
    let lex = lexicon::lexicon();

    let noun = &lex.nouns[digest.lane_index(
        offsets::NOUN_BASE,
        offsets::NOUN_LANE + attempt,
        lex.nouns.len(),
    )];
    let core = lex.core[digest.lane_index(
        offsets::CORE_BASE,
        offsets::CORE_LANE + attempt,
        lex.core.len(),
    )];

    let mut qualifier_index = digest.lane_index(
        offsets::QUALIFIER_BASE,
        offsets::QUALIFIER_LANE + attempt,
        lex.qualifiers.len(),
    );
    if adjective_root(lex.qualifiers[qualifier_index].lemma) == adjective_root(core.lemma) {
        qualifier_index = (qualifier_index + 1) % lex.qualifiers.len();
    }
    let qualifier = lex.qualifiers[qualifier_index];

    let words = vec![
        noun.word.to_string(),
        core.inflect_for(noun.gender),
        qualifier.inflect_for(noun.gender),
    ];
    (vec![noun.word, core.lemma, qualifier.lemma], words)
}

fn legacy_words(digest: &HandleDigest, attempt: usize) -> (Vec<&'static str>, Vec<String>) {
    let nouns = &lexicon::NOUNS[..LEGACY_NOUN_COUNT];
    let adjectives = &ADJECTIVES[..LEGACY_ADJECTIVE_COUNT];

    let noun = &nouns[digest.lane_index(
        offsets::NOUN_BASE,
        offsets::NOUN_LANE + attempt,
        nouns.len(),
    )];
    let adjective = &adjectives[digest.lane_index(
        offsets::CORE_BASE,
        offsets::CORE_LANE + attempt,
        adjectives.len(),
    )];

    let words = vec![noun.word.to_string(), adjective.inflect_for(noun.gender)];
    (vec![noun.word, adjective.lemma], words)
}
