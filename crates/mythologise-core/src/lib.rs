//! # Mythologise Core
//!
//! Pure primitives for deriving pseudonymous handles from stable account ids.
//!
//! This crate contains no I/O and no configuration. Given the same id, secret
//! and options it always produces the same handle.
//!
//! ## Key Types
//!
//! - [`DerivationOptions`] - Tag length, separator and word scheme
//! - [`TagChars`] - Validated tag length in `[2, 48]`
//! - [`HandleDigest`] - The HMAC-SHA256 output handles are read from
//! - [`HandleParts`] - Words and tag before joining
//!
//! ## Handle layout
//!
//! ```text
//! spéir-mhaorga-shárláidir-6jn3v2cd6xqq
//! noun  core    qualifier  tag
//! ```
//!
//! Adjectives after a feminine noun are lenited. See [`inflection`].

pub mod base32;
pub mod error;
pub mod handle;
pub mod inflection;
pub mod lexicon;

pub use error::{DerivationError, Result};
pub use handle::{
    compose, derive, derive_parts, derive_with_denylist, DerivationOptions, HandleDigest,
    HandleParts, HandleScheme, TagChars, DEFAULT_TAG_CHARS, DENYLIST, LEGACY_TAG_CHARS,
    MAX_ATTEMPTS, MAX_TAG_CHARS, MIN_TAG_CHARS,
};
pub use inflection::{lenite, starts_with_vowel};
pub use lexicon::{
    adjective_root, eligible_adjective_pairs, fingerprint, lexicon, AdjectiveEntry,
    AdjectiveRole, Gender, Lexicon, LexiconFingerprint, NounCategory, NounEntry, ADJECTIVES,
    NOUNS,
};
