//! # Mythologise
//!
//! Pseudonymous, stable chat identities derived from account ids.
//!
//! An account id and a server-side secret produce a handle such as
//! `spéir::mhaorga::shárláidir::6jn3v2cd6xqq`. Its words become the display
//! name, its last segment the tag, and the tag seeds a deterministic avatar.
//! The account id never leaves the server.
//!
//! ## Usage
//!
//! ```rust
//! use mythologise::{IdentityConfig, Mythologiser};
//!
//! let m = Mythologiser::new(IdentityConfig::with_secret("fogr-unit-test-secret-v1"));
//! let identity = m.chat_identity("e9fdcc9a-e942-4620-b90b-e008a0eb1147");
//! assert_eq!(identity.display_name, "Spéir Mhaorga Shárláidir");
//! assert_eq!(identity.tag, "6JN3V2CD6XQQ");
//! ```
//!
//! ## Re-exports
//!
//! - `mythologise::core` - Lexicon, inflection, tag encoding, derivation
//! - `mythologise::avatar` - Identicon and emoji rendering
//! - `mythologise::collision` - Tag sizing analysis

pub mod config;
pub mod error;
pub mod identity;

// Re-export component crates
pub use mythologise_avatar as avatar;
pub use mythologise_collision as collision;
pub use mythologise_core as core;

pub use config::{IdentityConfig, SecretKey, SecretSource};
pub use error::{Error, Result};
pub use identity::{ChatIdentity, Mythologiser};

// Re-export the everyday entry points
pub use mythologise_avatar::{render, AvatarFormat, AvatarOptions, AvatarResult, RenderedFormat};
pub use mythologise_core::{derive, derive_with_denylist, DerivationOptions, HandleScheme, TagChars};
