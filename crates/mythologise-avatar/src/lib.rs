//! # Mythologise Avatar
//!
//! Deterministic avatars seeded from a handle's tag.
//!
//! The tag is normalized, expanded into 32 bytes by a non-cryptographic
//! generator, and read to pick colours, a mirrored 5x5 grid, a centre
//! emblem and a two-emoji fallback. No secret ever reaches this crate.
//!
//! ```rust
//! use mythologise_avatar::{render, AvatarOptions, RenderedFormat};
//!
//! let avatar = render("6JN3V2CD6XQQ", &AvatarOptions::default()).unwrap();
//! assert_eq!(avatar.format, RenderedFormat::Svg);
//! assert_eq!(avatar.emoji, "🦋✨");
//! ```

pub mod emoji;
pub mod error;
pub mod expander;
pub mod glyph;
pub mod options;
pub mod palette;
pub mod render;
pub mod svg;

pub use error::{AvatarError, Result};
pub use expander::ExpandedBytes;
pub use options::{AvatarFormat, AvatarOptions, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
pub use palette::Palette;
pub use render::{normalize_tag, render, AvatarResult, RenderedFormat};
