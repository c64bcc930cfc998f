//! Error types for avatar rendering.

use thiserror::Error;

/// Rendering fails only when there is nothing to seed from.
///
/// Malformed options never fail; they degrade to the emoji form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvatarError {
    /// The tag was empty after trimming (a type violation).
    #[error("type violation: tag must be a non-empty string")]
    EmptyTag,
}

/// Result type for avatar operations.
pub type Result<T> = std::result::Result<T, AvatarError>;
