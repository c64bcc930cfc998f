//! Error types for handle derivation.

use thiserror::Error;

/// Errors that can occur while deriving a handle.
///
/// Both variants reject the call outright. `tag_chars` is never clamped,
/// since a silently adjusted length would silently change the handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationError {
    /// A value had the wrong shape (not a finite whole number).
    #[error("type violation: {0}")]
    TypeViolation(String),

    /// A whole number fell outside the supported bounds.
    #[error("range violation: tag_chars must be between {min} and {max}, got {got}")]
    RangeViolation { min: u32, max: u32, got: i64 },
}

impl DerivationError {
    pub fn is_type_violation(&self) -> bool {
        matches!(self, DerivationError::TypeViolation(_))
    }

    pub fn is_range_violation(&self) -> bool {
        matches!(self, DerivationError::RangeViolation { .. })
    }
}

/// Result type for derivation operations.
pub type Result<T> = std::result::Result<T, DerivationError>;
