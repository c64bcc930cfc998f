//! Error types for the facade.

use mythologise_avatar::AvatarError;
use mythologise_core::DerivationError;
use thiserror::Error;

/// Errors that can occur anywhere in the identity pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Handle derivation rejected its options.
    #[error("derivation error: {0}")]
    Derivation(#[from] DerivationError),

    /// Avatar rendering rejected its tag.
    #[error("avatar error: {0}")]
    Avatar(#[from] AvatarError),

    /// A configuration value could not be used.
    #[error("invalid configuration: {key}: {source}")]
    Config {
        key: &'static str,
        #[source]
        source: DerivationError,
    },
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, Error>;
