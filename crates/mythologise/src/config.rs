//! Identity configuration and secret resolution.
//!
//! The HMAC secret comes from the first non-blank of `MYTHOLOGISE_SECRET`
//! and `SUPABASE_SERVICE_ROLE_KEY`. With neither set, a fixed development
//! secret is used and a warning is logged. Handles derived with it are
//! predictable by anyone, so it must never reach production.

use std::fmt;

use mythologise_core::{DerivationOptions, HandleScheme, TagChars};
use serde::Deserialize;
use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// Primary secret variable.
pub const SECRET_ENV: &str = "MYTHOLOGISE_SECRET";
/// Secondary secret variable, shared with the database service.
pub const SERVICE_ROLE_ENV: &str = "SUPABASE_SERVICE_ROLE_KEY";
/// Optional tag length override.
pub const TAG_CHARS_ENV: &str = "MYTHOLOGISE_TAG_CHARS";

/// Local-development secret used when nothing is configured.
pub const LOCAL_FALLBACK_SECRET: &str = "fogr-chat-display-name-fallback";

/// Separator for chat handles; the display name and tag are split on it.
pub const CHAT_SEPARATOR: &str = "::";

/// HMAC key bytes, wiped on drop and never printed.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: Vec<u8>,
}

impl SecretKey {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<String> for SecretKey {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

impl From<&str> for SecretKey {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Where the secret came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    /// `MYTHOLOGISE_SECRET`.
    Configured,
    /// `SUPABASE_SERVICE_ROLE_KEY`.
    ServiceRoleKey,
    /// Supplied directly, e.g. from a config file.
    Explicit,
    /// [`LOCAL_FALLBACK_SECRET`].
    LocalFallback,
}

impl SecretSource {
    pub fn is_fallback(self) -> bool {
        self == SecretSource::LocalFallback
    }
}

/// Settings for deriving chat identities.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "IdentityConfigFile")]
pub struct IdentityConfig {
    pub secret: SecretKey,
    pub secret_source: SecretSource,
    pub separator: String,
    pub tag_chars: TagChars,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            secret: SecretKey::from(LOCAL_FALLBACK_SECRET),
            secret_source: SecretSource::LocalFallback,
            separator: CHAT_SEPARATOR.to_string(),
            tag_chars: TagChars::DEFAULT,
        }
    }
}

impl IdentityConfig {
    /// Configuration with an explicit secret and default layout.
    pub fn with_secret(secret: impl Into<SecretKey>) -> Self {
        Self {
            secret: secret.into(),
            secret_source: SecretSource::Explicit,
            ..Self::default()
        }
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from any key lookup. Values are trimmed; blank means unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let (secret, secret_source) = if let Some(v) = get(SECRET_ENV) {
            (SecretKey::from(v), SecretSource::Configured)
        } else if let Some(v) = get(SERVICE_ROLE_ENV) {
            (SecretKey::from(v), SecretSource::ServiceRoleKey)
        } else {
            warn!(
                "neither {SECRET_ENV} nor {SERVICE_ROLE_ENV} is set, using the local development secret"
            );
            (SecretKey::from(LOCAL_FALLBACK_SECRET), SecretSource::LocalFallback)
        };

        let tag_chars = match get(TAG_CHARS_ENV) {
            Some(raw) => parse_tag_chars(&raw).map_err(|source| Error::Config {
                key: TAG_CHARS_ENV,
                source,
            })?,
            None => TagChars::DEFAULT,
        };

        Ok(Self {
            secret,
            secret_source,
            separator: CHAT_SEPARATOR.to_string(),
            tag_chars,
        })
    }

    /// Options to derive chat handles with.
    pub fn derivation_options(&self) -> DerivationOptions {
        DerivationOptions::default()
            .with_scheme(HandleScheme::Paired)
            .with_tag_chars(self.tag_chars)
            .with_separator(self.separator.clone())
    }
}

fn parse_tag_chars(raw: &str) -> std::result::Result<TagChars, mythologise_core::DerivationError> {
    let value: f64 = raw.parse().map_err(|_| {
        mythologise_core::DerivationError::TypeViolation(format!(
            "tag_chars must be a number, got {raw:?}"
        ))
    })?;
    TagChars::from_f64(value)
}

/// On-disk shape of [`IdentityConfig`]; every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IdentityConfigFile {
    secret: Option<String>,
    separator: Option<String>,
    tag_chars: Option<TagChars>,
}

impl From<IdentityConfigFile> for IdentityConfig {
    fn from(file: IdentityConfigFile) -> Self {
        let mut config = match file.secret.map(|s| s.trim().to_string()) {
            Some(secret) if !secret.is_empty() => IdentityConfig::with_secret(secret),
            _ => {
                warn!("config has no secret, using the local development secret");
                IdentityConfig::default()
            }
        };
        if let Some(separator) = file.separator {
            config.separator = separator;
        }
        if let Some(tag_chars) = file.tag_chars {
            config.tag_chars = tag_chars;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_primary_secret_wins() {
        let config = IdentityConfig::from_lookup(lookup(&[
            (SECRET_ENV, "  primary  "),
            (SERVICE_ROLE_ENV, "service"),
        ]))
        .unwrap();
        assert_eq!(config.secret.as_bytes(), b"primary");
        assert_eq!(config.secret_source, SecretSource::Configured);
    }

    #[test]
    fn test_service_role_key_second() {
        let config = IdentityConfig::from_lookup(lookup(&[
            (SECRET_ENV, "   "),
            (SERVICE_ROLE_ENV, "service"),
        ]))
        .unwrap();
        assert_eq!(config.secret.as_bytes(), b"service");
        assert_eq!(config.secret_source, SecretSource::ServiceRoleKey);
    }

    #[test]
    fn test_local_fallback_last() {
        let config = IdentityConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.secret.as_bytes(), LOCAL_FALLBACK_SECRET.as_bytes());
        assert!(config.secret_source.is_fallback());
        assert_eq!(config.separator, CHAT_SEPARATOR);
        assert_eq!(config.tag_chars, TagChars::DEFAULT);
    }

    #[test]
    fn test_tag_chars_override() {
        let config = IdentityConfig::from_lookup(lookup(&[(TAG_CHARS_ENV, "8")])).unwrap();
        assert_eq!(config.tag_chars.get(), 8);

        let err = IdentityConfig::from_lookup(lookup(&[(TAG_CHARS_ENV, "49")])).unwrap_err();
        assert!(matches!(err, Error::Config { source, .. } if source.is_range_violation()));

        let err = IdentityConfig::from_lookup(lookup(&[(TAG_CHARS_ENV, "eight")])).unwrap_err();
        assert!(matches!(err, Error::Config { source, .. } if source.is_type_violation()));
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let key = SecretKey::from("hunter2");
        let debug = format!("{:?}", key);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("REDACTED"));

        let config = IdentityConfig::with_secret("hunter2");
        assert!(!format!("{:?}", config).contains("hunter2"));
    }

    #[test]
    fn test_deserialize() {
        let config: IdentityConfig =
            serde_json::from_str(r#"{"secret": "s3cret", "tag_chars": 8}"#).unwrap();
        assert_eq!(config.secret.as_bytes(), b"s3cret");
        assert_eq!(config.secret_source, SecretSource::Explicit);
        assert_eq!(config.tag_chars.get(), 8);
        assert_eq!(config.separator, CHAT_SEPARATOR);

        let config: IdentityConfig = serde_json::from_str("{}").unwrap();
        assert!(config.secret_source.is_fallback());

        assert!(serde_json::from_str::<IdentityConfig>(r#"{"tag_chars": 1}"#).is_err());
    }

    #[test]
    fn test_derivation_options() {
        let opts = IdentityConfig::default().derivation_options();
        assert_eq!(opts.separator, "::");
        assert_eq!(opts.tag_chars, TagChars::DEFAULT);
        assert_eq!(opts.scheme, HandleScheme::Paired);
    }
}
