//! Chat identities: a display name, a tag and an avatar for one account.

use mythologise_avatar::{render, AvatarOptions, AvatarResult};
use mythologise_core::derive;
use serde::Serialize;

use crate::config::IdentityConfig;
use crate::error::Result;

/// What other participants see for an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatIdentity {
    /// Words of the handle, title-cased and space-separated.
    pub display_name: String,
    /// Uppercase tag; also the avatar seed.
    pub tag: String,
    /// The full lowercase handle.
    pub handle: String,
}

impl ChatIdentity {
    /// Split a handle into display name and tag.
    ///
    /// The last non-empty segment is the tag. A handle with a single segment
    /// is used whole for both.
    pub fn from_handle(handle: String, separator: &str) -> Self {
        let parts: Vec<&str> = if separator.is_empty() {
            vec![handle.as_str()]
        } else {
            handle.split(separator).filter(|p| !p.is_empty()).collect()
        };

        let tag = parts.last().map(|t| t.to_uppercase()).unwrap_or_default();
        let words = if parts.len() > 1 {
            &parts[..parts.len() - 1]
        } else {
            &parts[..]
        };
        let display_name = title_case(&words.join(" "));

        Self {
            display_name,
            tag,
            handle,
        }
    }
}

/// Uppercase the first letter of each whitespace-separated word.
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Derives chat identities and avatars with one configuration.
#[derive(Debug, Clone)]
pub struct Mythologiser {
    config: IdentityConfig,
}

impl Mythologiser {
    pub fn new(config: IdentityConfig) -> Self {
        Self { config }
    }

    /// Build from the process environment. See [`IdentityConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(IdentityConfig::from_env()?))
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    /// The raw handle for `user_id`.
    pub fn handle(&self, user_id: &str) -> String {
        derive(
            user_id,
            self.config.secret.as_bytes(),
            &self.config.derivation_options(),
        )
    }

    pub fn chat_identity(&self, user_id: &str) -> ChatIdentity {
        ChatIdentity::from_handle(self.handle(user_id), &self.config.separator)
    }

    pub fn display_name(&self, user_id: &str) -> String {
        self.chat_identity(user_id).display_name
    }

    pub fn tag(&self, user_id: &str) -> String {
        self.chat_identity(user_id).tag
    }

    /// The avatar for `user_id`, seeded from its tag.
    pub fn avatar(&self, user_id: &str, options: &AvatarOptions) -> Result<AvatarResult> {
        let identity = self.chat_identity(user_id);
        Ok(render(&identity.tag, options)?)
    }
}
