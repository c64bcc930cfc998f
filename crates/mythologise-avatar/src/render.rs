//! The public render entry point.

use serde::Serialize;
use tracing::debug;

use crate::emoji::emoji_pair;
use crate::error::{AvatarError, Result};
use crate::expander::ExpandedBytes;
use crate::options::{AvatarFormat, AvatarOptions};
use crate::svg::build_identicon;

/// Format actually produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderedFormat {
    Svg,
    Emoji,
}

/// A rendered avatar. `value` is whichever of `svg` or `emoji` was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarResult {
    pub format: RenderedFormat,
    pub value: String,
    /// Empty when the emoji form was chosen.
    pub svg: String,
    pub emoji: String,
}

impl AvatarResult {
    /// An `<img src>`-ready data URI, for SVG results only.
    pub fn data_uri(&self) -> Option<String> {
        match self.format {
            RenderedFormat::Svg => Some(format!(
                "data:image/svg+xml;utf8,{}",
                urlencoding::encode(&self.svg)
            )),
            RenderedFormat::Emoji => None,
        }
    }
}

/// Trim and uppercase a tag. Fails if nothing is left.
///
/// Trimming strips the byte order mark along with Unicode whitespace, but
/// keeps U+0085, matching the trim tags were first normalized with.
pub fn normalize_tag(tag: &str) -> Result<String> {
    let trimmed = tag.trim_matches(is_tag_padding);
    if trimmed.is_empty() {
        return Err(AvatarError::EmptyTag);
    }
    Ok(trimmed.to_uppercase())
}

fn is_tag_padding(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Render the avatar for `tag`.
///
/// Only an empty tag fails. An explicit emoji format, or an SVG size that is
/// not finite or rounds outside `[24, 512]`, produces the emoji form.
pub fn render(tag: &str, options: &AvatarOptions) -> Result<AvatarResult> {
    let tag = normalize_tag(tag)?;
    let bytes = ExpandedBytes::from_tag(&tag);
    let emoji = emoji_pair(&bytes);

    let size = match (options.format, options.resolved_size()) {
        (AvatarFormat::Emoji, _) => None,
        (_, None) => {
            debug!(requested = ?options.size, "avatar size unusable, rendering emoji");
            None
        }
        (_, Some(size)) => Some(size),
    };

    let Some(size) = size else {
        return Ok(AvatarResult {
            format: RenderedFormat::Emoji,
            value: emoji.clone(),
            svg: String::new(),
            emoji,
        });
    };

    let label = match options.resolved_label() {
        Some(label) => label.to_string(),
        None => format!("Avatar for {tag}"),
    };
    let svg = build_identicon(&bytes, size, &label);

    Ok(AvatarResult {
        format: RenderedFormat::Svg,
        value: svg.clone(),
        svg,
        emoji,
    })
}
