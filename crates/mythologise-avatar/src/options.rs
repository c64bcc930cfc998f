//! Render options and their lenient parsing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::palette::round_half_up;

/// Size used when none is given.
pub const DEFAULT_SIZE: u32 = 64;
/// Smallest accepted SVG size in pixels.
pub const MIN_SIZE: u32 = 24;
/// Largest accepted SVG size in pixels.
pub const MAX_SIZE: u32 = 512;

/// Requested output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarFormat {
    Svg,
    Emoji,
    /// SVG when the size is valid, emoji otherwise.
    #[default]
    Auto,
}

impl AvatarFormat {
    /// Parse a format name. Anything unrecognised becomes [`AvatarFormat::Emoji`].
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "svg" => Self::Svg,
            "auto" => Self::Auto,
            _ => Self::Emoji,
        }
    }
}

/// Options for [`render`](crate::render).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvatarOptions {
    pub format: AvatarFormat,
    /// Requested size in pixels. `None` means [`DEFAULT_SIZE`].
    pub size: Option<f64>,
    /// Accessible label. Blank or missing labels are derived from the tag.
    pub label: Option<String>,
}

impl AvatarOptions {
    pub fn svg(size: f64) -> Self {
        Self {
            format: AvatarFormat::Svg,
            size: Some(size),
            label: None,
        }
    }

    pub fn emoji() -> Self {
        Self {
            format: AvatarFormat::Emoji,
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Read options from untyped JSON without ever failing.
    ///
    /// A non-object yields the defaults. An unknown `format` string yields
    /// emoji, and a non-string `format` is ignored. A `size` that is present
    /// but not a number forces the emoji fallback. A non-string `label` is
    /// ignored.
    pub fn from_json(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };

        let format = match map.get("format") {
            Some(Value::String(s)) => AvatarFormat::from_str_lossy(s),
            _ => AvatarFormat::Auto,
        };
        let size = match map.get("size") {
            None => None,
            Some(v) => Some(v.as_f64().unwrap_or(f64::NAN)),
        };
        let label = map.get("label").and_then(Value::as_str).map(str::to_string);

        Self {
            format,
            size,
            label,
        }
    }

    /// The pixel size to draw at, or `None` when the SVG form is unusable.
    ///
    /// The size is rounded to the nearest integer before the bounds check,
    /// so `23.5` passes and `23.4` does not.
    pub fn resolved_size(&self) -> Option<u32> {
        let Some(size) = self.size else {
            return Some(DEFAULT_SIZE);
        };
        if !size.is_finite() {
            return None;
        }
        let rounded = round_half_up(size);
        if rounded < f64::from(MIN_SIZE) || rounded > f64::from(MAX_SIZE) {
            return None;
        }
        Some(rounded as u32)
    }

    /// The trimmed label, if it has any content.
    pub fn resolved_label(&self) -> Option<&str> {
        self.label.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }
}
