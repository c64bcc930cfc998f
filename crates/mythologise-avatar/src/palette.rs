//! Colour selection.
//!
//! Foreground colours sit in a mid lightness band (38-59%) and the
//! background gradient in a pale band (75-92%), so contrast holds for every
//! seed without a runtime check.

use crate::expander::ExpandedBytes;

/// The four colours an identicon is drawn with, as `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: String,
    pub accent: String,
    pub background_start: String,
    pub background_end: String,
}

impl Palette {
    pub fn from_bytes(bytes: &ExpandedBytes) -> Self {
        let b = |i: usize| u32::from(bytes.byte(i));

        let primary_hue = ((b(2) << 8) | b(3)) % 360;
        let accent_hue = (primary_hue + 70 + b(4) % 180) % 360;

        Self {
            primary: hsl_to_hex(primary_hue, 62 + b(5) % 24, 38 + b(6) % 18),
            accent: hsl_to_hex(accent_hue, 68 + b(7) % 20, 42 + b(8) % 18),
            background_start: hsl_to_hex((primary_hue + 180) % 360, 30 + b(9) % 20, 92 - b(10) % 8),
            background_end: hsl_to_hex((accent_hue + 180) % 360, 35 + b(11) % 18, 86 - b(12) % 12),
        }
    }
}

/// Convert hue (degrees), saturation and lightness (percent) to `#rrggbb`.
pub fn hsl_to_hex(hue: u32, saturation: u32, lightness: u32) -> String {
    let hue = f64::from(hue % 360);
    let sat = (f64::from(saturation) / 100.0).clamp(0.0, 1.0);
    let light = (f64::from(lightness) / 100.0).clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * light - 1.0).abs()) * sat;
    let segment = hue / 60.0;
    let x = chroma * (1.0 - ((segment % 2.0) - 1.0).abs());

    let (r, g, b) = if segment < 1.0 {
        (chroma, x, 0.0)
    } else if segment < 2.0 {
        (x, chroma, 0.0)
    } else if segment < 3.0 {
        (0.0, chroma, x)
    } else if segment < 4.0 {
        (0.0, x, chroma)
    } else if segment < 5.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    let m = light - chroma / 2.0;
    let channel = |v: f64| round_half_up((v + m) * 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

/// Round half toward positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
