//! Identicon markup.
//!
//! A 5x5 grid mirrored left to right over a two-tone gradient, with a round
//! centre badge carrying the emblem. Every decision reads from
//! [`ExpandedBytes`], so identical `(tag, size, label)` produce identical
//! markup.

use std::fmt::Write;

use crate::emoji;
use crate::expander::ExpandedBytes;
use crate::glyph::{glyph_for, GLYPH_BOX};
use crate::palette::Palette;

/// Cells per side.
pub const GRID_SIZE: usize = 5;

/// Columns decided directly; the rest are mirrored.
pub const LEFT_COLUMNS: usize = GRID_SIZE.div_ceil(2);

/// Bit lanes, one bit per decided cell. FROZEN.
pub mod lanes {
    pub const ACTIVE: usize = 16;
    pub const ACCENT: usize = 80;
    pub const ROUND: usize = 120;
    pub const FADED: usize = 176;
    pub const BADGE_SHADOW: usize = 250;
}

const FADED_OPACITY: &str = "0.72";
const EMOJI_FONTS: &str = "Apple Color Emoji,Segoe UI Emoji,Noto Color Emoji,sans-serif";

/// Pixel geometry for one output size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub size: u32,
    pub cell: u32,
    pub icon_size: u32,
    pub offset: u32,
    pub cell_radius: u32,
}

impl Layout {
    pub fn for_size(size: u32) -> Self {
        let padding = 2.max(size / 10);
        let drawable = 1.max(size.saturating_sub(padding * 2));
        let cell = 1.max(drawable / GRID_SIZE as u32);
        let icon_size = cell * GRID_SIZE as u32;
        let offset = size.saturating_sub(icon_size) / 2;
        let cell_radius = 1.max(cell / 5);

        Self {
            size,
            cell,
            icon_size,
            offset,
            cell_radius,
        }
    }

    fn centre(&self) -> f64 {
        f64::from(self.offset) + f64::from(self.icon_size) / 2.0
    }

    fn badge_radius(&self) -> u32 {
        4.max(self.cell * 9 / 10)
    }
}

/// One cell of the left half, as decided by the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub accent: bool,
    pub round: bool,
    pub faded: bool,
}

/// Active cells of the left half in row-major order.
pub fn active_cells(bytes: &ExpandedBytes) -> Vec<Cell> {
    let mut cells = Vec::new();
    for row in 0..GRID_SIZE {
        for col in 0..LEFT_COLUMNS {
            let i = row * LEFT_COLUMNS + col;
            if !bytes.bit(lanes::ACTIVE + i) {
                continue;
            }
            cells.push(Cell {
                row,
                col,
                accent: bytes.bit(lanes::ACCENT + i),
                round: bytes.bit(lanes::ROUND + i),
                faded: bytes.bit(lanes::FADED + i),
            });
        }
    }
    cells
}

/// Build the identicon for `bytes` at `size` pixels.
pub fn build_identicon(bytes: &ExpandedBytes, size: u32, label: &str) -> String {
    let layout = Layout::for_size(size);
    let palette = Palette::from_bytes(bytes);
    let seed_hex = bytes.to_hex();
    let gradient_id = format!("g-{}", &seed_hex[..12]);
    let shadow_id = format!("s-{}", &seed_hex[..12]);
    let shadow = bytes.bit(lanes::BADGE_SHADOW);

    let mut out = String::with_capacity(4096);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}" role="img" aria-label="{label}">"#,
        label = escape_xml(label),
    );

    out.push_str("<defs>");
    let _ = write!(
        out,
        r#"<linearGradient id="{gradient_id}" x1="0" y1="0" x2="1" y2="1"><stop offset="0%" stop-color="{}" /><stop offset="100%" stop-color="{}" /></linearGradient>"#,
        palette.background_start, palette.background_end,
    );
    if shadow {
        let _ = write!(
            out,
            r#"<filter id="{shadow_id}" x="-50%" y="-50%" width="200%" height="200%"><feDropShadow dx="0" dy="{}" stdDeviation="{}" flood-color="{}" flood-opacity="0.35" /></filter>"#,
            1.max(layout.cell / 8),
            1.max(layout.cell / 6),
            palette.primary,
        );
    }
    out.push_str("</defs>");

    let _ = write!(
        out,
        r#"<rect x="0" y="0" width="{size}" height="{size}" rx="{}" fill="url(#{gradient_id})" />"#,
        4.max(size * 12 / 100),
    );

    for cell in active_cells(bytes) {
        let fill = if cell.accent {
            &palette.accent
        } else {
            &palette.primary
        };
        let mirror = GRID_SIZE - 1 - cell.col;
        write_cell(&mut out, &layout, &cell, cell.col, fill);
        if mirror != cell.col {
            write_cell(&mut out, &layout, &cell, mirror, fill);
        }
    }

    let _ = write!(
        out,
        r#"<rect x="{o}" y="{o}" width="{s}" height="{s}" rx="{}" fill="none" stroke="{}" stroke-opacity="0.28" />"#,
        2.max(layout.cell_radius * 3 / 2),
        palette.primary,
        o = layout.offset,
        s = layout.icon_size,
    );

    write_badge(&mut out, &layout, &palette, bytes, shadow.then_some(shadow_id.as_str()));

    out.push_str("</svg>");
    out
}

fn write_cell(out: &mut String, layout: &Layout, cell: &Cell, col: usize, fill: &str) {
    let x = layout.offset + col as u32 * layout.cell;
    let y = layout.offset + cell.row as u32 * layout.cell;
    let rx = if cell.round {
        layout.cell / 2
    } else {
        layout.cell_radius
    };
    let _ = write!(
        out,
        r#"<rect x="{x}" y="{y}" width="{c}" height="{c}" rx="{rx}" fill="{fill}""#,
        c = layout.cell,
    );
    if cell.faded {
        let _ = write!(out, r#" fill-opacity="{FADED_OPACITY}""#);
    }
    out.push_str(" />");
}

fn write_badge(
    out: &mut String,
    layout: &Layout,
    palette: &Palette,
    bytes: &ExpandedBytes,
    shadow_id: Option<&str>,
) {
    let centre = num(layout.centre());
    let radius = layout.badge_radius();

    match shadow_id {
        Some(id) => {
            let _ = write!(out, r#"<g filter="url(#{id})">"#);
        }
        None => out.push_str("<g>"),
    }
    let _ = write!(
        out,
        r#"<circle cx="{centre}" cy="{centre}" r="{radius}" fill="{}" stroke="{}" stroke-width="{}" />"#,
        palette.background_start,
        palette.primary,
        1.max(radius / 8),
    );

    let emblem = emoji::primary(bytes);
    match glyph_for(emblem) {
        Some(glyph) => {
            let side = f64::from(radius) * 1.3;
            let corner = num(layout.centre() - side / 2.0);
            let _ = write!(
                out,
                r#"<path transform="translate({corner} {corner}) scale({})" d="{}" fill="{}" />"#,
                num(side / GLYPH_BOX),
                glyph.path,
                palette.accent,
            );
        }
        None => {
            let _ = write!(
                out,
                r#"<text x="{centre}" y="{centre}" text-anchor="middle" dominant-baseline="central" font-size="{}" font-family="{EMOJI_FONTS}">{}</text>"#,
                1.max(radius * 6 / 5),
                escape_xml(emblem),
            );
        }
    }
    out.push_str("</g>");
}

/// Escape the five XML special characters.
pub fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a coordinate with at most two decimals and no trailing zeros.
fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_bounds() {
        let small = Layout::for_size(24);
        assert_eq!(small.cell, 4);
        assert_eq!(small.icon_size, 20);
        assert_eq!(small.offset, 2);

        let default = Layout::for_size(64);
        assert_eq!(default.cell, 10);
        assert_eq!(default.offset, 7);
        assert_eq!(default.cell_radius, 2);

        let large = Layout::for_size(512);
        assert_eq!(large.cell, 82);
        assert_eq!(large.icon_size + 2 * large.offset, 512);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &apos;Jerry&apos;&lt;/a&gt;"
        );
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(32.0), "32");
        assert_eq!(num(32.5), "32.5");
        assert_eq!(num(1.0 / 3.0), "0.33");
    }

    #[test]
    fn test_grid_is_mirrored() {
        for seed in ["6JN3V2CD6XQQ", "QACN46ZB97S1", "A", "0000000000AB"] {
            let bytes = ExpandedBytes::from_tag(seed);
            let svg = build_identicon(&bytes, 64, "x");
            let layout = Layout::for_size(64);
            for cell in active_cells(&bytes) {
                let y = layout.offset + cell.row as u32 * layout.cell;
                let left = layout.offset + cell.col as u32 * layout.cell;
                let right = layout.offset + (GRID_SIZE - 1 - cell.col) as u32 * layout.cell;
                assert!(svg.contains(&format!(r#"<rect x="{left}" y="{y}" width="10""#)));
                assert!(svg.contains(&format!(r#"<rect x="{right}" y="{y}" width="10""#)));
            }
        }
    }

    #[test]
    fn test_shadow_filter_follows_bit() {
        let mut raw = [0u8; 32];
        let off = build_identicon(&ExpandedBytes::from_bytes(raw), 64, "x");
        assert!(!off.contains("<filter"));
        assert!(off.contains("<g>"));

        raw[lanes::BADGE_SHADOW / 8] |= 1 << (lanes::BADGE_SHADOW % 8);
        let on = build_identicon(&ExpandedBytes::from_bytes(raw), 64, "x");
        assert!(on.contains("<feDropShadow"));
        assert!(on.contains(r#"<g filter="url(#s-"#));
    }

    #[test]
    fn test_empty_grid_when_active_lane_clear() {
        let bytes = ExpandedBytes::from_bytes([0u8; 32]);
        assert!(active_cells(&bytes).is_empty());
    }

    #[test]
    fn test_glyph_emblem_when_available() {
        // byte 0 = 139 selects the pool entry with a tree glyph
        let mut raw = [0u8; 32];
        raw[0] = 139;
        let bytes = ExpandedBytes::from_bytes(raw);
        assert_eq!(emoji::primary(&bytes), "🌲");
        let svg = build_identicon(&bytes, 64, "x");
        assert!(svg.contains("<path transform="));
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn test_text_emblem_fallback() {
        let bytes = ExpandedBytes::from_tag("6JN3V2CD6XQQ");
        let svg = build_identicon(&bytes, 64, "x");
        assert!(svg.contains(">🦋</text>"));
    }
}
