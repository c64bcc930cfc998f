//! Inline vector glyphs for emblem emoji.
//!
//! Each glyph is a single path drawn in a 24x24 box. Emoji without a glyph
//! are rendered as text instead.

/// Side of the square every glyph path is drawn in.
pub const GLYPH_BOX: f64 = 24.0;

/// A vector stand-in for one emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub emoji: &'static str,
    pub path: &'static str,
}

const GLYPHS: &[Glyph] = &[
    Glyph {
        emoji: "🌲",
        path: "M12 2 5 12h4l-4 6h6v4h2v-4h6l-4-6h4z",
    },
    Glyph {
        emoji: "🌳",
        path: "M12 2a6 6 0 0 0-5.6 8.2A5 5 0 0 0 9 19h2v3h2v-3h2a5 5 0 0 0 2.6-8.8A6 6 0 0 0 12 2z",
    },
    Glyph {
        emoji: "🌱",
        path: "M11 22v-7C7 15 4 12 4 7c4 0 7 3 7 6 0-5 3-8 9-8 0 6-3 9-7 9v8z",
    },
    Glyph {
        emoji: "🍀",
        path: "M12 12a4 4 0 1 1 0-8 4 4 0 1 1 0 8zm0 0a4 4 0 1 1 8 0 4 4 0 1 1-8 0zm0 0a4 4 0 1 1 0 8 4 4 0 1 1 0-8zm0 0a4 4 0 1 1-8 0 4 4 0 1 1 8 0z",
    },
    Glyph {
        emoji: "🍄",
        path: "M12 3C6.5 3 3 7 3 11h18c0-4-3.5-8-9-8zM9 12v7a3 3 0 0 0 6 0v-7z",
    },
    Glyph {
        emoji: "🪶",
        path: "M20 3C12 3 6 9 6 16l-3 5h2l2-3c7 0 13-6 13-15z",
    },
    Glyph {
        emoji: "🌸",
        path: "M12 2a3 3 0 0 1 3 4.5 3 3 0 0 1 4.6 3.4A3 3 0 0 1 17 15a3 3 0 0 1-5 3.5A3 3 0 0 1 7 15a3 3 0 0 1-2.6-5.1A3 3 0 0 1 9 6.5 3 3 0 0 1 12 2z",
    },
];

/// The glyph for `emoji`, if one is drawn.
pub fn glyph_for(emoji: &str) -> Option<&'static Glyph> {
    GLYPHS.iter().find(|g| g.emoji == emoji)
}
