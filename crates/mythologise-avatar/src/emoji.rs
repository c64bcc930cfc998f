//! Emoji selection for the two-part fallback and the centre emblem.
//!
//! **CRITICAL**: both pools are indexed by buffer bytes. Order is FROZEN;
//! append only.

use crate::expander::ExpandedBytes;

/// Animals and plants, in Unicode ordering without ZWJ sequences.
pub const PRIMARY_EMOJI: &[&str] = &[
    "🐵", "🐒", "🦍", "🦧", "🐶", "🐕", "🦮", "🐩", "🐺", "🦊",
    "🦝", "🐱", "🐈", "🦁", "🐯", "🐅", "🐆", "🐴", "🫎", "🫏",
    "🐎", "🦄", "🦓", "🦌", "🦬", "🐮", "🐂", "🐃", "🐄", "🐷",
    "🐖", "🐗", "🐽", "🐏", "🐑", "🐐", "🐪", "🐫", "🦙", "🦒",
    "🐘", "🦣", "🦏", "🦛", "🐭", "🐁", "🐀", "🐹", "🐰", "🐇",
    "🐿️", "🦫", "🦔", "🦇", "🐻", "🐨", "🐼", "🦥", "🦦", "🦨",
    "🦘", "🦡", "🐾", "🦃", "🐔", "🐓", "🐣", "🐤", "🐥", "🐦",
    "🐧", "🕊️", "🦅", "🦆", "🦢", "🦉", "🦤", "🪶", "🦩", "🦚",
    "🦜", "🪽", "🪿", "🐸", "🐊", "🐢", "🦎", "🐍", "🐲", "🐉",
    "🦕", "🦖", "🐳", "🐋", "🐬", "🦭", "🐟", "🐠", "🐡", "🦈",
    "🐙", "🐚", "🪸", "🪼", "🦀", "🦞", "🦐", "🦑", "🦪", "🐌",
    "🦋", "🐛", "🐜", "🐝", "🪲", "🐞", "🦗", "🪳", "🕷️", "🕸️",
    "🦂", "🦟", "🪰", "🪱", "🦠", "💐", "🌸", "💮", "🪷", "🏵️",
    "🌹", "🥀", "🌺", "🌻", "🌼", "🌷", "🪻", "🌱", "🪴", "🌲",
    "🌳", "🌴", "🌵", "🌾", "🌿", "☘️", "🍀", "🍁", "🍂", "🍃",
    "🪹", "🪺", "🍄", "🪾",
];

/// Small accent pool for the second half of the emoji fallback.
pub const SECONDARY_EMOJI: &[&str] = &["✨", "🌙", "🔥", "🌊", "🌿", "⭐", "⚡", "🎯"];

/// Index into [`PRIMARY_EMOJI`] chosen by byte 0.
pub fn primary_index(bytes: &ExpandedBytes) -> usize {
    usize::from(bytes.byte(0)) % PRIMARY_EMOJI.len()
}

/// Index into [`SECONDARY_EMOJI`] chosen by byte 1.
pub fn secondary_index(bytes: &ExpandedBytes) -> usize {
    usize::from(bytes.byte(1)) % SECONDARY_EMOJI.len()
}

pub fn primary(bytes: &ExpandedBytes) -> &'static str {
    PRIMARY_EMOJI[primary_index(bytes)]
}

/// Primary followed by secondary, e.g. `🦋✨`.
pub fn emoji_pair(bytes: &ExpandedBytes) -> String {
    let mut out = String::from(primary(bytes));
    out.push_str(SECONDARY_EMOJI[secondary_index(bytes)]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pool_sizes() {
        assert_eq!(PRIMARY_EMOJI.len(), 154);
        assert_eq!(SECONDARY_EMOJI.len(), 8);
    }

    #[test]
    fn test_pools_have_no_duplicates() {
        let primary: HashSet<_> = PRIMARY_EMOJI.iter().collect();
        assert_eq!(primary.len(), PRIMARY_EMOJI.len());
        let secondary: HashSet<_> = SECONDARY_EMOJI.iter().collect();
        assert_eq!(secondary.len(), SECONDARY_EMOJI.len());
    }

    #[test]
    fn test_pool_anchors() {
        assert_eq!(PRIMARY_EMOJI[0], "🐵");
        assert_eq!(PRIMARY_EMOJI[17], "🐴");
        assert_eq!(PRIMARY_EMOJI[110], "🦋");
        assert_eq!(PRIMARY_EMOJI[153], "🪾");
    }

    #[test]
    fn test_known_pairs() {
        assert_eq!(emoji_pair(&ExpandedBytes::from_tag("6JN3V2CD6XQQ")), "🦋✨");
        assert_eq!(emoji_pair(&ExpandedBytes::from_tag("QACN46ZB97S1")), "🐴🌊");
    }
}
