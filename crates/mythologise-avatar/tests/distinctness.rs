//! Sampling and property tests over many tags.

use std::collections::HashSet;

use mythologise_avatar::{render, AvatarOptions, RenderedFormat};
use proptest::prelude::*;

const RADIX_DIGITS: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

/// `index` in base 32, zero-padded to 12 characters and uppercased.
fn sample_tag(mut index: u32) -> String {
    let mut digits = Vec::new();
    loop {
        digits.push(RADIX_DIGITS[(index % 32) as usize]);
        index /= 32;
        if index == 0 {
            break;
        }
    }
    digits.resize(12, b'0');
    digits.reverse();
    String::from_utf8(digits).unwrap().to_uppercase()
}

#[test]
fn test_sample_tags_are_distinct() {
    let tags: Vec<String> = (0..256).map(sample_tag).collect();
    assert_eq!(tags[1], "000000000001");
    assert_eq!(tags.iter().collect::<HashSet<_>>().len(), 256);
}

#[test]
fn test_svg_more_distinct_than_emoji() {
    let tags: Vec<String> = (0..256).map(sample_tag).collect();

    let svgs: HashSet<String> = tags
        .iter()
        .map(|t| render(t, &AvatarOptions::svg(64.0)).unwrap().value)
        .collect();
    let emojis: HashSet<String> = tags
        .iter()
        .map(|t| render(t, &AvatarOptions::emoji()).unwrap().value)
        .collect();

    assert!(svgs.len() > 240);
    assert!(emojis.len() < tags.len());
    assert!(svgs.len() > emojis.len());
}

proptest! {
    #[test]
    fn prop_render_is_deterministic(tag in "[0-9A-Z]{1,16}", size in 24u32..=512) {
        let opts = AvatarOptions::svg(f64::from(size));
        let a = render(&tag, &opts).unwrap();
        let b = render(&tag, &opts).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.format, RenderedFormat::Svg);
        let expected = format!(r#"width="{}""#, size);
        prop_assert!(a.svg.contains(&expected));
    }

    #[test]
    fn prop_case_and_whitespace_invariant(tag in "[0-9a-z]{1,16}", pad in " {0,3}") {
        let padded = format!("{pad}{tag}{pad}");
        let upper = tag.to_uppercase();
        let opts = AvatarOptions::default();
        prop_assert_eq!(render(&padded, &opts).unwrap(), render(&upper, &opts).unwrap());
    }

    #[test]
    fn prop_emoji_matches_between_formats(tag in "[0-9A-Z]{1,16}") {
        let svg = render(&tag, &AvatarOptions::default()).unwrap();
        let emoji = render(&tag, &AvatarOptions::emoji()).unwrap();
        prop_assert_eq!(svg.emoji, emoji.value);
    }

    #[test]
    fn prop_out_of_range_sizes_degrade(size in prop_oneof![0.0f64..23.49, 512.5f64..10_000.0]) {
        let avatar = render("6JN3V2CD6XQQ", &AvatarOptions::svg(size)).unwrap();
        prop_assert_eq!(avatar.format, RenderedFormat::Emoji);
        prop_assert!(avatar.svg.is_empty());
    }
}
