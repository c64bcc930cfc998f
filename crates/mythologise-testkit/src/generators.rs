//! Proptest generators for property-based testing.

use proptest::prelude::*;

use mythologise_core::{DerivationOptions, HandleScheme, TagChars, MAX_TAG_CHARS, MIN_TAG_CHARS};

/// Generate a UUID-shaped stable id.
pub fn stable_id() -> impl Strategy<Value = String> {
    "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}"
}

/// Generate an arbitrary secret, including empty and non-UTF-8 keys.
pub fn secret() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=96)
}

/// Generate a valid tag length.
pub fn tag_chars() -> impl Strategy<Value = TagChars> {
    (MIN_TAG_CHARS..=MAX_TAG_CHARS).prop_map(|n| match TagChars::new(i64::from(n)) {
        Ok(tc) => tc,
        Err(e) => unreachable!("{e}"),
    })
}

/// Generate a whole number outside the valid tag range.
pub fn out_of_range_tag_chars() -> impl Strategy<Value = i64> {
    prop_oneof![
        i64::MIN..i64::from(MIN_TAG_CHARS),
        (i64::from(MAX_TAG_CHARS) + 1)..=i64::MAX,
    ]
}

/// Generate a separator without letters, digits or spaces.
pub fn separator() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("-".to_string()),
        Just("_".to_string()),
        Just("::".to_string()),
        Just(".".to_string()),
        Just("~".to_string()),
    ]
}

pub fn scheme() -> impl Strategy<Value = HandleScheme> {
    prop_oneof![Just(HandleScheme::Paired), Just(HandleScheme::Legacy)]
}

pub fn derivation_options() -> impl Strategy<Value = DerivationOptions> {
    (tag_chars(), separator(), scheme()).prop_map(|(tc, sep, scheme)| {
        DerivationOptions::default()
            .with_tag_chars(tc)
            .with_separator(sep)
            .with_scheme(scheme)
    })
}

/// Generate a raw tag as a caller might pass it: mixed case, padded.
pub fn raw_tag() -> impl Strategy<Value = String> {
    ("[0-9a-zA-Z]{1,16}", " {0,2}").prop_map(|(tag, pad)| format!("{pad}{tag}{pad}"))
}
