//! Golden vector tests.
//!
//! Any failure here means existing users would see a different name or
//! avatar. Fix the code, not the vector.

use mythologise::core::lexicon::{self, fingerprint, ADJECTIVES, NOUNS};
use mythologise::{
    derive, ChatIdentity, DerivationOptions, IdentityConfig, Mythologiser, TagChars,
};
use mythologise_testkit::vectors::{
    avatar_vectors, handle_vectors, UID_1, UID_2, UNIT_TEST_SECRET,
};

#[test]
fn test_handle_vectors() {
    for v in handle_vectors() {
        assert_eq!(v.derive(), v.expected, "vector: {}", v.name);
    }
}

#[test]
fn test_avatar_vectors() {
    for v in avatar_vectors() {
        let avatar = mythologise::render(v.tag, &mythologise::AvatarOptions::emoji()).unwrap();
        assert_eq!(avatar.value, v.emoji, "tag: {}", v.tag);
    }
}

#[test]
fn test_lexicon_fingerprint_locked() {
    let fp = fingerprint();
    assert_eq!(
        fp.nouns,
        "eb4c2e9e422f1da55cc2ce1f0121dd1799d99ff76063d372b7d3b3e238ca3ad9"
    );
    assert_eq!(
        fp.adjectives,
        "00b5cccf877d1cd21f7abacd7f0cc3f193e8f2004fe0e87647d390ba7507c4c5"
    );
}

#[test]
fn test_lexicon_edges_locked() {
    assert_eq!(NOUNS.len(), lexicon::NOUN_COUNT);
    assert_eq!(ADJECTIVES.len(), lexicon::ADJECTIVE_COUNT);
    assert_eq!(NOUNS.last().map(|n| n.word), Some("Seanchaisleán"));
}

#[test]
fn test_separator_rewrites_only_separators() {
    let base = derive(UID_1, UNIT_TEST_SECRET.as_bytes(), &DerivationOptions::legacy());
    let underscored = derive(
        UID_1,
        UNIT_TEST_SECRET.as_bytes(),
        &DerivationOptions::legacy().with_separator("_"),
    );
    let bare = derive(
        UID_1,
        UNIT_TEST_SECRET.as_bytes(),
        &DerivationOptions::legacy().with_separator(""),
    );
    assert_eq!(base, "manannán-fionnuar-6jn3");
    assert_eq!(underscored, base.replace('-', "_"));
    assert_eq!(bare, base.replace('-', ""));
}

#[test]
fn test_tag_chars_bounds() {
    assert!(TagChars::new(1).unwrap_err().is_range_violation());
    assert!(TagChars::new(49).unwrap_err().is_range_violation());
    assert!(TagChars::from_f64(3.5).unwrap_err().is_type_violation());
    assert!(TagChars::from_f64(f64::NAN).unwrap_err().is_type_violation());

    for n in [2, 48] {
        let opts = DerivationOptions::default().with_tag_chars(TagChars::new(n).unwrap());
        let handle = derive(UID_1, UNIT_TEST_SECRET.as_bytes(), &opts);
        assert_eq!(handle.rsplit('-').next().unwrap().len(), n as usize);
    }
}

#[test]
fn test_chat_identity_end_to_end() {
    let m = Mythologiser::new(IdentityConfig::with_secret(UNIT_TEST_SECRET));

    let identity = m.chat_identity(UID_1);
    assert_eq!(
        identity,
        ChatIdentity {
            display_name: "Spéir Mhaorga Shárláidir".to_string(),
            tag: "6JN3V2CD6XQQ".to_string(),
            handle: "spéir::mhaorga::shárláidir::6jn3v2cd6xqq".to_string(),
        }
    );

    let identity = m.chat_identity(UID_2);
    assert_eq!(identity.display_name, "Crann Saibhir Cúramach");
    assert_eq!(identity.tag, "5N43TTPHT4MC");
}

#[test]
fn test_chat_avatar_matches_tag_avatar() {
    let m = Mythologiser::new(IdentityConfig::with_secret(UNIT_TEST_SECRET));
    let opts = mythologise::AvatarOptions::default();

    let via_user = m.avatar(UID_1, &opts).unwrap();
    let via_tag = mythologise::render("6JN3V2CD6XQQ", &opts).unwrap();
    assert_eq!(via_user, via_tag);
    assert!(via_user.data_uri().is_some());
}
