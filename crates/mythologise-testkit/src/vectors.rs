//! Golden vectors for handles and avatars.
//!
//! These lock the wire format: lexicon order, digest offsets, tag encoding
//! and the avatar expander. A failing vector means existing users would be
//! renamed or redrawn.

use mythologise_avatar::{emoji, ExpandedBytes};
use mythologise_core::{derive, DerivationOptions, HandleScheme, TagChars};

pub const UID_1: &str = "e9fdcc9a-e942-4620-b90b-e008a0eb1147";
pub const UID_2: &str = "e4370108-786a-40c6-8f0e-b07fb4dd7946";
pub const UID_3: &str = "351c1f1d-a5e7-48b4-8e51-6706a5428a70";
pub const UID_4: &str = "53b4be17-e238-4e6a-adb3-595229ce134b";

pub const UNIT_TEST_SECRET: &str = "fogr-unit-test-secret-v1";
pub const CONTROL_SECRET: &str = "supabase-hmac-secret";

/// A handle derivation with its expected output.
#[derive(Debug, Clone)]
pub struct HandleVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub uid: &'static str,
    pub secret: &'static str,
    pub scheme: HandleScheme,
    /// `None` uses the scheme's default length.
    pub tag_chars: Option<u32>,
    pub separator: &'static str,
    pub expected: &'static str,
}

impl HandleVector {
    pub fn options(&self) -> DerivationOptions {
        let base = match self.scheme {
            HandleScheme::Paired => DerivationOptions::default(),
            HandleScheme::Legacy => DerivationOptions::legacy(),
        };
        let base = base.with_separator(self.separator);
        match self.tag_chars {
            Some(n) => match TagChars::new(i64::from(n)) {
                Ok(tc) => base.with_tag_chars(tc),
                Err(e) => panic!("vector {} has invalid tag_chars: {e}", self.name),
            },
            None => base,
        }
    }

    pub fn derive(&self) -> String {
        derive(self.uid, self.secret.as_bytes(), &self.options())
    }
}

const fn paired(
    name: &'static str,
    uid: &'static str,
    secret: &'static str,
    tag_chars: Option<u32>,
    separator: &'static str,
    expected: &'static str,
) -> HandleVector {
    HandleVector {
        name,
        uid,
        secret,
        scheme: HandleScheme::Paired,
        tag_chars,
        separator,
        expected,
    }
}

const fn legacy(
    name: &'static str,
    uid: &'static str,
    separator: &'static str,
    expected: &'static str,
) -> HandleVector {
    HandleVector {
        name,
        uid,
        secret: UNIT_TEST_SECRET,
        scheme: HandleScheme::Legacy,
        tag_chars: None,
        separator,
        expected,
    }
}

/// Every handle vector.
pub fn handle_vectors() -> Vec<HandleVector> {
    vec![
        paired("default uid 1", UID_1, UNIT_TEST_SECRET, None, "-", "spéir-mhaorga-shárláidir-6jn3v2cd6xqq"),
        paired("default uid 2", UID_2, UNIT_TEST_SECRET, None, "-", "crann-saibhir-cúramach-5n43ttpht4mc"),
        paired("default uid 3", UID_3, UNIT_TEST_SECRET, None, "-", "étaín-shaibhir-dhraíochta-8whhbxh369t1"),
        paired("default uid 4", UID_4, UNIT_TEST_SECRET, None, "-", "bóthar-fiáin-ceolmhar-1p4tygbryjdc"),
        paired("tag chars 2", UID_1, UNIT_TEST_SECRET, Some(2), "-", "spéir-mhaorga-shárláidir-6j"),
        paired(
            "tag chars 48",
            UID_1,
            UNIT_TEST_SECRET,
            Some(48),
            "-",
            "spéir-mhaorga-shárláidir-6jn3v2cd6xqq28s9e38sp19gceg2vt1c8p1gy53b9tabqsyp",
        ),
        paired("double colon separator", UID_1, UNIT_TEST_SECRET, None, "::", "spéir::mhaorga::shárláidir::6jn3v2cd6xqq"),
        paired("underscore separator", UID_1, UNIT_TEST_SECRET, None, "_", "spéir_mhaorga_shárláidir_6jn3v2cd6xqq"),
        paired("control secret uid 2", UID_2, CONTROL_SECRET, None, "-", "niamh-fhuar-chúramach-qacn46zb97s1"),
        paired("control secret uid 4", UID_4, CONTROL_SECRET, None, "-", "dian cécht-donn-diongbháilte-1742c7ta6rex"),
        legacy("legacy uid 1", UID_1, "-", "manannán-fionnuar-6jn3"),
        legacy("legacy uid 2", UID_2, "-", "boann-sholúbtha-5n43"),
        legacy("legacy uid 3", UID_3, "-", "ogma-ciúin-8whh"),
        legacy("legacy uid 4", UID_4, "-", "oscar-uaillmhianach-1p4t"),
        legacy("legacy underscore", UID_1, "_", "manannán_fionnuar_6jn3"),
        legacy("legacy no separator", UID_1, "", "manannánfionnuar6jn3"),
    ]
}

/// A tag with its expanded bytes and emoji pair.
#[derive(Debug, Clone)]
pub struct AvatarVector {
    pub tag: &'static str,
    pub expanded_hex: &'static str,
    pub emoji: &'static str,
}

pub fn avatar_vectors() -> Vec<AvatarVector> {
    vec![
        AvatarVector {
            tag: "6JN3V2CD6XQQ",
            expanded_hex: "6e28956a703dfd98d6092407779c3bedbc70347d78e645784f52974c734712ad",
            emoji: "🦋✨",
        },
        AvatarVector {
            tag: "5N43TTPHT4MC",
            expanded_hex: "d1b8200805d5310cc6628c3e17aba83cfb62a43bf10beba3afb5154d2eabd652",
            emoji: "🐨✨",
        },
        AvatarVector {
            tag: "8WHHBXH369T1",
            expanded_hex: "bd8d38cc9c2efb67dbd17c4ba8577b3d055181229d9abd0387d277866b4c788a",
            emoji: "🐐⭐",
        },
        AvatarVector {
            tag: "1P4TYGBRYJDC",
            expanded_hex: "68c532826ce5525df1a801c660eb4c6107a4297569e0ba7fe64bc39bd5b46376",
            emoji: "🦀⭐",
        },
        AvatarVector {
            tag: "QACN46ZB97S1",
            expanded_hex: "11fb85e01ab4f4e1f9fbcf2648b0dd8e032852c753ed0296722a6874ddb1995a",
            emoji: "🐴🌊",
        },
    ]
}

/// Check every vector, returning a description of each mismatch.
pub fn verify_all_vectors() -> Vec<String> {
    let mut failures = Vec::new();

    for v in handle_vectors() {
        let got = v.derive();
        if got != v.expected {
            failures.push(format!("{}: expected {}, got {}", v.name, v.expected, got));
        }
    }

    for v in avatar_vectors() {
        let bytes = ExpandedBytes::from_tag(v.tag);
        if bytes.to_hex() != v.expanded_hex {
            failures.push(format!("{}: expanded bytes {}", v.tag, bytes.to_hex()));
        }
        let pair = emoji::emoji_pair(&bytes);
        if pair != v.emoji {
            failures.push(format!("{}: expected {}, got {}", v.tag, v.emoji, pair));
        }
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        let failures = verify_all_vectors();
        assert!(failures.is_empty(), "{failures:#?}");
    }

    #[test]
    fn test_vector_names_unique() {
        let vectors = handle_vectors();
        let mut names: Vec<_> = vectors.iter().map(|v| v.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), vectors.len());
    }
}
