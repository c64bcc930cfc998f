//! The frozen word lists that handles are built from.
//!
//! **CRITICAL**: these lists are APPEND ONLY. A handle is a function of list
//! *positions*, so reordering, removing or editing an entry renames every
//! user whose digest lands on it. New words go at the end of a list, never
//! in the middle.
//!
//! The first [`LEGACY_NOUN_COUNT`] nouns and first [`LEGACY_ADJECTIVE_COUNT`]
//! adjectives are the lists the legacy scheme was published with. That
//! scheme indexes only this prefix, so appending never disturbs it.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

use crate::inflection::lenite;

/// Grammatical gender of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    /// Single-letter code used in fingerprint rows.
    pub const fn code(self) -> &'static str {
        match self {
            Gender::Masculine => "m",
            Gender::Feminine => "f",
        }
    }
}

/// Semantic category of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NounCategory {
    Mythological,
    Nature,
    Place,
}

impl NounCategory {
    pub const fn code(self) -> &'static str {
        match self {
            NounCategory::Mythological => "myth",
            NounCategory::Nature => "nature",
            NounCategory::Place => "place",
        }
    }
}

/// Position an adjective takes in a paired handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjectiveRole {
    /// Plain descriptive adjective, first after the noun.
    Core,
    /// Second adjective; often derived or prefixed.
    Qualifier,
}

impl AdjectiveRole {
    pub const fn code(self) -> &'static str {
        match self {
            AdjectiveRole::Core => "core",
            AdjectiveRole::Qualifier => "qualifier",
        }
    }
}

/// A noun and its grammatical tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NounEntry {
    pub word: &'static str,
    pub gender: Gender,
    pub category: NounCategory,
}

/// An adjective lemma, its role, and an optional irregular feminine form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdjectiveEntry {
    pub lemma: &'static str,
    pub role: AdjectiveRole,
    pub feminine_form: Option<&'static str>,
}

impl AdjectiveEntry {
    /// The form that agrees with a noun of the given gender.
    ///
    /// Feminine nouns take the explicit irregular form when the entry has
    /// one, otherwise the lenited lemma.
    pub fn inflect_for(&self, gender: Gender) -> String {
        match gender {
            Gender::Masculine => self.lemma.to_string(),
            Gender::Feminine => match self.feminine_form {
                Some(form) => form.to_string(),
                None => lenite(self.lemma),
            },
        }
    }
}

const fn noun(word: &'static str, gender: Gender, category: NounCategory) -> NounEntry {
    NounEntry {
        word,
        gender,
        category,
    }
}

const fn core(lemma: &'static str) -> AdjectiveEntry {
    AdjectiveEntry {
        lemma,
        role: AdjectiveRole::Core,
        feminine_form: None,
    }
}

const fn qual(lemma: &'static str) -> AdjectiveEntry {
    AdjectiveEntry {
        lemma,
        role: AdjectiveRole::Qualifier,
        feminine_form: None,
    }
}

use Gender::{Feminine as F, Masculine as M};
use NounCategory::{Mythological as Myth, Nature, Place};

/// Nouns. APPEND ONLY.
pub static NOUNS: &[NounEntry] = &[
    // Mythology (gender of the figure in Irish tradition)
    noun("Bríd", F, Myth),
    noun("Áine", F, Myth),
    noun("Ériu", F, Myth),
    noun("Banba", F, Myth),
    noun("Fódla", F, Myth),
    noun("Mórrígan", F, Myth),
    noun("Badhbh", F, Myth),
    noun("Boann", F, Myth),
    noun("Gráinne", F, Myth),
    noun("Deirdre", F, Myth),
    noun("Niamh", F, Myth),
    noun("Scáthach", F, Myth),
    noun("Lugh", M, Myth),
    noun("An Dagda", M, Myth),
    noun("Nuada", M, Myth),
    noun("Aonghus", M, Myth),
    noun("Manannán", M, Myth),
    noun("Goibniu", M, Myth),
    noun("Ogma", M, Myth),
    noun("Balor", M, Myth),
    noun("Fionn", M, Myth),
    noun("Oisín", M, Myth),
    noun("Oscar", M, Myth),
    noun("Diarmaid", M, Myth),
    noun("Cú Chulainn", M, Myth),
    // Nature
    noun("Abhainn", F, Nature),
    noun("Coill", F, Nature),
    noun("Gaoth", F, Nature),
    noun("Grian", F, Nature),
    noun("Gealach", F, Nature),
    noun("Réalt", F, Nature),
    noun("Oíche", F, Nature),
    noun("Trá", F, Nature),
    noun("Bá", F, Nature),
    noun("Cloch", F, Nature),
    noun("Loch", M, Nature),
    noun("Sliabh", M, Nature),
    noun("Gleann", M, Nature),
    noun("Cnoc", M, Nature),
    noun("Crann", M, Nature),
    noun("Féar", M, Nature),
    noun("Ceo", M, Nature),
    noun("Sneachta", M, Nature),
    noun("Lá", M, Nature),
    // Places
    noun("Inis", F, Place),
    noun("Cathair", F, Place),
    noun("Dún", M, Place),
    noun("Caisleán", M, Place),
    noun("Túr", M, Place),
    noun("Tobar", M, Place),
    // ---- end of the legacy prefix ----
    noun("Étaín", F, Myth),
    noun("Medb", F, Myth),
    noun("Macha", F, Myth),
    noun("Fand", F, Myth),
    noun("Clíodhna", F, Myth),
    noun("Danu", F, Myth),
    noun("Eimear", F, Myth),
    noun("Cian", M, Myth),
    noun("Midir", M, Myth),
    noun("Dian Cécht", M, Myth),
    noun("Bres", M, Myth),
    noun("Conchobar", M, Myth),
    noun("Fergus", M, Myth),
    noun("Lir", M, Myth),
    noun("Amergin", M, Myth),
    noun("Farraige", F, Nature),
    noun("Spéir", F, Nature),
    noun("Báisteach", F, Nature),
    noun("Tonn", F, Nature),
    noun("Fuinseog", F, Nature),
    noun("Dair", F, Nature),
    noun("Beith", F, Nature),
    noun("Sceach", F, Nature),
    noun("Eala", F, Nature),
    noun("Fáinleog", F, Nature),
    noun("Lacha", F, Nature),
    noun("Carraig", F, Nature),
    noun("Tintreach", F, Nature),
    noun("Toirneach", F, Nature),
    noun("Iolar", M, Nature),
    noun("Seabhac", M, Nature),
    noun("Fiach", M, Nature),
    noun("Broc", M, Nature),
    noun("Dobharchú", M, Nature),
    noun("Iora", M, Nature),
    noun("Giorria", M, Nature),
    noun("Bradán", M, Nature),
    noun("Fia", M, Nature),
    noun("Cat", M, Nature),
    noun("Iúr", M, Nature),
    noun("Cuileann", M, Nature),
    noun("Aiteann", M, Nature),
    noun("Fraoch", M, Nature),
    noun("Néal", M, Nature),
    noun("Sruth", M, Nature),
    noun("Eas", M, Nature),
    noun("Cuan", M, Nature),
    noun("Oileán", M, Nature),
    noun("Portach", M, Nature),
    noun("Sráid", F, Place),
    noun("Cill", F, Place),
    noun("Mainistir", F, Place),
    noun("Cearnóg", F, Place),
    noun("Baile", M, Place),
    noun("Bóthar", M, Place),
    noun("Droichead", M, Place),
    noun("Teach", M, Place),
    noun("Áras", M, Place),
    noun("Seanchaisleán", M, Place),
];

/// Adjectives. APPEND ONLY.
pub static ADJECTIVES: &[AdjectiveEntry] = &[
    core("ciúin"),
    core("dána"),
    core("cróga"),
    core("geal"),
    core("glan"),
    core("láidir"),
    core("tapa"),
    core("glic"),
    core("cliste"),
    qual("ceolmhar"),
    qual("misniúil"),
    qual("spraíúil"),
    qual("seiftiúil"),
    core("maorga"),
    core("fial"),
    core("séimh"),
    qual("síochánta"),
    core("dílis"),
    core("ionraic"),
    qual("uaillmhianach"),
    qual("solúbtha"),
    core("críonna"),
    core("beo"),
    core("fíor"),
    qual("fionnuar"),
    // ---- end of the legacy prefix ----
    core("ard"),
    core("fuar"),
    core("nua"),
    core("réidh"),
    core("uasal"),
    core("fiáin"),
    core("ceansa"),
    core("bán"),
    core("dubh"),
    core("rua"),
    core("glas"),
    core("donn"),
    core("óg"),
    core("saibhir"),
    core("sona"),
    core("álainn"),
    core("breá"),
    qual("uaibhreach"),
    qual("uaigneach"),
    qual("grinniúil"),
    qual("lonrach"),
    qual("taitneamhach"),
    qual("cairdiúil"),
    qual("fuinniúil"),
    qual("meidhreach"),
    qual("gealgháireach"),
    qual("ealaíonta"),
    qual("diongbháilte"),
    qual("stuama"),
    qual("cúramach"),
    qual("draíochta"),
    qual("fíorthapa"),
    qual("fíorchiúin"),
    qual("sárláidir"),
    qual("róghlic"),
    qual("fíorghlan"),
];

/// Number of nouns. Exported for collision sizing.
pub const NOUN_COUNT: usize = 109;

/// Number of adjectives across both roles. Exported for collision sizing.
pub const ADJECTIVE_COUNT: usize = 61;

/// Nouns visible to the legacy scheme.
pub const LEGACY_NOUN_COUNT: usize = 50;

/// Adjectives visible to the legacy scheme.
pub const LEGACY_ADJECTIVE_COUNT: usize = 25;

/// Prefixes that intensify an adjective without changing its root.
pub const INTENSIFYING_PREFIXES: &[&str] = &["fíor", "sár", "ró"];

/// Role-partitioned view over [`ADJECTIVES`], preserving list order.
pub struct Lexicon {
    pub nouns: &'static [NounEntry],
    pub core: Vec<&'static AdjectiveEntry>,
    pub qualifiers: Vec<&'static AdjectiveEntry>,
}

static LEXICON: LazyLock<Lexicon> = LazyLock::new(|| Lexicon {
    nouns: NOUNS,
    core: ADJECTIVES
        .iter()
        .filter(|a| a.role == AdjectiveRole::Core)
        .collect(),
    qualifiers: ADJECTIVES
        .iter()
        .filter(|a| a.role == AdjectiveRole::Qualifier)
        .collect(),
});

/// The process-wide lexicon.
pub fn lexicon() -> &'static Lexicon {
    &LEXICON
}

/// Strip an intensifying prefix and its lenition to recover the root.
///
/// `fíorthapa` and `tapa` share the root `tapa`. A prefix is only stripped
/// when at least three letters remain, so `fíor` stays `fíor`.
pub fn adjective_root(lemma: &str) -> String {
    let lower = lemma.to_lowercase();
    for prefix in INTENSIFYING_PREFIXES {
        if let Some(rest) = lower.strip_prefix(prefix) {
            if rest.chars().count() >= 3 {
                return delenite(rest);
            }
        }
    }
    lower
}

fn delenite(word: &str) -> String {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some('h')) if crate::inflection::LENITABLE.contains(&first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first);
            out.extend(chars);
            out
        }
        _ => word.to_string(),
    }
}

/// Number of (core, qualifier) pairs whose roots differ.
///
/// A pair with equal roots never appears in a handle (the qualifier is
/// advanced past it), so these are the pairs a handle can actually show.
pub fn eligible_adjective_pairs(core: &[&str], qualifiers: &[&str]) -> u64 {
    let core_roots: Vec<String> = core.iter().map(|c| adjective_root(c)).collect();
    let qual_roots: Vec<String> = qualifiers.iter().map(|q| adjective_root(q)).collect();
    core_roots
        .iter()
        .map(|c| qual_roots.iter().filter(|q| *q != c).count() as u64)
        .sum()
}

impl Lexicon {
    /// Eligible adjective pairs for the built-in lists.
    pub fn eligible_pairs(&self) -> u64 {
        let core: Vec<&str> = self.core.iter().map(|a| a.lemma).collect();
        let qualifiers: Vec<&str> = self.qualifiers.iter().map(|a| a.lemma).collect();
        eligible_adjective_pairs(&core, &qualifiers)
    }
}

/// SHA-256 fingerprints of the noun and adjective lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexiconFingerprint {
    pub nouns: String,
    pub adjectives: String,
}

/// Fingerprint both lists so tests can pin order and content.
///
/// Rows are `word|gender|category` and `lemma|role|feminine`, joined by `\n`.
pub fn fingerprint() -> LexiconFingerprint {
    let noun_rows: Vec<String> = NOUNS
        .iter()
        .map(|n| format!("{}|{}|{}", n.word, n.gender.code(), n.category.code()))
        .collect();
    let adjective_rows: Vec<String> = ADJECTIVES
        .iter()
        .map(|a| {
            format!(
                "{}|{}|{}",
                a.lemma,
                a.role.code(),
                a.feminine_form.unwrap_or("")
            )
        })
        .collect();
    LexiconFingerprint {
        nouns: hash_rows(&noun_rows),
        adjectives: hash_rows(&adjective_rows),
    }
}

fn hash_rows(rows: &[String]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(rows.join("\n").as_bytes());
    hex::encode(hasher.finalize())
}
