//! Word counts read from lexicon source text.
//!
//! Entries are the `noun("...")`, `core("...")` and `qual("...")` rows of
//! the `NOUNS` and `ADJECTIVES` tables. Comment lines are skipped.

use anyhow::{bail, Context, Result};
use mythologise_core::lexicon::{LEGACY_ADJECTIVE_COUNT, LEGACY_NOUN_COUNT};
use mythologise_core::{eligible_adjective_pairs, HandleScheme};
use mythologise_collision::LexiconCounts;

/// Words found in a lexicon source, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLexicon {
    pub nouns: Vec<String>,
    /// `(lemma, is_core)` in table order.
    pub adjectives: Vec<(String, bool)>,
}

impl ParsedLexicon {
    pub fn parse(source: &str) -> Result<Self> {
        let nouns_body = table_body(source, "NOUNS")?;
        let adjectives_body = table_body(source, "ADJECTIVES")?;

        let nouns: Vec<String> = nouns_body
            .lines()
            .filter_map(|line| quoted_arg(line, "noun("))
            .collect();

        let adjectives: Vec<(String, bool)> = adjectives_body
            .lines()
            .filter_map(|line| {
                quoted_arg(line, "core(")
                    .map(|lemma| (lemma, true))
                    .or_else(|| quoted_arg(line, "qual(").map(|lemma| (lemma, false)))
            })
            .collect();

        if nouns.is_empty() || adjectives.is_empty() {
            bail!(
                "parsed invalid counts from source (nouns={}, adjectives={}); check the NOUNS/ADJECTIVES table shape",
                nouns.len(),
                adjectives.len()
            );
        }

        Ok(Self { nouns, adjectives })
    }

    /// Counts for sizing `scheme` over these words.
    pub fn counts(&self, scheme: HandleScheme) -> LexiconCounts {
        match scheme {
            HandleScheme::Paired => {
                let core: Vec<&str> = self.lemmas(true);
                let qualifiers: Vec<&str> = self.lemmas(false);
                LexiconCounts::new(
                    self.nouns.len() as u64,
                    eligible_adjective_pairs(&core, &qualifiers),
                )
            }
            HandleScheme::Legacy => LexiconCounts::new(
                self.nouns.len().min(LEGACY_NOUN_COUNT) as u64,
                self.adjectives.len().min(LEGACY_ADJECTIVE_COUNT) as u64,
            ),
        }
    }

    fn lemmas(&self, core: bool) -> Vec<&str> {
        self.adjectives
            .iter()
            .filter(|(_, is_core)| *is_core == core)
            .map(|(lemma, _)| lemma.as_str())
            .collect()
    }
}

/// Text between the `[` opening `static NAME` and its matching `];`.
fn table_body<'a>(source: &'a str, name: &str) -> Result<&'a str> {
    let marker = format!("static {name}");
    let start = source
        .find(&marker)
        .with_context(|| format!("could not find `{marker}` in source"))?;
    let rest = &source[start..];
    let open = rest
        .find("= &[")
        .with_context(|| format!("could not find the start of {name}"))?
        + "= &[".len();
    let close = rest[open..]
        .find("\n];")
        .with_context(|| format!("could not find the end of {name}"))?;
    Ok(&rest[open..open + close])
}

/// The first string literal of a `prefix"..."` row.
fn quoted_arg(line: &str, prefix: &str) -> Option<String> {
    let line = line.trim_start();
    if line.starts_with("//") {
        return None;
    }
    let rest = line.strip_prefix(prefix)?.strip_prefix('"')?;
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}
