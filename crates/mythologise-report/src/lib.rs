//! # Mythologise Report
//!
//! Builds the collision report printed by the `mythologise-report` binary.

pub mod cli;
pub mod logging;
pub mod source;

use std::fs;

use anyhow::{bail, Context, Result};
use mythologise_collision::{CollisionReport, LexiconCounts};
use mythologise_core::HandleScheme;
use serde::Serialize;
use tracing::info;

use crate::cli::ReportCli;
use crate::source::ParsedLexicon;

const BUILTIN_SOURCE: &str = "built-in lexicon";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportOutput<'a> {
    source: &'a str,
    scheme: HandleScheme,
    #[serde(flatten)]
    report: &'a CollisionReport,
}

/// Build the report for `cli` and format it as text or JSON.
pub fn run(cli: &ReportCli) -> Result<String> {
    let scheme = HandleScheme::from(cli.scheme);

    let (source, counts) = match &cli.source {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let parsed = ParsedLexicon::parse(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            let counts = parsed.counts(scheme);
            if counts.combinations() == 0 {
                bail!(
                    "parsed invalid counts from {} (nouns={}, adjectives={}); the {} scheme needs at least one of each",
                    path.display(),
                    counts.nouns,
                    counts.adjectives,
                    scheme_name(scheme),
                );
            }
            (path.display().to_string(), counts)
        }
        None => (BUILTIN_SOURCE.to_string(), LexiconCounts::for_scheme(scheme)),
    };

    info!(
        nouns = counts.nouns,
        adjectives = counts.adjectives,
        ?scheme,
        "building collision report"
    );

    let report = CollisionReport::build(counts, &cli.tag_chars, &cli.users, cli.target_prob);

    if cli.json {
        let output = ReportOutput {
            source: &source,
            scheme,
            report: &report,
        };
        return serde_json::to_string_pretty(&output).context("failed to serialize report");
    }

    Ok(format!(
        "mythologise collision report\nsource: {source}\nscheme: {}\n{report}",
        scheme_name(scheme),
    ))
}

fn scheme_name(scheme: HandleScheme) -> &'static str {
    match scheme {
        HandleScheme::Paired => "paired",
        HandleScheme::Legacy => "legacy",
    }
}
