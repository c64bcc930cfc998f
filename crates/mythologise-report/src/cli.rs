//! # CLI Interface
//!
//! Command-line arguments for `mythologise-report`, using `clap` derive.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use mythologise_core::{HandleScheme, MAX_TAG_CHARS, MIN_TAG_CHARS};

use crate::logging::LogFormat;

/// Collision report for mythologise handles.
///
/// Prints, for each tag length and user count, the size of the handle space,
/// its entropy and the chance that two users share a handle, followed by the
/// shortest tag that keeps that chance under the target.
#[derive(Parser, Debug)]
#[command(name = "mythologise-report", version, about = "Collision report for mythologise handles")]
pub struct ReportCli {
    /// Comma-separated user counts.
    #[arg(long, value_delimiter = ',', default_value = "10000,50000,100000,1000000")]
    pub users: Vec<u64>,

    /// Comma-separated tag lengths, each between 2 and 48.
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "4,6,8,12",
        value_parser = clap::value_parser!(u32).range(MIN_TAG_CHARS as i64..=MAX_TAG_CHARS as i64)
    )]
    pub tag_chars: Vec<u32>,

    /// Target maximum collision probability, strictly between 0 and 1.
    #[arg(long, default_value_t = 0.01, value_parser = parse_probability)]
    pub target_prob: f64,

    /// Handle layout to size.
    #[arg(long, value_enum, default_value_t = SchemeArg::Paired)]
    pub scheme: SchemeArg,

    /// Count words from a lexicon source file instead of the built-in lists.
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Print machine-readable JSON.
    #[arg(long)]
    pub json: bool,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Default log level when `RUST_LOG` is unset.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemeArg {
    Paired,
    Legacy,
}

impl From<SchemeArg> for HandleScheme {
    fn from(value: SchemeArg) -> Self {
        match value {
            SchemeArg::Paired => HandleScheme::Paired,
            SchemeArg::Legacy => HandleScheme::Legacy,
        }
    }
}

fn parse_probability(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("not a number: {raw}"))?;
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err("must be a decimal between 0 and 1 (exclusive)".to_string());
    }
    Ok(value)
}
