//! # Mythologise Collision
//!
//! Offline sizing analysis for handle tags.
//!
//! A handle space holds `combinations * 32^tag_chars` values. For `n` users
//! the expected number of colliding pairs is `n(n-1) / 2·space`, and the
//! chance of at least one collision is `1 - e^-lambda`. This crate computes
//! both and searches for the shortest tag meeting a target probability.

pub mod estimator;
pub mod report;

pub use estimator::{
    birthday_stats, entropy_bits, find_minimum_tag_chars, space_size, BirthdayStats,
    LexiconCounts,
};
pub use report::{
    CollisionReport, Recommendation, ReportCounts, ReportRow, DEFAULT_TAG_CHARS,
    DEFAULT_TARGET_PROBABILITY, DEFAULT_USER_COUNTS,
};
