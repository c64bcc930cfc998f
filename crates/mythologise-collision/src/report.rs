//! Tabular collision report over several tag lengths and user counts.

use std::fmt;

use serde::Serialize;

use crate::estimator::{
    birthday_stats, entropy_bits, find_minimum_tag_chars, space_size, LexiconCounts,
};

pub const DEFAULT_USER_COUNTS: &[u64] = &[10_000, 50_000, 100_000, 1_000_000];
pub const DEFAULT_TAG_CHARS: &[u32] = &[4, 6, 8, 12];
pub const DEFAULT_TARGET_PROBABILITY: f64 = 0.01;

/// One `(tag_chars, users)` cell of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub tag_chars: u32,
    pub users: u64,
    pub space_size: f64,
    pub entropy_bits: f64,
    pub expected_colliding_pairs: f64,
    pub p_at_least_one_collision: f64,
}

/// Smallest sufficient tag length for one user count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub users: u64,
    pub min_tag_chars: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCounts {
    pub nouns: u64,
    pub adjectives: u64,
    pub combinations: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollisionReport {
    pub counts: ReportCounts,
    pub target_probability: f64,
    pub rows: Vec<ReportRow>,
    pub recommendations: Vec<Recommendation>,
}

impl CollisionReport {
    /// Rows are ordered by tag length, then user count, as given.
    pub fn build(counts: LexiconCounts, tag_chars: &[u32], users: &[u64], target: f64) -> Self {
        let combinations = counts.combinations();

        let mut rows = Vec::with_capacity(tag_chars.len() * users.len());
        for &tc in tag_chars {
            let space = space_size(combinations, tc);
            let entropy = entropy_bits(space);
            for &n in users {
                let stats = birthday_stats(space, n);
                rows.push(ReportRow {
                    tag_chars: tc,
                    users: n,
                    space_size: space,
                    entropy_bits: entropy,
                    expected_colliding_pairs: stats.expected_colliding_pairs,
                    p_at_least_one_collision: stats.p_at_least_one,
                });
            }
        }

        let recommendations = users
            .iter()
            .map(|&n| Recommendation {
                users: n,
                min_tag_chars: find_minimum_tag_chars(combinations, n, target),
            })
            .collect();

        Self {
            counts: ReportCounts {
                nouns: counts.nouns,
                adjectives: counts.adjectives,
                combinations,
            },
            target_probability: target,
            rows,
            recommendations,
        }
    }
}

fn percent(value: f64) -> String {
    format!("{:.6}%", value * 100.0)
}

fn big(value: f64) -> String {
    if value < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.6e}")
    }
}

impl fmt::Display for CollisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nouns: {}", self.counts.nouns)?;
        writeln!(f, "adjectives: {}", self.counts.adjectives)?;
        writeln!(f, "noun/adjective combinations: {}", self.counts.combinations)?;
        writeln!(
            f,
            "target max collision probability: {}",
            percent(self.target_probability)
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<8} {:<10} {:<18} {:<12} {:<18} expected pairs",
            "tagChars", "users", "spaceSize", "entropyBits", "p(at least one)"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<8} {:<10} {:<18} {:<12} {:<18} {:.6}",
                row.tag_chars,
                row.users,
                big(row.space_size),
                format!("{:.2}", row.entropy_bits),
                percent(row.p_at_least_one_collision),
                row.expected_colliding_pairs,
            )?;
        }
        writeln!(f)?;
        writeln!(f, "recommended minimum tagChars by user count:")?;
        for rec in &self.recommendations {
            match rec.min_tag_chars {
                Some(tc) => writeln!(f, "  users={}: {}", rec.users, tc)?,
                None => writeln!(f, "  users={}: not found", rec.users)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mythologise_core::HandleScheme;

    fn legacy_report() -> CollisionReport {
        CollisionReport::build(
            LexiconCounts::for_scheme(HandleScheme::Legacy),
            DEFAULT_TAG_CHARS,
            DEFAULT_USER_COUNTS,
            DEFAULT_TARGET_PROBABILITY,
        )
    }

    #[test]
    fn test_row_grid() {
        let report = legacy_report();
        assert_eq!(report.rows.len(), 16);
        assert_eq!(report.rows[0].tag_chars, 4);
        assert_eq!(report.rows[0].users, 10_000);
        assert_eq!(report.rows[15].tag_chars, 12);
        assert_eq!(report.rows[15].users, 1_000_000);
        assert_eq!(report.recommendations.len(), 4);
    }

    #[test]
    fn test_probability_falls_with_tag_length() {
        let report = legacy_report();
        let million: Vec<f64> = report
            .rows
            .iter()
            .filter(|r| r.users == 1_000_000)
            .map(|r| r.p_at_least_one_collision)
            .collect();
        assert!(million.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_recommendations_grow_with_users() {
        let report = legacy_report();
        let mins: Vec<u32> = report
            .recommendations
            .iter()
            .map(|r| r.min_tag_chars.unwrap())
            .collect();
        assert!(mins.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(legacy_report()).unwrap();
        assert_eq!(json["counts"]["combinations"], 1250);
        assert_eq!(json["targetProbability"], 0.01);
        assert!(json["rows"][0]["pAtLeastOneCollision"].is_number());
        assert!(json["recommendations"][0]["minTagChars"].is_number());
    }

    #[test]
    fn test_table_text() {
        let text = legacy_report().to_string();
        assert!(text.contains("noun/adjective combinations: 1250"));
        assert!(text.contains("target max collision probability: 1.000000%"));
        assert!(text.contains("recommended minimum tagChars by user count:"));
        assert!(text.contains("  users=10000: "));
    }

    #[test]
    fn test_zero_users_render_as_positive_zero() {
        let report = CollisionReport::build(
            LexiconCounts::for_scheme(HandleScheme::Legacy),
            &[4],
            &[0, 1],
            DEFAULT_TARGET_PROBABILITY,
        );
        let text = report.to_string();
        assert!(!text.contains("-0"), "{text}");
        assert!(text.contains("0.000000%"));
        assert_eq!(report.recommendations[0].min_tag_chars, Some(2));
    }

    #[test]
    fn test_not_found_rendered() {
        let report = CollisionReport::build(LexiconCounts::new(1, 1), &[2], &[u64::MAX], 1e-300);
        assert_eq!(report.recommendations[0].min_tag_chars, None);
        assert!(report.to_string().contains("not found"));
    }
}
