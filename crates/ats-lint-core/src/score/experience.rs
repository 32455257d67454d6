//! Work experience scoring.

use std::sync::LazyLock;

use regex::Regex;

use crate::snapshot::{ResumeSnapshot, present};

/// Regex for quantified achievements: percentages, dollar amounts, or
/// durations in years/months.
static ACHIEVEMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+%|\$\d+|\d+\s*(?:years?|months?)").expect("valid regex"));

/// Score the work experience section, 0–100.
///
/// No entries scores 0. Otherwise: base 30; +20 for two or more entries, else
/// +10 for one; +25 when the number of entries with non-empty descriptions
/// reaches half the entry count (integer division, so a single entry passes
/// even without a description); +25 when any description contains a
/// quantified achievement. Capped at 100; the minimum reachable is 30.
pub fn score_experience(snapshot: &ResumeSnapshot) -> i32 {
    let entries = &snapshot.experiences;
    if entries.is_empty() {
        return 0;
    }

    let mut score = 30;

    if entries.len() >= 2 {
        score += 20;
    } else {
        score += 10;
    }

    let described = entries.iter().filter(|e| present(&e.description)).count();
    if described >= entries.len() / 2 {
        score += 25;
    }

    let quantified = entries
        .iter()
        .filter_map(|e| e.description.as_deref())
        .any(|d| ACHIEVEMENT_PATTERN.is_match(d));
    if quantified {
        score += 25;
    }

    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Experience;

    fn entry(description: Option<&str>) -> Experience {
        Experience {
            company: Some("Acme".into()),
            position: Some("Engineer".into()),
            description: description.map(String::from),
            ..Experience::default()
        }
    }

    fn with_entries(entries: Vec<Experience>) -> ResumeSnapshot {
        ResumeSnapshot {
            experiences: entries,
            ..ResumeSnapshot::default()
        }
    }

    #[test]
    fn no_entries_scores_0() {
        assert_eq!(score_experience(&ResumeSnapshot::default()), 0);
    }

    #[test]
    fn single_entry_without_description() {
        // 30 + 10, and 0 described >= 1/2 = 0 entries, so +25.
        let s = with_entries(vec![entry(None)]);
        assert_eq!(score_experience(&s), 65);
    }

    #[test]
    fn two_entries_with_descriptions() {
        let s = with_entries(vec![
            entry(Some("Maintained internal tooling")),
            entry(Some("Ran support rotations")),
        ]);
        // 30 + 20 + 25, no quantified achievements.
        assert_eq!(score_experience(&s), 75);
    }

    #[test]
    fn percentage_adds_achievement_bonus() {
        let plain = with_entries(vec![
            entry(Some("Improved throughput a lot")),
            entry(Some("Reduced costs substantially")),
        ]);
        let quantified = with_entries(vec![
            entry(Some("Improved throughput 50%")),
            entry(Some("Reduced costs 50%")),
        ]);
        let plain_score = score_experience(&plain);
        let quantified_score = score_experience(&quantified);
        assert_eq!(quantified_score, 100);
        assert!(quantified_score >= plain_score + 25);
    }

    #[test]
    fn dollar_amount_counts_as_achievement() {
        let s = with_entries(vec![entry(Some("Closed $400k in new business"))]);
        // 30 + 10 + 25 + 25.
        assert_eq!(score_experience(&s), 90);
    }

    #[test]
    fn duration_counts_as_achievement() {
        let s = with_entries(vec![entry(Some("Shipped the rewrite in 6 months"))]);
        assert_eq!(score_experience(&s), 90);
    }

    #[test]
    fn caps_at_100() {
        let s = with_entries(vec![
            entry(Some("Grew revenue 30%")),
            entry(Some("Saved $100k")),
            entry(Some("Led team for 3 years")),
        ]);
        assert_eq!(score_experience(&s), 100);
    }
}
