//! Professional summary scoring.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;

use crate::keywords::ACTION_VERBS;
use crate::snapshot::ResumeSnapshot;

/// Case-insensitive substring matcher over the first five action verbs.
static LEAD_VERBS: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(&ACTION_VERBS[..5])
        .expect("valid patterns")
});

/// Score the professional summary, 0–100.
///
/// An absent or empty summary scores 0. Otherwise: base 30; one length bonus,
/// with the inclusive range checked before the overflow branch (+25 for
/// 100–500 chars, else +15 for over 500); +20 if any of the first five action
/// verbs appears as a case-insensitive substring; −10 if the summary does not
/// end with a period. Clamped to 0–100.
pub fn score_summary(snapshot: &ResumeSnapshot) -> i32 {
    let Some(summary) = snapshot.summary.as_deref().filter(|s| !s.is_empty()) else {
        return 0;
    };

    let mut score = 30;

    let length = summary.chars().count();
    if (100..=500).contains(&length) {
        score += 25;
    } else if length > 500 {
        score += 15;
    }

    if LEAD_VERBS.is_match(summary) {
        score += 20;
    }

    if !summary.ends_with('.') {
        score -= 10;
    }

    score.clamp(0, 100)
}
