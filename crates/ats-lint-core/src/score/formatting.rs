//! Formatting scoring.
//!
//! Operates on the stringified snapshot rather than real document structure.
//! A known weak proxy: kept as-is because changing it would shift scores for
//! existing resumes.

use crate::snapshot::ResumeSnapshot;

/// Section header words that ATS parsers recognize, checked verbatim.
const HEADER_WORDS: &[&str] = &["Experience", "Education", "Skills", "Summary"];

/// Score formatting, 0–100.
///
/// Starts at 100; −30 if the stringified resume data contains "table"
/// case-insensitively (tables confuse ATS parsers); +10 if any recognized
/// section header word appears verbatim. Clamped to 0–100.
pub fn score_formatting(snapshot: &ResumeSnapshot) -> i32 {
    let text = snapshot.stringified();
    let mut score = 100;

    if text.to_lowercase().contains("table") {
        score -= 30;
    }

    if HEADER_WORDS.iter().any(|h| text.contains(h)) {
        score += 10;
    }

    score.clamp(0, 100)
}
