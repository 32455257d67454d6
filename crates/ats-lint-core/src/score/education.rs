//! Education scoring.

use crate::snapshot::{ResumeSnapshot, present};

/// Score the education section, 0–100.
///
/// No entries scores 0. Otherwise: base 40; +30 if any entry names a degree;
/// +20 if any entry names an institution. Capped at 100.
pub fn score_education(snapshot: &ResumeSnapshot) -> i32 {
    let entries = &snapshot.education;
    if entries.is_empty() {
        return 0;
    }

    let mut score = 40;

    if entries.iter().any(|e| present(&e.degree)) {
        score += 30;
    }
    if entries.iter().any(|e| present(&e.institution)) {
        score += 20;
    }

    score.min(100)
}
