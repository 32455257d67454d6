//! Skills scoring.

use crate::snapshot::{ResumeSnapshot, present};

/// Score the skills section, 0–100.
///
/// No entries scores 0. Otherwise: base 30; +25 for ten or more skills, else
/// +15 for five or more; +20 if any skill has a category; +25 if any skill
/// has a proficiency level. Capped at 100.
pub fn score_skills(snapshot: &ResumeSnapshot) -> i32 {
    let entries = &snapshot.skills;
    if entries.is_empty() {
        return 0;
    }

    let mut score = 30;

    if entries.len() >= 10 {
        score += 25;
    } else if entries.len() >= 5 {
        score += 15;
    }

    if entries.iter().any(|s| present(&s.category)) {
        score += 20;
    }
    if entries.iter().any(|s| present(&s.level)) {
        score += 25;
    }

    score.min(100)
}
