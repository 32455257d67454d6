//! Contact information scoring.

use crate::snapshot::{ResumeSnapshot, present};

/// Score contact information completeness, 0–100.
///
/// Purely additive: +25 each for a non-empty email, phone, location (city or
/// country), and full name. Presence only; values are not validated here.
pub fn score_contact(snapshot: &ResumeSnapshot) -> i32 {
    let mut score = 0;

    if present(&snapshot.email) {
        score += 25;
    }
    if present(&snapshot.phone) {
        score += 25;
    }
    if present(&snapshot.city) || present(&snapshot.country) {
        score += 25;
    }
    if present(&snapshot.full_name) {
        score += 25;
    }

    score
}
