//! Resume scoring.
//!
//! Decomposes ATS compatibility into six independent section checks, each a
//! pure function in its own module, orchestrated by [`analyze`]. Callers can
//! also invoke sections individually.

pub mod contact;
pub mod education;
pub mod experience;
pub mod formatting;
pub mod skills;
pub mod summary;

pub use contact::score_contact;
pub use education::score_education;
pub use experience::score_experience;
pub use formatting::score_formatting;
pub use skills::score_skills;
pub use summary::score_summary;

use crate::issues;
use crate::matcher;
use crate::report::{AnalysisReport, SectionScores};
use crate::snapshot::ResumeSnapshot;
use crate::suggest;

/// Score all six sections of a snapshot.
pub fn score_sections(snapshot: &ResumeSnapshot) -> SectionScores {
    SectionScores {
        contact_info: score_contact(snapshot),
        summary: score_summary(snapshot),
        experience: score_experience(snapshot),
        education: score_education(snapshot),
        skills: score_skills(snapshot),
        formatting: score_formatting(snapshot),
    }
}

/// Run the full ATS analysis.
///
/// Pure over its inputs: scores the six sections, matches keywords against
/// the job description (pass an empty string when there is none), collects
/// formatting issues, and generates suggestions. The overall score is the
/// floor of the six-section average.
#[tracing::instrument(skip_all, fields(jd_len = job_description.len()))]
pub fn analyze(snapshot: &ResumeSnapshot, job_description: &str) -> AnalysisReport {
    let section_scores = score_sections(snapshot);
    let keyword_analysis = matcher::analyze_keywords(snapshot, job_description);
    let suggestions = suggest::generate_suggestions(&section_scores, &keyword_analysis);
    let formatting_issues = issues::check_formatting_issues(snapshot);

    AnalysisReport {
        overall_score: section_scores.overall(),
        section_scores,
        keywords: keyword_analysis.matched.clone(),
        missing_keywords: keyword_analysis.missing.clone(),
        suggestions,
        formatting_issues,
        keyword_analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn contact_only_resume_scores_33() {
        let snapshot = ResumeSnapshot {
            email: Some("a@b.com".into()),
            phone: Some("555-1234".into()),
            city: Some("NYC".into()),
            full_name: Some("Jane Doe".into()),
            ..ResumeSnapshot::default()
        };
        let report = analyze(&snapshot, "");

        assert_eq!(report.section_scores.contact_info, 100);
        assert_eq!(report.section_scores.summary, 0);
        assert_eq!(report.section_scores.experience, 0);
        assert_eq!(report.section_scores.education, 0);
        assert_eq!(report.section_scores.skills, 0);
        assert_eq!(report.section_scores.formatting, 100);
        // floor((100 + 0 + 0 + 0 + 0 + 100) / 6)
        assert_eq!(report.overall_score, 33);
    }

    #[test]
    fn report_mirrors_keyword_analysis() {
        let snapshot = ResumeSnapshot {
            summary: Some("Led docker and aws rollouts across teams.".into()),
            ..ResumeSnapshot::default()
        };
        let report = analyze(&snapshot, "docker kubernetes");
        assert_eq!(report.keywords, report.keyword_analysis.matched);
        assert_eq!(report.missing_keywords, report.keyword_analysis.missing);
        assert!(report.keywords.contains("docker"));
        assert!(report.missing_keywords.contains("kubernetes"));
    }

    #[test]
    fn empty_job_description_still_produces_full_report() {
        let report = analyze(&ResumeSnapshot::default(), "");
        assert_eq!(report.keyword_analysis.match_rate, 0.0);
        // The two always-on content suggestions plus the weak-section ones.
        assert!(report.suggestions.len() >= 2);
    }

    proptest! {
        #[test]
        fn overall_is_floor_of_six_way_average(
            contact_info in 0..=100i32,
            summary in 0..=100i32,
            experience in 0..=100i32,
            education in 0..=100i32,
            skills in 0..=100i32,
            formatting in 0..=100i32,
        ) {
            let scores = SectionScores {
                contact_info,
                summary,
                experience,
                education,
                skills,
                formatting,
            };
            let expected = (f64::from(scores.total()) / 6.0).floor() as i32;
            prop_assert_eq!(scores.overall(), expected);
        }
    }
}
