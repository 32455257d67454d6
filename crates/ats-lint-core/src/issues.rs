//! Formatting issue detection.
//!
//! Separate from the formatting score: reports discrete issues about the
//! stringified resume data instead of folding them into a number.

use crate::report::{FormattingIssue, IssueKind, IssueSeverity};
use crate::snapshot::ResumeSnapshot;

/// Section names every resume is expected to mention, in report order.
const REQUIRED_SECTIONS: &[&str] = &["summary", "experience", "education", "skills"];

/// Check the stringified resume data for formatting issues.
///
/// Emits a warning when the dump is under 500 characters, an info when over
/// 10000, and one warning naming any of the required section words absent
/// from the dump (case-insensitive substring check).
#[tracing::instrument(skip_all)]
pub fn check_formatting_issues(snapshot: &ResumeSnapshot) -> Vec<FormattingIssue> {
    let text = snapshot.stringified();
    let mut issues = Vec::new();

    let length = text.chars().count();
    if length < 500 {
        issues.push(FormattingIssue {
            kind: IssueKind::ContentLength,
            message: "Resume content appears too short".to_string(),
            severity: IssueSeverity::Warning,
        });
    } else if length > 10000 {
        issues.push(FormattingIssue {
            kind: IssueKind::ContentLength,
            message: "Resume content may be too long".to_string(),
            severity: IssueSeverity::Info,
        });
    }

    let lower = text.to_lowercase();
    let missing: Vec<&str> = REQUIRED_SECTIONS
        .iter()
        .filter(|section| !lower.contains(**section))
        .copied()
        .collect();
    if !missing.is_empty() {
        issues.push(FormattingIssue {
            kind: IssueKind::MissingSections,
            message: format!("Missing sections: {}", missing.join(", ")),
            severity: IssueSeverity::Warning,
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Experience;

    #[test]
    fn sparse_resume_flags_short_content() {
        let issues = check_formatting_issues(&ResumeSnapshot::default());
        assert!(issues
            .iter()
            .any(|i| i.kind == IssueKind::ContentLength && i.severity == IssueSeverity::Warning));
    }

    #[test]
    fn section_names_come_from_the_field_names() {
        // The JSON dump always carries the field names, so the section check
        // passes even for an empty snapshot. Preserved from the heuristic's
        // original behavior.
        let issues = check_formatting_issues(&ResumeSnapshot::default());
        assert!(!issues.iter().any(|i| i.kind == IssueKind::MissingSections));
    }

    #[test]
    fn long_resume_flags_info() {
        let snapshot = ResumeSnapshot {
            experiences: vec![Experience {
                description: Some("very long description ".repeat(600)),
                ..Experience::default()
            }],
            ..ResumeSnapshot::default()
        };
        let issues = check_formatting_issues(&snapshot);
        assert!(issues
            .iter()
            .any(|i| i.kind == IssueKind::ContentLength && i.severity == IssueSeverity::Info));
    }

    #[test]
    fn midsize_resume_has_no_length_issue() {
        let snapshot = ResumeSnapshot {
            summary: Some("steady work history ".repeat(30)),
            ..ResumeSnapshot::default()
        };
        let issues = check_formatting_issues(&snapshot);
        assert!(!issues.iter().any(|i| i.kind == IssueKind::ContentLength));
    }
}
