//! Resume snapshot types.
//!
//! A [`ResumeSnapshot`] is a flattened, immutable view of one resume's
//! content: contact fields, a free-text summary, and ordered sequences of
//! experience, education, skill, project, and certification entries. It is
//! the sole input to scoring and is never mutated by it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{SnapshotError, SnapshotResult};

/// Flattened view of one resume's content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ResumeSnapshot {
    /// Candidate's full name.
    pub full_name: Option<String>,
    /// Contact email address.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// City of residence.
    pub city: Option<String>,
    /// Country of residence.
    pub country: Option<String>,
    /// Free-text professional summary.
    pub summary: Option<String>,
    /// Work experience entries, in resume order.
    pub experiences: Vec<Experience>,
    /// Education entries, in resume order.
    pub education: Vec<Education>,
    /// Skill entries, in resume order.
    pub skills: Vec<Skill>,
    /// Project entries, in resume order.
    pub projects: Vec<Project>,
    /// Certification entries, in resume order.
    pub certifications: Vec<Certification>,
}

/// One work experience entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Experience {
    /// Employer name.
    pub company: Option<String>,
    /// Job title.
    pub position: Option<String>,
    /// Work location.
    pub location: Option<String>,
    /// Start date, free-form.
    pub start_date: Option<String>,
    /// End date, free-form ("Present" for current roles).
    pub end_date: Option<String>,
    /// Whether this is the current role.
    pub is_current: bool,
    /// Free-text description of responsibilities and achievements.
    pub description: Option<String>,
}

/// One education entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Education {
    /// School or university name.
    pub institution: Option<String>,
    /// Degree earned.
    pub degree: Option<String>,
    /// Field of study.
    pub field_of_study: Option<String>,
    /// Grade point average, free-form.
    pub gpa: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
}

/// One skill entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Skill {
    /// Skill name.
    pub name: Option<String>,
    /// Grouping category (e.g., "Languages", "Tools").
    pub category: Option<String>,
    /// Proficiency level (e.g., "beginner", "expert").
    pub level: Option<String>,
}

/// One project entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Project {
    /// Project name.
    pub name: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Technologies used, free-form.
    pub technologies: Option<String>,
}

/// One certification entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Certification {
    /// Certification name.
    pub name: Option<String>,
    /// Issuing organization.
    pub issuing_organization: Option<String>,
}

impl ResumeSnapshot {
    /// Parse a snapshot from a JSON document.
    ///
    /// Unknown fields are ignored and missing fields default to empty, so
    /// partial documents parse; a document that is not an object (or has
    /// wrongly-typed fields, e.g. a string where an entry list is expected)
    /// fails fast with a descriptive [`SnapshotError`].
    pub fn from_json_str(input: &str) -> SnapshotResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse a snapshot from a JSON document, enforcing a byte-size limit.
    pub fn from_json_str_bounded(input: &str, max_bytes: Option<usize>) -> SnapshotResult<Self> {
        if let Some(limit) = max_bytes
            && input.len() > limit
        {
            return Err(SnapshotError::TooLarge {
                actual: input.len(),
                limit,
            });
        }
        Self::from_json_str(input)
    }

    /// The snapshot rendered as a single JSON string.
    ///
    /// The formatting score and issue checker operate on this dump rather
    /// than on real document structure.
    pub fn stringified(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// All scorable free text joined into one string: the summary, every
    /// experience and education description, and every skill name.
    pub fn combined_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(summary) = self.summary.as_deref() {
            parts.push(summary);
        }
        parts.extend(self.experiences.iter().filter_map(|e| e.description.as_deref()));
        parts.extend(self.education.iter().filter_map(|e| e.description.as_deref()));
        parts.extend(self.skills.iter().filter_map(|s| s.name.as_deref()));
        parts.join(" ")
    }
}

/// Whether an optional text field holds a non-empty value.
pub(crate) fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_document() {
        let snapshot = ResumeSnapshot::from_json_str(r#"{"email": "a@b.com"}"#).unwrap();
        assert_eq!(snapshot.email.as_deref(), Some("a@b.com"));
        assert!(snapshot.experiences.is_empty());
        assert!(snapshot.summary.is_none());
    }

    #[test]
    fn rejects_wrong_shape() {
        let result = ResumeSnapshot::from_json_str(r#"{"experiences": "not a list"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_object() {
        assert!(ResumeSnapshot::from_json_str("[1, 2, 3]").is_err());
    }

    #[test]
    fn size_limit_enforced() {
        let doc = r#"{"summary": "hello"}"#;
        let err = ResumeSnapshot::from_json_str_bounded(doc, Some(5)).unwrap_err();
        assert!(matches!(err, SnapshotError::TooLarge { .. }));
        assert!(ResumeSnapshot::from_json_str_bounded(doc, Some(1024)).is_ok());
    }

    #[test]
    fn combined_text_gathers_all_fields() {
        let snapshot = ResumeSnapshot {
            summary: Some("Built things".into()),
            experiences: vec![Experience {
                description: Some("Shipped features".into()),
                ..Experience::default()
            }],
            education: vec![Education {
                description: Some("Studied computing".into()),
                ..Education::default()
            }],
            skills: vec![Skill {
                name: Some("Python".into()),
                ..Skill::default()
            }],
            ..ResumeSnapshot::default()
        };
        let text = snapshot.combined_text();
        assert!(text.contains("Built things"));
        assert!(text.contains("Shipped features"));
        assert!(text.contains("Studied computing"));
        assert!(text.contains("Python"));
    }

    #[test]
    fn stringified_contains_field_names() {
        let dump = ResumeSnapshot::default().stringified();
        assert!(dump.contains("summary"));
        assert!(dump.contains("skills"));
    }
}
