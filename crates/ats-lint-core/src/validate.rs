//! Contact field validation.
//!
//! The contact scorer only checks presence; these validators check format.
//! All are total functions returning a message for the first problem found,
//! or `None` when the value is acceptable.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::snapshot::ResumeSnapshot;

/// Anchored email address pattern.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid regex")
});

/// International phone number after formatting characters are stripped.
static PHONE_INTL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{6,14}$").expect("valid regex"));

/// Plain digit-run phone number after formatting characters are stripped.
static PHONE_DIGITS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10,15}$").expect("valid regex"));

/// URL with optional scheme, port, and path.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([a-zA-Z0-9_-]+\.)+[a-zA-Z]{2,6}(:\d+)?(/\S*)?$")
        .expect("valid regex")
});

/// Characters allowed in a person name.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s\-']+$").expect("valid regex"));

/// Validate an email address.
pub fn validate_email(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Email is required".to_string());
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Some("Invalid email address format".to_string());
    }
    None
}

/// Validate a phone number. Empty input is acceptable (phone is optional).
pub fn validate_phone(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.'))
        .collect();
    if PHONE_INTL_PATTERN.is_match(&cleaned) || PHONE_DIGITS_PATTERN.is_match(&cleaned) {
        None
    } else {
        Some("Invalid phone number format".to_string())
    }
}

/// Validate a URL. Empty input is acceptable (URLs are optional).
pub fn validate_url(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    if URL_PATTERN.is_match(value) {
        None
    } else {
        Some("Invalid URL format".to_string())
    }
}

/// Validate a person name.
pub fn validate_name(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Name is required".to_string());
    }
    if value.chars().count() < 2 {
        return Some("Name must be at least 2 characters".to_string());
    }
    if value.chars().count() > 100 {
        return Some("Name must be less than 100 characters".to_string());
    }
    if !NAME_PATTERN.is_match(value) {
        return Some(
            "Name can only contain letters, spaces, hyphens, and apostrophes".to_string(),
        );
    }
    None
}

/// One field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationFinding {
    /// The snapshot field name.
    pub field: String,
    /// Why the value was rejected.
    pub message: String,
}

/// Result of validating a snapshot's contact fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    /// Fields that failed, in field order.
    pub findings: Vec<ValidationFinding>,
    /// Whether every present field passed.
    pub pass: bool,
}

/// Validate the format of a snapshot's present contact fields.
///
/// Absent fields are skipped; presence scoring is the contact scorer's job.
#[tracing::instrument(skip_all)]
pub fn validate_snapshot(snapshot: &ResumeSnapshot) -> ValidationReport {
    let mut findings = Vec::new();

    let checks: [(&str, Option<&str>, fn(&str) -> Option<String>); 3] = [
        ("full_name", snapshot.full_name.as_deref(), validate_name),
        ("email", snapshot.email.as_deref(), validate_email),
        ("phone", snapshot.phone.as_deref(), validate_phone),
    ];

    for (field, value, check) in checks {
        if let Some(value) = value
            && let Some(message) = check(value)
        {
            findings.push(ValidationFinding {
                field: field.to_string(),
                message,
            });
        }
    }

    ValidationReport {
        pass: findings.is_empty(),
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_normal_email() {
        assert!(validate_email("jane.doe@example.com").is_none());
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(validate_email("not-an-email").is_some());
        assert!(validate_email("a@b").is_some());
        assert!(validate_email("").is_some());
    }

    #[test]
    fn accepts_formatted_phone() {
        assert!(validate_phone("(555) 123-4567").is_none());
        assert!(validate_phone("+1 555 123 4567").is_none());
        assert!(validate_phone("").is_none());
    }

    #[test]
    fn rejects_short_or_wordy_phone() {
        assert!(validate_phone("12345").is_some());
        assert!(validate_phone("call me").is_some());
    }

    #[test]
    fn accepts_urls_with_and_without_scheme() {
        assert!(validate_url("https://example.com/profile").is_none());
        assert!(validate_url("example.com").is_none());
        assert!(validate_url("").is_none());
    }

    #[test]
    fn rejects_bare_words_as_url() {
        assert!(validate_url("homepage").is_some());
    }

    #[test]
    fn name_rules() {
        assert!(validate_name("Jane Doe").is_none());
        assert!(validate_name("O'Brien-Smith").is_none());
        assert!(validate_name("J").is_some());
        assert!(validate_name("Jane123").is_some());
        assert!(validate_name(&"x".repeat(101)).is_some());
    }

    #[test]
    fn snapshot_validation_skips_absent_fields() {
        let report = validate_snapshot(&ResumeSnapshot::default());
        assert!(report.pass);
        assert!(report.findings.is_empty());
    }

    #[test]
    fn snapshot_validation_reports_bad_fields_in_order() {
        let snapshot = ResumeSnapshot {
            full_name: Some("X".into()),
            email: Some("nope".into()),
            phone: Some("12-34".into()),
            ..ResumeSnapshot::default()
        };
        let report = validate_snapshot(&snapshot);
        assert!(!report.pass);
        let fields: Vec<&str> = report.findings.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["full_name", "email", "phone"]);
    }
}
