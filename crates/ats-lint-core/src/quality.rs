//! Content quality checking for drafted resume text.
//!
//! Flags short content and passive voice indicators, folding them into a
//! 0–100 score. Intended for text produced or edited via [`crate::compose`].

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::report::IssueSeverity;

/// Passive voice indicator patterns with their advice.
static PASSIVE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(?i)\bwas\b").expect("valid regex"),
            "Consider using active voice",
        ),
        (
            Regex::new(r"(?i)\bwere\b").expect("valid regex"),
            "Consider using active voice",
        ),
        (
            Regex::new(r"(?i)\bbeen\b").expect("valid regex"),
            "Consider using active voice",
        ),
        (
            Regex::new(r"(?i)\bis being\b").expect("valid regex"),
            "Consider using active voice",
        ),
    ]
});

/// Minimum content length before the short-content warning fires.
const MIN_CONTENT_CHARS: usize = 50;

/// One quality issue found in content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QualityIssue {
    /// What the issue concerns.
    #[serde(rename = "type")]
    pub kind: QualityIssueKind,
    /// Human-readable issue description.
    pub message: String,
    /// Edit advice, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// How serious the issue is.
    pub severity: IssueSeverity,
}

/// Category tag for a quality issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QualityIssueKind {
    /// Content too short to carry substance.
    Length,
    /// Passive voice constructions found.
    PassiveVoice,
}

/// Result of a content quality check.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QualityReport {
    /// Issues found, in check order.
    pub issues: Vec<QualityIssue>,
    /// Quality score: 100 minus 10 per warning and 3 per info, floored at 0.
    pub score: i32,
}

/// Check drafted content for quality issues.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn check_content_quality(content: &str) -> QualityReport {
    let mut issues = Vec::new();

    if content.chars().count() < MIN_CONTENT_CHARS {
        issues.push(QualityIssue {
            kind: QualityIssueKind::Length,
            message: "Content seems too short".to_string(),
            suggestion: None,
            severity: IssueSeverity::Warning,
        });
    }

    for (pattern, advice) in PASSIVE_PATTERNS.iter() {
        let count = pattern.find_iter(content).count();
        if count > 0 {
            issues.push(QualityIssue {
                kind: QualityIssueKind::PassiveVoice,
                message: format!("Found passive voice constructions ({count} occurrences)"),
                suggestion: Some((*advice).to_string()),
                severity: IssueSeverity::Info,
            });
        }
    }

    let mut score = 100;
    for issue in &issues {
        score -= match issue.severity {
            IssueSeverity::Warning => 10,
            IssueSeverity::Info => 3,
        };
    }

    QualityReport {
        issues,
        score: score.max(0),
    }
}
