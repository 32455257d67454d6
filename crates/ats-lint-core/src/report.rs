//! Report structs for resume analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in CLI JSON output and downstream consumers.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Full analysis report: the top-level output of [`crate::score::analyze`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Overall score: the six section scores averaged with floor division.
    pub overall_score: i32,
    /// Per-section scores, all six sections always present.
    pub section_scores: SectionScores,
    /// Reference keywords found in both the resume and the job description.
    pub keywords: BTreeSet<String>,
    /// Reference keywords the job description asks for that the resume lacks.
    pub missing_keywords: BTreeSet<String>,
    /// Improvement suggestions, in generation order.
    pub suggestions: Vec<Suggestion>,
    /// Formatting issues found in the stringified resume data.
    pub formatting_issues: Vec<FormattingIssue>,
    /// Detailed keyword matching breakdown.
    pub keyword_analysis: KeywordAnalysis,
}

// -- Section Scores ---------------------------------------------------------

/// Scores for the six fixed resume sections, each clamped to 0–100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SectionScores {
    /// Contact information completeness.
    pub contact_info: i32,
    /// Professional summary quality.
    pub summary: i32,
    /// Work experience depth.
    pub experience: i32,
    /// Education completeness.
    pub education: i32,
    /// Skills breadth and detail.
    pub skills: i32,
    /// ATS-friendliness of formatting.
    pub formatting: i32,
}

impl SectionScores {
    /// Number of scored sections.
    pub const SECTION_COUNT: i32 = 6;

    /// Sum of all six section scores.
    pub const fn total(&self) -> i32 {
        self.contact_info
            + self.summary
            + self.experience
            + self.education
            + self.skills
            + self.formatting
    }

    /// Overall score: floor of the average over the six sections.
    pub const fn overall(&self) -> i32 {
        self.total() / Self::SECTION_COUNT
    }
}

// -- Keyword Analysis -------------------------------------------------------

/// Keyword matching breakdown between resume, job description, and the
/// reference vocabulary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct KeywordAnalysis {
    /// Reference keywords present in both resume and job description.
    pub matched: BTreeSet<String>,
    /// Reference keywords in the job description but not the resume.
    pub missing: BTreeSet<String>,
    /// Matched share of job-relevant reference keywords, 0–100.
    pub match_rate: f64,
    /// Count of matched keywords.
    pub total_matched: usize,
    /// Count of missing keywords.
    pub total_missing: usize,
}

/// Raw keyword extraction: vocabulary overlap per source text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct KeywordExtraction {
    /// Reference keywords found anywhere in the resume text.
    pub resume_keywords: BTreeSet<String>,
    /// Reference keywords found in the job description.
    pub job_keywords: BTreeSet<String>,
    /// Intersection of the two.
    pub matched_keywords: BTreeSet<String>,
    /// Job keywords absent from the resume.
    pub missing_keywords: BTreeSet<String>,
}

// -- Suggestions ------------------------------------------------------------

/// One improvement suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Suggestion {
    /// What the suggestion concerns.
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Human-readable suggestion text.
    pub message: String,
    /// How urgent the suggestion is.
    pub priority: Priority,
}

/// Category tag for a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Contact information section.
    ContactInfo,
    /// Professional summary section.
    Summary,
    /// Work experience section.
    Experience,
    /// Skills section.
    Skills,
    /// Keyword coverage.
    Keywords,
    /// General content advice.
    Content,
}

/// Suggestion priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Address first.
    High,
    /// Address soon.
    Medium,
    /// Nice to have.
    Low,
}

// -- Formatting Issues ------------------------------------------------------

/// One formatting issue found in the stringified resume data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FormattingIssue {
    /// What the issue concerns.
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Human-readable issue description.
    pub message: String,
    /// How serious the issue is.
    pub severity: IssueSeverity,
}

/// Category tag for a formatting issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Total content length out of the expected range.
    ContentLength,
    /// Expected section names absent from the content.
    MissingSections,
}

/// Formatting issue severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Likely hurts ATS parsing.
    Warning,
    /// Worth knowing, probably harmless.
    Info,
}
