//! Static keyword dictionary used as the ATS scoring vocabulary.
//!
//! Three disjoint categories: technical terms, soft skills, and action verbs.
//! Loaded once at first use, read-only thereafter.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Technical terms and tooling keywords commonly screened by ATS software.
pub static TECHNICAL_TERMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "python",
        "java",
        "javascript",
        "sql",
        "html",
        "css",
        "react",
        "node",
        "aws",
        "cloud",
        "docker",
        "kubernetes",
        "git",
        "agile",
        "scrum",
        "machine learning",
        "data analysis",
        "excel",
        "statistics",
        "project management",
    ]
    .into_iter()
    .collect()
});

/// Soft skills recruiters and ATS filters look for.
pub static SOFT_SKILLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "teamwork",
        "collaboration",
        "communication",
        "leadership",
        "problem solving",
        "critical thinking",
        "time management",
        "adaptability",
        "creativity",
        "initiative",
    ]
    .into_iter()
    .collect()
});

/// Action verbs that signal achievement-oriented writing, strongest first.
///
/// Kept as an ordered slice: the summary scorer only scans for the first
/// five entries.
pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "led",
    "developed",
    "created",
    "implemented",
    "managed",
    "increased",
    "decreased",
    "improved",
    "designed",
    "organized",
    "coordinated",
    "analyzed",
    "presented",
    "trained",
];

/// Action verbs as a set, for membership checks.
pub static ACTION_VERB_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ACTION_VERBS.iter().copied().collect());

/// Union of all three categories: the reference vocabulary for matching.
pub static REFERENCE_VOCABULARY: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    TECHNICAL_TERMS
        .iter()
        .chain(SOFT_SKILLS.iter())
        .chain(ACTION_VERB_SET.iter())
        .copied()
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_disjoint() {
        assert!(TECHNICAL_TERMS.is_disjoint(&SOFT_SKILLS));
        assert!(TECHNICAL_TERMS.is_disjoint(&ACTION_VERB_SET));
        assert!(SOFT_SKILLS.is_disjoint(&ACTION_VERB_SET));
    }

    #[test]
    fn vocabulary_is_the_union() {
        let expected = TECHNICAL_TERMS.len() + SOFT_SKILLS.len() + ACTION_VERB_SET.len();
        assert_eq!(REFERENCE_VOCABULARY.len(), expected);
        assert!(REFERENCE_VOCABULARY.contains("python"));
        assert!(REFERENCE_VOCABULARY.contains("teamwork"));
        assert!(REFERENCE_VOCABULARY.contains("achieved"));
    }

    #[test]
    fn entries_are_lowercase() {
        for word in REFERENCE_VOCABULARY.iter() {
            assert_eq!(*word, word.to_lowercase());
        }
    }
}
