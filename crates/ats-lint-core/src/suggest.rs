//! Suggestion generation from section scores and keyword analysis.

use crate::report::{KeywordAnalysis, Priority, SectionScores, Suggestion, SuggestionKind};

/// How many missing keywords to name in the keyword suggestion.
const MISSING_KEYWORD_LIMIT: usize = 5;

/// Generate improvement suggestions.
///
/// Rules run in a fixed order and that order is the output order: weak
/// contact info, summary, experience, and skills sections first, then missing
/// keywords, then two always-present content suggestions. Every rule whose
/// condition holds contributes; nothing is ranked or suppressed.
#[tracing::instrument(skip_all)]
pub fn generate_suggestions(
    scores: &SectionScores,
    keyword_analysis: &KeywordAnalysis,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if scores.contact_info < 75 {
        suggestions.push(Suggestion {
            kind: SuggestionKind::ContactInfo,
            message: "Add missing contact information".to_string(),
            priority: Priority::High,
        });
    }

    if scores.summary < 50 {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Summary,
            message: "Add or improve your professional summary".to_string(),
            priority: Priority::High,
        });
    }

    if scores.experience < 50 {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Experience,
            message: "Add more work experience with descriptions".to_string(),
            priority: Priority::High,
        });
    }

    if scores.skills < 50 {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Skills,
            message: "Add more skills with proficiency levels".to_string(),
            priority: Priority::Medium,
        });
    }

    if !keyword_analysis.missing.is_empty() {
        let top_missing: Vec<&str> = keyword_analysis
            .missing
            .iter()
            .take(MISSING_KEYWORD_LIMIT)
            .map(String::as_str)
            .collect();
        suggestions.push(Suggestion {
            kind: SuggestionKind::Keywords,
            message: format!("Consider adding these keywords: {}", top_missing.join(", ")),
            priority: Priority::Medium,
        });
    }

    suggestions.push(Suggestion {
        kind: SuggestionKind::Content,
        message: "Use strong action verbs like \"achieved\", \"led\", \"developed\"".to_string(),
        priority: Priority::Low,
    });

    suggestions.push(Suggestion {
        kind: SuggestionKind::Content,
        message: "Quantify achievements with numbers and percentages".to_string(),
        priority: Priority::Medium,
    });

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_scores() -> SectionScores {
        SectionScores {
            contact_info: 100,
            summary: 80,
            experience: 90,
            education: 90,
            skills: 100,
            formatting: 100,
        }
    }

    #[test]
    fn strong_resume_gets_only_the_two_constants() {
        let suggestions = generate_suggestions(&strong_scores(), &KeywordAnalysis::default());
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].kind, SuggestionKind::Content);
        assert_eq!(suggestions[0].priority, Priority::Low);
        assert_eq!(suggestions[1].priority, Priority::Medium);
    }

    #[test]
    fn weak_sections_accumulate_in_rule_order() {
        let scores = SectionScores {
            contact_info: 50,
            summary: 0,
            experience: 30,
            education: 0,
            skills: 45,
            formatting: 100,
        };
        let suggestions = generate_suggestions(&scores, &KeywordAnalysis::default());
        let kinds: Vec<SuggestionKind> = suggestions.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SuggestionKind::ContactInfo,
                SuggestionKind::Summary,
                SuggestionKind::Experience,
                SuggestionKind::Skills,
                SuggestionKind::Content,
                SuggestionKind::Content,
            ]
        );
    }

    #[test]
    fn boundary_scores_do_not_trigger() {
        let scores = SectionScores {
            contact_info: 75,
            summary: 50,
            experience: 50,
            education: 0,
            skills: 50,
            formatting: 0,
        };
        let suggestions = generate_suggestions(&scores, &KeywordAnalysis::default());
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn missing_keywords_capped_at_five() {
        let analysis = KeywordAnalysis {
            missing: ["agile", "aws", "cloud", "docker", "git", "python", "sql"]
                .into_iter()
                .map(String::from)
                .collect(),
            ..KeywordAnalysis::default()
        };
        let suggestions = generate_suggestions(&strong_scores(), &analysis);
        let keyword_suggestion = suggestions
            .iter()
            .find(|s| s.kind == SuggestionKind::Keywords)
            .unwrap();
        assert_eq!(
            keyword_suggestion.message,
            "Consider adding these keywords: agile, aws, cloud, docker, git"
        );
        assert_eq!(keyword_suggestion.priority, Priority::Medium);
    }

    #[test]
    fn education_score_never_generates_a_suggestion() {
        let mut scores = strong_scores();
        scores.education = 0;
        let suggestions = generate_suggestions(&scores, &KeywordAnalysis::default());
        assert_eq!(suggestions.len(), 2);
    }
}
