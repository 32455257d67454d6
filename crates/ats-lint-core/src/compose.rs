//! Template-based content composition.
//!
//! Deterministic fallbacks for drafting resume content: a summary from
//! career facts, experience bullets, skill suggestions by discipline and
//! industry, and job titles tiered by years of experience. No external
//! services involved.

use std::collections::HashMap;
use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Broadly applicable skills suggested for any role.
const COMMON_SKILLS: &[&str] = &[
    "Communication",
    "Teamwork",
    "Problem Solving",
    "Time Management",
    "Leadership",
    "Microsoft Office",
    "Google Workspace",
    "Project Management",
    "Data Analysis",
    "Strategic Planning",
    "Customer Service",
    "Adaptability",
];

/// Discipline-specific skill suggestions.
static DISCIPLINE_SKILLS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut map: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        map.insert(
            "software",
            &["Python", "JavaScript", "SQL", "HTML/CSS", "Git", "Agile", "Scrum"][..],
        );
        map.insert(
            "data",
            &["Excel", "SQL", "Tableau", "Power BI", "Python", "Statistics"][..],
        );
        map.insert(
            "marketing",
            &[
                "SEO",
                "Google Analytics",
                "Social Media",
                "Content Marketing",
                "Email Marketing",
            ][..],
        );
        map.insert(
            "design",
            &["Photoshop", "Illustrator", "Figma", "UI/UX", "HTML/CSS"][..],
        );
        map
    });

/// Industry-specific skill suggestions.
static INDUSTRY_SKILLS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut map: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        map.insert(
            "technology",
            &[
                "Python",
                "JavaScript",
                "Cloud Computing",
                "Machine Learning",
                "DevOps",
            ][..],
        );
        map.insert(
            "healthcare",
            &[
                "Patient Care",
                "Medical Terminology",
                "HIPAA",
                "Electronic Health Records",
            ][..],
        );
        map.insert(
            "finance",
            &[
                "Financial Analysis",
                "Excel",
                "Bloomberg",
                "Risk Management",
                "Accounting",
            ][..],
        );
        map.insert(
            "education",
            &[
                "Curriculum Development",
                "Classroom Management",
                "Lesson Planning",
                "Assessment",
            ][..],
        );
        map
    });

/// Composed content plus follow-up suggestions for the author.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ComposedContent {
    /// The drafted text.
    pub content: String,
    /// Follow-up edits the author should make.
    pub suggestions: Vec<String>,
}

/// Draft a professional summary from career facts.
///
/// Years of experience are estimated at two per role held. The first word of
/// the target role, when given, anchors the opening sentence.
#[tracing::instrument(skip_all)]
pub fn compose_summary(
    experience_count: usize,
    skills: &[String],
    target_role: &str,
) -> ComposedContent {
    let years = experience_count * 2;
    let skill_text = if skills.is_empty() {
        "various technologies".to_string()
    } else {
        skills
            .iter()
            .take(5)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut content = format!("Results-driven professional with {years}+ years of experience ");
    match target_role.split_whitespace().next() {
        Some(field) => {
            content.push_str(&format!("in {field}. "));
        }
        None => content.push_str("delivering high-quality solutions. "),
    }
    content.push_str(&format!("Skilled in {skill_text}. "));
    content.push_str("Committed to excellence and continuous improvement.");

    ComposedContent {
        content,
        suggestions: vec![
            "Add specific achievements".to_string(),
            "Include metrics and numbers".to_string(),
            "Tailor to job description".to_string(),
        ],
    }
}

/// Draft experience bullet points for a role.
///
/// With no achievements, generic responsibility bullets are produced; given
/// achievements, up to three are appended as their own bullets.
#[tracing::instrument(skip_all)]
pub fn compose_experience_bullets(
    company: &str,
    position: &str,
    achievements: &[String],
) -> ComposedContent {
    let mut bullets = vec![
        if achievements.is_empty() {
            format!("Responsible for {position} role at {company}")
        } else {
            format!("Key {position} responsibilities and achievements at {company}")
        },
        "Collaborated with cross-functional teams to achieve goals".to_string(),
        "Demonstrated strong problem-solving skills".to_string(),
    ];
    bullets.extend(achievements.iter().take(3).cloned());

    ComposedContent {
        content: bullets.join("\n"),
        suggestions: bullets,
    }
}

/// Suggest skills for a discipline and industry.
///
/// Combines the common set with any matching discipline and industry tables
/// (case-insensitive lookup), deduplicated in first-seen order. The content
/// line carries the first fifteen.
#[tracing::instrument(skip_all)]
pub fn suggest_skills(discipline: Option<&str>, industry: Option<&str>) -> ComposedContent {
    let mut seen = Vec::new();
    let mut push_all = |source: &[&str]| {
        for skill in source {
            if !seen.iter().any(|s: &String| s == skill) {
                seen.push((*skill).to_string());
            }
        }
    };

    push_all(COMMON_SKILLS);
    if let Some(key) = discipline.map(str::to_lowercase)
        && let Some(skills) = DISCIPLINE_SKILLS.get(key.as_str())
    {
        push_all(skills);
    }
    if let Some(key) = industry.map(str::to_lowercase)
        && let Some(skills) = INDUSTRY_SKILLS.get(key.as_str())
    {
        push_all(skills);
    }

    ComposedContent {
        content: seen
            .iter()
            .take(15)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        suggestions: seen,
    }
}

/// Suggest job titles for a given number of years of experience.
pub fn suggest_job_titles(experience_years: u32) -> Vec<String> {
    let titles: &[&str] = if experience_years < 2 {
        &[
            "Junior Developer",
            "Entry-Level Analyst",
            "Associate",
            "Trainee",
            "Junior Consultant",
        ]
    } else if experience_years < 5 {
        &[
            "Developer",
            "Analyst",
            "Specialist",
            "Consultant",
            "Project Coordinator",
        ]
    } else if experience_years < 10 {
        &[
            "Senior Developer",
            "Lead Analyst",
            "Senior Consultant",
            "Project Manager",
            "Team Lead",
        ]
    } else {
        &[
            "Senior Developer",
            "Lead Engineer",
            "Director",
            "Principal Consultant",
            "VP of Engineering",
        ]
    };
    titles.iter().map(|t| (*t).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_role_and_skills() {
        let skills = vec!["Rust".to_string(), "SQL".to_string()];
        let composed = compose_summary(3, &skills, "engineering leadership");
        assert!(composed.content.contains("6+ years"));
        assert!(composed.content.contains("in engineering."));
        assert!(composed.content.contains("Skilled in Rust, SQL."));
        assert_eq!(composed.suggestions.len(), 3);
    }

    #[test]
    fn summary_without_role_or_skills() {
        let composed = compose_summary(0, &[], "");
        assert!(composed.content.contains("0+ years"));
        assert!(composed.content.contains("delivering high-quality solutions."));
        assert!(composed.content.contains("various technologies"));
    }

    #[test]
    fn summary_caps_listed_skills_at_five() {
        let skills: Vec<String> = (0..8).map(|i| format!("skill{i}")).collect();
        let composed = compose_summary(1, &skills, "");
        assert!(composed.content.contains("skill4"));
        assert!(!composed.content.contains("skill5"));
    }

    #[test]
    fn bullets_without_achievements_are_generic() {
        let composed = compose_experience_bullets("Acme", "Engineer", &[]);
        assert!(composed.content.starts_with("Responsible for Engineer role at Acme"));
        assert_eq!(composed.suggestions.len(), 3);
    }

    #[test]
    fn bullets_append_up_to_three_achievements() {
        let achievements: Vec<String> = (0..5).map(|i| format!("win {i}")).collect();
        let composed = compose_experience_bullets("Acme", "Engineer", &achievements);
        assert!(composed.content.starts_with("Key Engineer responsibilities"));
        assert!(composed.content.contains("win 2"));
        assert!(!composed.content.contains("win 3"));
    }

    #[test]
    fn skills_merge_without_duplicates() {
        // "Python" appears in both the software and technology tables.
        let composed = suggest_skills(Some("software"), Some("technology"));
        let python_count = composed
            .suggestions
            .iter()
            .filter(|s| s.as_str() == "Python")
            .count();
        assert_eq!(python_count, 1);
        assert!(composed.suggestions.iter().any(|s| s == "DevOps"));
    }

    #[test]
    fn unknown_discipline_falls_back_to_common() {
        let composed = suggest_skills(Some("alchemy"), None);
        assert_eq!(composed.suggestions.len(), COMMON_SKILLS.len());
    }

    #[test]
    fn skills_lookup_is_case_insensitive() {
        let composed = suggest_skills(Some("Software"), None);
        assert!(composed.suggestions.iter().any(|s| s == "Git"));
    }

    #[test]
    fn titles_follow_experience_tiers() {
        assert!(suggest_job_titles(0).contains(&"Junior Developer".to_string()));
        assert!(suggest_job_titles(3).contains(&"Developer".to_string()));
        assert!(suggest_job_titles(7).contains(&"Project Manager".to_string()));
        assert!(suggest_job_titles(15).contains(&"Director".to_string()));
    }
}
