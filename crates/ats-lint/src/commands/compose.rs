//! Compose command — template-based content drafting.

use clap::{Args, Subcommand};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use ats_lint_core::compose;
use ats_lint_core::quality;

/// Arguments for the `compose` subcommand.
#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// What to draft.
    #[command(subcommand)]
    pub target: ComposeTarget,
}

/// Content kinds the compose command can draft.
#[derive(Subcommand, Debug)]
pub enum ComposeTarget {
    /// Draft a professional summary from career facts
    Summary {
        /// Number of roles held.
        #[arg(long, default_value_t = 0)]
        experiences: usize,

        /// Key skills (comma-separated).
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,

        /// Target role or field.
        #[arg(long, default_value = "")]
        role: String,
    },

    /// Draft experience bullet points for a role
    Bullets {
        /// Employer name.
        #[arg(long)]
        company: String,

        /// Job title.
        #[arg(long)]
        position: String,

        /// Achievements to highlight (repeatable).
        #[arg(long = "achievement")]
        achievements: Vec<String>,
    },

    /// Suggest skills for a discipline and industry
    Skills {
        /// Discipline (e.g., software, data, marketing, design).
        #[arg(long)]
        discipline: Option<String>,

        /// Industry (e.g., technology, healthcare, finance, education).
        #[arg(long)]
        industry: Option<String>,
    },

    /// Suggest job titles for a given experience level
    Titles {
        /// Years of experience.
        #[arg(long, default_value_t = 0)]
        years: u32,
    },
}

#[derive(Serialize)]
struct ComposedOutput<'a> {
    content: &'a str,
    suggestions: &'a [String],
    quality: quality::QualityReport,
}

/// Draft resume content from templates.
#[instrument(name = "cmd_compose", skip_all)]
pub fn cmd_compose(args: ComposeArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(subcommand = ?args.target, "executing compose command");

    let composed = match args.target {
        ComposeTarget::Summary {
            experiences,
            skills,
            role,
        } => compose::compose_summary(experiences, &skills, &role),
        ComposeTarget::Bullets {
            company,
            position,
            achievements,
        } => compose::compose_experience_bullets(&company, &position, &achievements),
        ComposeTarget::Skills {
            discipline,
            industry,
        } => compose::suggest_skills(discipline.as_deref(), industry.as_deref()),
        ComposeTarget::Titles { years } => {
            let titles = compose::suggest_job_titles(years);
            if global_json {
                println!("{}", serde_json::to_string_pretty(&titles)?);
            } else {
                for title in titles {
                    println!("{title}");
                }
            }
            return Ok(());
        }
    };

    let quality = quality::check_content_quality(&composed.content);

    if global_json {
        let output = ComposedOutput {
            content: &composed.content,
            suggestions: &composed.suggestions,
            quality,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", composed.content);
    println!("\n  {} {}/100", "Quality:".cyan(), quality.score);
    if !composed.suggestions.is_empty() {
        println!("\n  {}", "Next steps:".cyan());
        for suggestion in &composed.suggestions {
            println!("    - {suggestion}");
        }
    }

    Ok(())
}
