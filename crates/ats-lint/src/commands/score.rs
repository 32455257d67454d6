//! Score command — full ATS analysis.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use ats_lint_core::report::Priority;
use ats_lint_core::score;

use super::{load_snapshot, read_job_description};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Resume snapshot (JSON file).
    pub file: Utf8PathBuf,

    /// Job description text file to match keywords against.
    #[arg(long, value_name = "FILE")]
    pub jd: Option<Utf8PathBuf>,

    /// Minimum acceptable overall score (0–100).
    #[arg(long)]
    pub min_score: Option<i32>,
}

/// Run the full ATS analysis on a resume snapshot.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config_min_score: Option<i32>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, jd = ?args.jd, "executing score command");

    let snapshot = load_snapshot(&args.file, max_input_bytes)?;
    let job_description = read_job_description(args.jd.as_deref(), max_input_bytes)?;
    let min_score = args.min_score.or(config_min_score);

    let report = score::analyze(&snapshot, &job_description);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Text output — section by section
    println!("{}", args.file.bold());

    let overall_str = if report.overall_score >= 80 {
        format!("{}", report.overall_score).green().to_string()
    } else if report.overall_score >= 60 {
        format!("{}", report.overall_score).yellow().to_string()
    } else {
        format!("{}", report.overall_score).red().to_string()
    };
    println!("\n  {} {}/100", "Overall:".cyan(), overall_str);

    let scores = &report.section_scores;
    println!(
        "\n  {} contact {} / summary {} / experience {} / education {} / skills {} / formatting {}",
        "Sections:".cyan(),
        scores.contact_info,
        scores.summary,
        scores.experience,
        scores.education,
        scores.skills,
        scores.formatting,
    );

    let keywords = &report.keyword_analysis;
    if job_description.is_empty() {
        println!("\n  {} no job description given", "Keywords:".cyan());
    } else {
        println!(
            "\n  {} {:.1}% match, {} matched, {} missing",
            "Keywords:".cyan(),
            keywords.match_rate,
            keywords.total_matched,
            keywords.total_missing,
        );
    }

    if !report.formatting_issues.is_empty() {
        println!(
            "\n  {} {} found",
            "Formatting issues:".yellow(),
            report.formatting_issues.len(),
        );
        for issue in &report.formatting_issues {
            println!("    - {}", issue.message);
        }
    }

    println!("\n  {}", "Suggestions:".cyan());
    for suggestion in &report.suggestions {
        let priority = match suggestion.priority {
            Priority::High => "high".red().to_string(),
            Priority::Medium => "medium".yellow().to_string(),
            Priority::Low => "low".green().to_string(),
        };
        println!("    [{priority}] {}", suggestion.message);
    }

    // Check overall score gate
    if let Some(min) = min_score
        && report.overall_score < min
    {
        bail!(
            "{} overall score {} is below minimum {} — apply the suggestions above.",
            args.file,
            report.overall_score,
            min,
        );
    }

    Ok(())
}
