//! Keywords command — vocabulary extraction and matching.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use ats_lint_core::matcher;

use super::{load_snapshot, read_job_description};

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// Resume snapshot (JSON file).
    pub file: Utf8PathBuf,

    /// Job description text file to match keywords against.
    #[arg(long, value_name = "FILE")]
    pub jd: Option<Utf8PathBuf>,
}

/// Extract reference keywords from a resume and an optional job description.
#[instrument(name = "cmd_keywords", skip_all, fields(file = %args.file))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, jd = ?args.jd, "executing keywords command");

    let snapshot = load_snapshot(&args.file, max_input_bytes)?;
    let job_description = read_job_description(args.jd.as_deref(), max_input_bytes)?;

    let extraction = matcher::extract_keywords(&snapshot, &job_description);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&extraction)?);
        return Ok(());
    }

    println!("{}", args.file.bold());

    let resume_list: Vec<&str> = extraction.resume_keywords.iter().map(String::as_str).collect();
    println!(
        "\n  {} {}",
        "Resume:".cyan(),
        if resume_list.is_empty() {
            "none".to_string()
        } else {
            resume_list.join(", ")
        },
    );

    if job_description.is_empty() {
        println!("\n  {} no job description given", "Job:".cyan());
        return Ok(());
    }

    let job_list: Vec<&str> = extraction.job_keywords.iter().map(String::as_str).collect();
    println!(
        "\n  {} {}",
        "Job:".cyan(),
        if job_list.is_empty() {
            "none".to_string()
        } else {
            job_list.join(", ")
        },
    );

    println!(
        "\n  {} {} matched, {} missing",
        "Overlap:".cyan(),
        extraction.matched_keywords.len(),
        extraction.missing_keywords.len(),
    );

    if !extraction.missing_keywords.is_empty() {
        let missing: Vec<&str> = extraction.missing_keywords.iter().map(String::as_str).collect();
        println!("\n  {} {}", "Missing:".yellow(), missing.join(", "));
    }

    Ok(())
}
