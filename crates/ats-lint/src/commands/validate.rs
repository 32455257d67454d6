//! Validate command — contact field format checks.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use ats_lint_core::validate;

use super::load_snapshot;

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Resume snapshot (JSON file).
    pub file: Utf8PathBuf,
}

/// Validate contact field formats in a resume snapshot.
#[instrument(name = "cmd_validate", skip_all, fields(file = %args.file))]
pub fn cmd_validate(
    args: ValidateArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing validate command");

    let snapshot = load_snapshot(&args.file, max_input_bytes)?;
    let report = validate::validate_snapshot(&snapshot);

    if global_json {
        // Scripting consumers read the `pass` field; exit status stays 0.
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.pass {
        println!("{} {} contact fields look valid", "PASS:".green(), args.file);
        return Ok(());
    }

    for finding in &report.findings {
        println!("  {} {}: {}", "invalid".red(), finding.field, finding.message);
    }
    bail!("{} has {} invalid contact fields", args.file, report.findings.len());
}
