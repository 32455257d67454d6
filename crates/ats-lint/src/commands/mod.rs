//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

use ats_lint_core::snapshot::ResumeSnapshot;

pub mod compose;
pub mod info;
pub mod keywords;
pub mod score;
pub mod validate;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Load a resume snapshot from a JSON file, enforcing the size limit.
pub fn load_snapshot(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<ResumeSnapshot> {
    let content = read_input_file(path, max_bytes)?;
    ResumeSnapshot::from_json_str(&content).with_context(|| format!("failed to parse {path}"))
}

/// Read the optional job description file, or return an empty string.
pub fn read_job_description(
    path: Option<&Utf8Path>,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    path.map_or_else(|| Ok(String::new()), |p| read_input_file(p, max_bytes))
}
