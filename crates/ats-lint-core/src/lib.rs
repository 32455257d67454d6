//! Core library for ats-lint.
//!
//! This crate provides the ATS resume analysis engine used by the `ats-lint`
//! CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`score`] - Section scoring and the full analysis entry point
//! - [`matcher`] - Keyword matching against the reference vocabulary
//! - [`suggest`] - Suggestion generation
//! - [`issues`] - Formatting issue detection
//! - [`validate`] - Contact field format validation
//! - [`compose`] - Template-based content composition
//! - [`quality`] - Content quality checking
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use ats_lint_core::snapshot::ResumeSnapshot;
//! use ats_lint_core::score;
//!
//! let snapshot = ResumeSnapshot::from_json_str(r#"{"email": "jane@example.com"}"#)
//!     .expect("well-formed snapshot");
//! let report = score::analyze(&snapshot, "We need python and docker experience");
//! println!("overall: {}", report.overall_score);
//! ```
#![deny(unsafe_code)]

pub mod compose;
pub mod config;
pub mod error;
pub mod issues;
pub mod keywords;
pub mod matcher;
pub mod quality;
pub mod report;
pub mod score;
pub mod snapshot;
pub mod suggest;
pub mod text;
pub mod validate;

pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult, SnapshotError, SnapshotResult};
pub use report::{AnalysisReport, SectionScores};
pub use snapshot::ResumeSnapshot;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
