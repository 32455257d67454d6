//! Keyword matching between resume text, job description, and the static
//! reference vocabulary.

use std::collections::BTreeSet;

use crate::keywords::REFERENCE_VOCABULARY;
use crate::report::{KeywordAnalysis, KeywordExtraction};
use crate::snapshot::ResumeSnapshot;
use crate::text;

/// Match resume vocabulary against a job description.
///
/// Both texts are reduced to lowercase word sets; only words present in the
/// reference vocabulary participate. `matched` is the three-way intersection,
/// `missing` the job-description words the resume lacks, and `match_rate` the
/// matched share of job-relevant reference keywords (0 when the job
/// description contributes none, including when it is empty).
#[tracing::instrument(skip_all, fields(jd_len = job_description.len()))]
pub fn analyze_keywords(snapshot: &ResumeSnapshot, job_description: &str) -> KeywordAnalysis {
    let resume_words = text::word_set(&snapshot.combined_text());
    let job_words = job_word_set(job_description);

    let matched: BTreeSet<String> = resume_words
        .intersection(&job_words)
        .filter(|w| REFERENCE_VOCABULARY.contains(w.as_str()))
        .cloned()
        .collect();

    let missing: BTreeSet<String> = job_words
        .difference(&resume_words)
        .filter(|w| REFERENCE_VOCABULARY.contains(w.as_str()))
        .cloned()
        .collect();

    let job_relevant = job_words
        .iter()
        .filter(|w| REFERENCE_VOCABULARY.contains(w.as_str()))
        .count();
    let match_rate = if job_relevant == 0 {
        0.0
    } else {
        matched.len() as f64 / job_relevant as f64 * 100.0
    };

    KeywordAnalysis {
        total_matched: matched.len(),
        total_missing: missing.len(),
        matched,
        missing,
        match_rate,
    }
}

/// Extract the raw vocabulary overlap for each source text.
///
/// Unlike [`analyze_keywords`], this also reports which reference keywords
/// each text contains on its own.
#[tracing::instrument(skip_all, fields(jd_len = job_description.len()))]
pub fn extract_keywords(snapshot: &ResumeSnapshot, job_description: &str) -> KeywordExtraction {
    let resume_words = text::word_set(&snapshot.combined_text());
    let job_words = job_word_set(job_description);

    let resume_keywords: BTreeSet<String> = resume_words
        .iter()
        .filter(|w| REFERENCE_VOCABULARY.contains(w.as_str()))
        .cloned()
        .collect();
    let job_keywords: BTreeSet<String> = job_words
        .iter()
        .filter(|w| REFERENCE_VOCABULARY.contains(w.as_str()))
        .cloned()
        .collect();

    let matched_keywords: BTreeSet<String> = resume_keywords
        .intersection(&job_keywords)
        .cloned()
        .collect();
    let missing_keywords: BTreeSet<String> = job_keywords
        .difference(&resume_keywords)
        .cloned()
        .collect();

    KeywordExtraction {
        resume_keywords,
        job_keywords,
        matched_keywords,
        missing_keywords,
    }
}

fn job_word_set(job_description: &str) -> BTreeSet<String> {
    if job_description.is_empty() {
        BTreeSet::new()
    } else {
        text::word_set(job_description)
    }
}
