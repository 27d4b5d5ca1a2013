use rcl_core::enums::{Revision, SourceType};
use rcl_reference::ValidationIssue;
use serde::Serialize;

/// One row of `rcl reference articles`.
#[derive(Debug, Serialize)]
pub struct ArticleListing {
    pub key: String,
    pub title: String,
    pub word_count: usize,
    pub v1_questions: usize,
    pub v2_questions: usize,
}

/// One row of `rcl reference questions`.
#[derive(Debug, Serialize)]
pub struct QuestionListing {
    pub index: usize,
    pub text: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub source_type: Option<SourceType>,
    pub lure: Option<usize>,
}

/// Response from `rcl reference validate`.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub source: String,
    pub valid: bool,
    pub articles: usize,
    pub revisions: Vec<Revision>,
    pub issues: Vec<ValidationIssue>,
}
