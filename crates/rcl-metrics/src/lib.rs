//! # rcl-metrics
//!
//! Multiple-choice scoring for recall.
//!
//! - [`score_article`]: one article's responses against its question list and
//!   source-type map; pure and idempotent
//! - [`score_participant`]: revision resolution plus per-article scores and
//!   participant totals for a parsed log
//! - [`build_report`]: the full per-participant report with categorical levels
//! - [`dataset_rows`] / [`write_dataset_csv`]: the long-format analysis dataset
//! - [`search_answer_key`]: greedy answer-key search against reported totals
//!
//! Scores are always derived. Nothing here reads back a previous output.

mod calculator;
mod dataset;
mod error;
mod key_search;
pub mod levels;
mod participant;
mod report;
mod revision;

pub use calculator::score_article;
pub use dataset::{dataset_rows, write_dataset_csv};
pub use error::MetricsError;
pub use key_search::{SearchParticipant, read_targets, search_answer_key};
pub use participant::{resolve_article_key, score_participant};
pub use report::build_report;
pub use revision::{DEFAULT_CUTOVER, RevisionPolicy};
