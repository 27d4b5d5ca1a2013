//! # rcl-log
//!
//! Participant event logs for recall.
//!
//! - [`LogParser`]: decodes an append-only CSV event log into a
//!   [`ParticipantLog`](rcl_core::records::ParticipantLog), one named record
//!   per phase row, with fail-soft numeric fields and explicit `mcq_responses`
//!   deduplication
//! - [`LogWriter`]: appends rows, writing the header only on creation
//! - [`ParticipantRegistry`]: sequential participant IDs over `participants.csv`
//!
//! Writers assume the caller holds the data-directory lock.

mod dedup;
mod error;
mod fields;
mod layouts;
mod parser;
mod registry;
mod writer;

pub use dedup::dedup_mcq;
pub use error::LogError;
pub use parser::LogParser;
pub use registry::ParticipantRegistry;
pub use writer::{AppendOutcome, LogWriter};
