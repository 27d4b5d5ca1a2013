//! Participant event-log parser.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use rcl_core::enums::DedupPolicy;
use rcl_core::ids::ParticipantId;
use rcl_core::records::ParticipantLog;

use crate::dedup::dedup_mcq;
use crate::error::LogError;
use crate::fields::Row;
use crate::layouts::{Decoded, Decoder};

/// Decodes participant event logs into [`ParticipantLog`] aggregates.
#[derive(Debug, Clone, Copy)]
pub struct LogParser {
    policy: DedupPolicy,
}

impl LogParser {
    #[must_use]
    pub const fn new(policy: DedupPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> DedupPolicy {
        self.policy
    }

    /// Parse a log file. The participant is taken from the file name.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::NotFound`] when `path` does not exist, or an I/O
    /// error when it cannot be read. Malformed rows never fail the parse.
    pub fn parse_path(&self, path: &Path) -> Result<ParticipantLog, LogError> {
        if !path.is_file() {
            return Err(LogError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let participant = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(ParticipantId::from_log_file_name);
        let file = std::fs::File::open(path)?;
        let log = self.parse_reader(file, participant)?;
        tracing::debug!(
            path = %path.display(),
            rows = log.diagnostics.rows_read,
            skipped = log.diagnostics.rows_skipped,
            "parsed participant log"
        );
        Ok(log)
    }

    /// Parse CSV from any reader. The first row is always treated as a header.
    ///
    /// # Errors
    ///
    /// Only I/O failures of the underlying reader are returned.
    pub fn parse_reader<R: Read>(
        &self,
        reader: R,
        participant: Option<ParticipantId>,
    ) -> Result<ParticipantLog, LogError> {
        let mut csv = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut log = ParticipantLog::empty(participant, self.policy);
        let mut decoder = Decoder::default();
        let mut mcq = Vec::new();

        for result in csv.records() {
            let record = match result {
                Ok(record) => record,
                Err(error) if error.is_io_error() => return Err(error.into()),
                Err(error) => {
                    log.diagnostics.rows_read += 1;
                    log.diagnostics.rows_skipped += 1;
                    tracing::warn!(%error, "unreadable log row skipped");
                    continue;
                }
            };
            log.diagnostics.rows_read += 1;

            let row = Row::new(&record);
            if row.len() < 2 {
                log.diagnostics.rows_skipped += 1;
                continue;
            }

            match decoder.decode(&row) {
                Decoded::Demographics(record) => log.demographics = Some(record),
                Decoded::PriorKnowledge(record) => log.prior_knowledge = Some(record),
                Decoded::AiTrust(record) => log.ai_trust = Some(record),
                Decoded::Randomization(record) => log.randomization = Some(record),
                Decoded::Reading(event) => log.reading.push(event),
                Decoded::SummaryViewing(record) => log.summary_viewing.push(record),
                Decoded::Recall(record) => log.recall.push(record),
                Decoded::Mcq(record) => mcq.push(record),
                Decoded::Rating(record) => log.ratings.push(record),
                Decoded::Manipulation(record) => log.manipulation_check = Some(record),
                Decoded::Ignored => log.diagnostics.rows_ignored += 1,
                Decoded::Skipped => log.diagnostics.rows_skipped += 1,
            }
        }

        let (mcq, dropped) = dedup_mcq(mcq, self.policy);
        log.mcq = mcq;
        log.diagnostics.dropped_duplicates = dropped;
        log.diagnostics.json_warnings = decoder.json_warnings;
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(raw: &str, policy: DedupPolicy) -> ParticipantLog {
        LogParser::new(policy)
            .parse_reader(raw.as_bytes(), None)
            .unwrap()
    }

    #[test]
    fn empty_input_yields_empty_aggregate() {
        let log = parse("", DedupPolicy::KeepFirst);
        assert!(log.is_empty());
        assert_eq!(log.diagnostics.rows_read, 0);
    }

    #[test]
    fn header_only_yields_empty_aggregate() {
        let log = parse("timestamp,phase,full_name\n", DedupPolicy::KeepLast);
        assert!(log.is_empty());
        assert_eq!(log.diagnostics.dedup_policy, DedupPolicy::KeepLast);
    }

    #[test]
    fn single_field_rows_are_skipped() {
        let log = parse("timestamp,phase\nlonely\n2025-11-03,consent,yes\n", DedupPolicy::KeepFirst);
        assert_eq!(log.diagnostics.rows_read, 2);
        assert_eq!(log.diagnostics.rows_skipped, 1);
        assert_eq!(log.diagnostics.rows_ignored, 1);
    }

    #[test]
    fn latest_single_occurrence_row_wins() {
        let raw = "timestamp,phase\n\
                   t1,manipulation_check,3,4,first\n\
                   t2,manipulation_check,6,7,second\n";
        let log = parse(raw, DedupPolicy::KeepFirst);
        let check = log.manipulation_check.unwrap();
        assert_eq!(check.coherence, 6);
        assert_eq!(check.strategy, "second");
    }
}
