//! Appends rows to participant event logs.
//!
//! Rows are `timestamp, phase, <values>`. The header `timestamp,phase,<keys>`
//! is written only when the file is new or empty, so later rows of other
//! phases keep their own column meaning.

use std::fs::OpenOptions;
use std::path::Path;

use chrono::Local;
use csv::WriterBuilder;

use crate::error::LogError;

/// Local ISO-8601 with microseconds.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// What [`LogWriter::append`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendOutcome {
    pub timestamp: String,
    /// The file was created (or empty) and got a header row.
    pub created: bool,
    /// Number of values written after `timestamp` and `phase`.
    pub fields: usize,
}

/// Appends event rows to participant log files.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogWriter;

impl LogWriter {
    /// Current local time in log format.
    #[must_use]
    pub fn now() -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }

    /// Append one row stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `LogError` if the directory or file cannot be written.
    pub fn append(
        &self,
        path: &Path,
        phase: &str,
        fields: &[(String, String)],
    ) -> Result<AppendOutcome, LogError> {
        self.append_at(path, &Self::now(), phase, fields)
    }

    /// Append one row with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// Returns `LogError` if the directory or file cannot be written.
    pub fn append_at(
        &self,
        path: &Path,
        timestamp: &str,
        phase: &str,
        fields: &[(String, String)],
    ) -> Result<AppendOutcome, LogError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let created = file.metadata()?.len() == 0;
        let mut writer = WriterBuilder::new().flexible(true).from_writer(file);

        if created {
            let header = ["timestamp", "phase"]
                .into_iter()
                .chain(fields.iter().map(|(key, _)| key.as_str()));
            writer.write_record(header)?;
        }
        let row = [timestamp, phase]
            .into_iter()
            .chain(fields.iter().map(|(_, value)| value.as_str()));
        writer.write_record(row)?;
        writer.flush()?;

        Ok(AppendOutcome {
            timestamp: timestamp.to_string(),
            created,
            fields: fields.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn header_is_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("P001_log.csv");
        let writer = LogWriter;

        let first = writer
            .append_at(&path, "t1", "demographics", &pairs(&[("full_name", "Jane"), ("age", "30")]))
            .unwrap();
        let second = writer
            .append_at(&path, "t2", "consent", &pairs(&[("agreed", "true")]))
            .unwrap();

        assert!(first.created);
        assert!(!second.created);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "timestamp,phase,full_name,age\nt1,demographics,Jane,30\nt2,consent,true\n"
        );
    }

    #[test]
    fn multiline_values_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("P002_log.csv");
        LogWriter
            .append_at(&path, "t1", "recall_response", &pairs(&[("recall_text", "line one\nline, two")]))
            .unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("t1,recall_response,\"line one\nline, two\"\n"));
    }

    #[test]
    fn timestamps_have_microseconds() {
        let now = LogWriter::now();
        let (_, fraction) = now.split_once('.').unwrap();
        assert_eq!(fraction.len(), 6);
        assert!(now.contains('T'));
    }
}
