//! Sequential participant ID registry (`participants.csv`).
//!
//! Allocation reads the row count and appends the next ID. Callers must hold
//! the data-directory lock across [`ParticipantRegistry::allocate`].

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use rcl_core::ids::ParticipantId;
use rcl_core::responses::ParticipantEntry;

use crate::error::LogError;
use crate::writer::LogWriter;

const HEADER: [&str; 3] = ["participant_id", "timestamp", "name"];

pub struct ParticipantRegistry {
    path: PathBuf,
}

impl ParticipantRegistry {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Registered participants; a missing file counts as zero.
    ///
    /// # Errors
    ///
    /// Returns `LogError` if the file exists but cannot be read.
    pub fn count(&self) -> Result<u32, LogError> {
        let rows = self.rows()?;
        Ok(u32::try_from(rows.len()).unwrap_or(u32::MAX))
    }

    /// Every registry row that carries a valid participant ID.
    ///
    /// # Errors
    ///
    /// Returns `LogError` if the file exists but cannot be read.
    pub fn list(&self) -> Result<Vec<ParticipantEntry>, LogError> {
        Ok(self
            .rows()?
            .into_iter()
            .filter_map(|row| {
                let id = row.first()?.parse::<ParticipantId>().ok();
                if id.is_none() {
                    tracing::warn!(row = ?row, "registry row without a valid participant id");
                }
                Some(ParticipantEntry {
                    participant_id: id?,
                    timestamp: row.get(1).cloned().unwrap_or_default(),
                    name: row.get(2).cloned().unwrap_or_default(),
                })
            })
            .collect())
    }

    /// Append the next participant and return its entry.
    ///
    /// # Errors
    ///
    /// Returns `LogError` if the registry cannot be read or written.
    pub fn allocate(&self, name: &str) -> Result<ParticipantEntry, LogError> {
        let count = self.count()?;
        let entry = ParticipantEntry {
            participant_id: ParticipantId::after(count),
            timestamp: LogWriter::now(),
            name: name.trim().to_string(),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let created = file.metadata()?.len() == 0;
        let mut writer = WriterBuilder::new().from_writer(file);
        if created {
            writer.write_record(HEADER)?;
        }
        writer.write_record([
            entry.participant_id.to_string().as_str(),
            entry.timestamp.as_str(),
            entry.name.as_str(),
        ])?;
        writer.flush()?;

        tracing::debug!(participant = %entry.participant_id, "participant allocated");
        Ok(entry)
    }

    /// Data rows, excluding a leading header row when present.
    fn rows(&self) -> Result<Vec<Vec<String>>, LogError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }
        if rows.first().is_some_and(|first| is_header(first)) {
            rows.remove(0);
        }
        Ok(rows)
    }
}

fn is_header(row: &[String]) -> bool {
    row.first().is_some_and(|cell| {
        let cell = cell.to_ascii_lowercase();
        cell.contains("participant") || cell.contains("timestamp")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_registry_counts_zero() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ParticipantRegistry::new(dir.path().join("participants.csv"));
        assert_eq!(registry.count().unwrap(), 0);
        assert!(registry.list().unwrap().is_empty());
    }

    #[test]
    fn allocation_is_sequential() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ParticipantRegistry::new(dir.path().join("participants.csv"));

        let first = registry.allocate("Jane Doe").unwrap();
        let second = registry.allocate("  Ola Nordmann ").unwrap();

        assert_eq!(first.participant_id.to_string(), "P001");
        assert_eq!(second.participant_id.to_string(), "P002");
        assert_eq!(second.name, "Ola Nordmann");
        assert_eq!(registry.count().unwrap(), 2);

        let listed = registry.list().unwrap();
        assert_eq!(listed, vec![first, second]);
    }

    #[test]
    fn headerless_registry_counts_every_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("participants.csv");
        std::fs::write(&path, "P001,t1,a\nP002,t2,b\n").unwrap();
        let registry = ParticipantRegistry::new(&path);
        assert_eq!(registry.count().unwrap(), 2);
        assert_eq!(
            registry.allocate("c").unwrap().participant_id,
            ParticipantId::new(3)
        );
    }

    #[test]
    fn existing_header_is_not_counted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("participants.csv");
        std::fs::write(&path, "participant_id,timestamp,full_name\nP077,t,x\n").unwrap();
        let registry = ParticipantRegistry::new(&path);
        assert_eq!(registry.count().unwrap(), 1);
    }
}
