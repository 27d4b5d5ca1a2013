//! Participant identifiers.
//!
//! IDs are `P` followed by a sequence number zero-padded to three digits
//! (`P001`, `P078`, `P1000`). Log files carry the ID as a prefix, optionally
//! followed by a cleaned participant name: `P078_log.csv`,
//! `P078-Jane-Doe_log.csv`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CoreError;

/// Suffix shared by every participant log file name.
pub const LOG_FILE_SUFFIX: &str = "_log.csv";

/// A sequential participant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(u32);

impl ParticipantId {
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    #[must_use]
    pub const fn number(self) -> u32 {
        self.0
    }

    /// The ID that follows `count` already-registered participants.
    #[must_use]
    pub const fn after(count: u32) -> Self {
        Self(count + 1)
    }

    /// Default log file name for this participant (`P078_log.csv`).
    #[must_use]
    pub fn log_file_name(self) -> String {
        format!("{self}{LOG_FILE_SUFFIX}")
    }

    /// Extract the participant from a log file name.
    ///
    /// Accepts `P078_log.csv` and `P078-Any-Name_log.csv`. Returns `None` for
    /// anything else.
    #[must_use]
    pub fn from_log_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(LOG_FILE_SUFFIX)?;
        let id = stem.split('-').next()?;
        id.parse().ok()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{:03}", self.0)
    }
}

impl FromStr for ParticipantId {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix('P')
            .or_else(|| trimmed.strip_prefix('p'))
            .ok_or_else(|| invalid(raw))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(raw));
        }
        digits.parse::<u32>().map(Self).map_err(|_| invalid(raw))
    }
}

fn invalid(raw: &str) -> CoreError {
    CoreError::Validation(format!(
        "invalid participant id '{raw}': expected 'P' followed by digits (e.g. P078)"
    ))
}

impl Serialize for ParticipantId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ParticipantId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl JsonSchema for ParticipantId {
    fn schema_name() -> Cow<'static, str> {
        "ParticipantId".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^[Pp][0-9]+$"
        })
    }
}
