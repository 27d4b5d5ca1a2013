use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Timing;

/// A `reading_behavior` row, dispatched on the event name in field 2.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReadingEvent {
    ReadingComplete(ReadingComplete),
    SummaryOverlayOpened(OverlayOpened),
    SummaryOverlayClosed(OverlayClosed),
    VisibilityChange(VisibilityChange),
}

impl ReadingEvent {
    #[must_use]
    pub const fn article_num(&self) -> i64 {
        match self {
            Self::ReadingComplete(event) => event.article_num,
            Self::SummaryOverlayOpened(event) => event.article_num,
            Self::SummaryOverlayClosed(event) => event.article_num,
            Self::VisibilityChange(event) => event.article_num,
        }
    }
}

/// The participant finished reading an article.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReadingComplete {
    pub timestamp: String,
    pub reading_time_ms: i64,
    /// Overlay time accumulated while reading (synchronous timing only).
    pub summary_time_ms: i64,
    pub overlay_count: i64,
    /// Percentage; `100` when not recorded.
    pub scroll_depth: i64,
    pub article_num: i64,
    pub article_key: String,
    pub timing: Option<Timing>,
}

/// Summary overlay opened during synchronous reading.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OverlayOpened {
    pub timestamp: String,
    pub article_num: i64,
    pub overlay_num: i64,
    pub article_key: String,
    pub timing: Option<Timing>,
}

/// Summary overlay closed; `duration_ms` is how long it stayed open.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OverlayClosed {
    pub timestamp: String,
    pub article_num: i64,
    pub duration_ms: i64,
    pub overlay_num: i64,
    pub article_key: String,
    pub timing: Option<Timing>,
}

/// Browser tab visibility toggled while an article was open.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VisibilityChange {
    pub timestamp: String,
    pub is_visible: bool,
    pub article_num: i64,
    pub article_key: String,
    pub timing: Option<Timing>,
}
