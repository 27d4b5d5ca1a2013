//! Fail-soft field access for heterogeneous CSV rows.

use csv::StringRecord;
use rcl_core::enums::Timing;
use serde_json::{Map, Value};

/// A data row with positional accessors that never fail.
///
/// Missing fields read as empty; unparseable numbers fall back to the
/// caller's default.
pub(crate) struct Row<'a> {
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    pub(crate) const fn new(record: &'a StringRecord) -> Self {
        Self { record }
    }

    pub(crate) fn len(&self) -> usize {
        self.record.len()
    }

    pub(crate) fn raw(&self, index: usize) -> &'a str {
        self.record.get(index).unwrap_or("")
    }

    pub(crate) fn text(&self, index: usize) -> String {
        self.raw(index).to_string()
    }

    /// Integer cell. Decimal values are truncated (`"1200.0"` reads as 1200).
    pub(crate) fn int(&self, index: usize, default: i64) -> i64 {
        parse_int(self.raw(index)).unwrap_or(default)
    }

    pub(crate) fn float(&self, index: usize, default: f64) -> f64 {
        self.raw(index)
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .unwrap_or(default)
    }

    /// `true` only for a case-insensitive `"true"`.
    pub(crate) fn flag(&self, index: usize) -> bool {
        self.raw(index).trim().eq_ignore_ascii_case("true")
    }

    pub(crate) fn timing(&self, index: usize) -> Option<Timing> {
        Timing::from_label(self.raw(index))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn parse_int(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(|value| value.trunc() as i64)
    })
}

/// Outcome of decoding a JSON-encoded cell.
#[derive(Debug, PartialEq)]
pub(crate) enum JsonCell {
    /// The cell was blank.
    Empty,
    Parsed(Value),
    /// The cell had content that is not JSON.
    Malformed,
}

impl JsonCell {
    /// Parse a cell that may carry doubled quotes from re-escaped CSV.
    pub(crate) fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::Empty;
        }
        serde_json::from_str(raw)
            .or_else(|_| serde_json::from_str(&raw.replace("\"\"", "\"")))
            .map_or(Self::Malformed, Self::Parsed)
    }

    pub(crate) const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed)
    }

    pub(crate) fn into_object(self) -> Map<String, Value> {
        match self {
            Self::Parsed(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    pub(crate) fn into_string_list(self) -> Option<Vec<String>> {
        match self {
            Self::Parsed(Value::Array(items)) => Some(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            _ => None,
        }
    }
}

/// Question index from an answer-map key: `"q3"`, `"Q3"`, or `"3"`.
pub(crate) fn question_index(key: &str) -> Option<usize> {
    let key = key.trim();
    let digits = key
        .strip_prefix('q')
        .or_else(|| key.strip_prefix('Q'))
        .unwrap_or(key);
    digits.parse().ok()
}

/// Option index from a JSON answer value. `null`, negatives, and non-numbers
/// mean "unanswered".
pub(crate) fn option_index(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|v| usize::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
