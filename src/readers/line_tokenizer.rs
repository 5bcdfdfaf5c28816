use crate::models::WaypointRecord;
use crate::utils::constants::{DEFAULT_SKIP_MARKERS, MIN_FIELD_COUNT, TRAILING_FIELD_COUNT};
use std::fmt;

/// Why a text line did not produce a waypoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Banner(String),
    TooFewFields(usize),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Blank => write!(f, "blank line"),
            SkipReason::Banner(marker) => write!(f, "header or banner ('{}')", marker),
            SkipReason::TooFewFields(count) => write!(
                f,
                "only {} fields, need at least {}",
                count, MIN_FIELD_COUNT
            ),
        }
    }
}

/// Splits free-text table lines into waypoint records.
///
/// Columns are taken from the right: the last four whitespace-separated
/// tokens are state, code, latitude and longitude, and everything before
/// them is the (possibly multi-word) waypoint name.
pub struct RecordTokenizer {
    skip_markers: Vec<String>,
}

impl RecordTokenizer {
    pub fn new() -> Self {
        Self {
            skip_markers: DEFAULT_SKIP_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn with_skip_markers(skip_markers: Vec<String>) -> Self {
        Self { skip_markers }
    }

    pub fn skip_markers(&self) -> &[String] {
        &self.skip_markers
    }

    /// Parse a single line of page text
    pub fn tokenize(&self, line: &str) -> Result<WaypointRecord, SkipReason> {
        let line = line.trim();

        if line.is_empty() {
            return Err(SkipReason::Blank);
        }

        if let Some(marker) = self.skip_markers.iter().find(|m| line.contains(m.as_str())) {
            tracing::debug!(line, marker = %marker, "Skipping header line");
            return Err(SkipReason::Banner(marker.clone()));
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < MIN_FIELD_COUNT {
            let reason = SkipReason::TooFewFields(parts.len());
            tracing::warn!(line, "Skipping unmatched line: {}", reason);
            return Err(reason);
        }

        let (name_parts, fields) = parts.split_at(parts.len() - TRAILING_FIELD_COUNT);

        Ok(WaypointRecord::new(
            name_parts.join(" "),
            fields[0].to_string(),
            fields[1].to_string(),
            fields[2].to_string(),
            fields[3].to_string(),
        ))
    }
}

impl Default for RecordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
