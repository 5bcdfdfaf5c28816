use crate::error::{ProcessingError, Result};
use crate::models::WaypointRecord;
use crate::utils::constants::COLUMN_COUNT;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use validator::Validate;

/// Reads a previously extracted Waypoint,State,Code,Latitude,Longitude table
pub struct WaypointCsvReader {
    skip_invalid: bool,
}

impl WaypointCsvReader {
    pub fn new() -> Self {
        Self { skip_invalid: true }
    }

    pub fn with_skip_invalid(skip_invalid: bool) -> Self {
        Self { skip_invalid }
    }

    pub fn read_records(&self, path: &Path) -> Result<Vec<WaypointRecord>> {
        let file = File::open(path)?;
        self.read_from(file)
    }

    pub fn read_from<R: Read>(&self, source: R) -> Result<Vec<WaypointRecord>> {
        // Writers never quote, so a stray delimiter in a name shows up as an extra column
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(source);
        let headers = reader.headers()?.clone();
        let mut records = Vec::new();

        for (index, row) in reader.records().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(e) if e.is_io_error() || !self.skip_invalid => return Err(e.into()),
                Err(e) => {
                    tracing::warn!(row = index + 2, "Skipping unreadable row: {}", e);
                    continue;
                }
            };
            let row_number = row.position().map_or(index as u64 + 2, |p| p.line());

            if row.len() != COLUMN_COUNT {
                let raw = row.iter().collect::<Vec<_>>().join(",");
                if !self.skip_invalid {
                    return Err(ProcessingError::InvalidFormat(format!(
                        "row {} has {} fields, expected {}: '{}'",
                        row_number,
                        row.len(),
                        COLUMN_COUNT,
                        raw
                    )));
                }
                tracing::warn!(
                    row = row_number,
                    fields = row.len(),
                    raw = %raw,
                    "Skipping row with wrong field count"
                );
                continue;
            }

            let record: WaypointRecord = match row.deserialize(Some(&headers)) {
                Ok(record) => record,
                Err(e) if !self.skip_invalid => return Err(e.into()),
                Err(e) => {
                    tracing::warn!(row = row_number, "Skipping unreadable row: {}", e);
                    continue;
                }
            };

            if let Err(e) = record.validate() {
                if !self.skip_invalid {
                    return Err(e.into());
                }
                tracing::warn!(
                    row = row_number,
                    waypoint = %record.name,
                    code = %record.code,
                    "Skipping row with empty fields: {}",
                    e
                );
                continue;
            }

            records.push(record);
        }

        Ok(records)
    }
}

impl Default for WaypointCsvReader {
    fn default() -> Self {
        Self::new()
    }
}
