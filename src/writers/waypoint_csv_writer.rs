use crate::error::Result;
use crate::models::WaypointRecord;
use crate::utils::constants::{
    COLUMN_CODE, COLUMN_LATITUDE, COLUMN_LONGITUDE, COLUMN_STATE, COLUMN_WAYPOINT,
};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes waypoints as Waypoint,State,Code,Latitude,Longitude with raw DMS tokens.
///
/// Fields are never quoted; downstream readers are this same pipeline.
pub struct WaypointCsvWriter {
    delimiter: u8,
}

impl WaypointCsvWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn write_records(&self, records: &[WaypointRecord], path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(records, file)?;

        tracing::info!(
            path = %path.display(),
            records = records.len(),
            "Wrote waypoint table"
        );
        Ok(())
    }

    pub fn write_to<W: Write>(&self, records: &[WaypointRecord], sink: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote_style(csv::QuoteStyle::Never)
            .has_headers(false)
            .from_writer(sink);

        // Header goes out even for an empty table
        writer.write_record([
            COLUMN_WAYPOINT,
            COLUMN_STATE,
            COLUMN_CODE,
            COLUMN_LATITUDE,
            COLUMN_LONGITUDE,
        ])?;

        for record in records {
            writer.write_record([
                record.name.as_str(),
                record.state.as_str(),
                record.code.as_str(),
                record.latitude.as_str(),
                record.longitude.as_str(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl Default for WaypointCsvWriter {
    fn default() -> Self {
        Self::new()
    }
}
