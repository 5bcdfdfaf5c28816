use crate::error::{ProcessingError, Result};
use crate::models::LabelScheme;
use crate::processors::{PlacemarkExporter, PlacemarkSet, WaypointCollection};
use crate::utils::constants::DEFAULT_FILE_STEM;
use crate::utils::filename::{kml_output_path, state_csv_path};
use crate::utils::progress::ProgressReporter;
use crate::writers::{KmlWriter, WaypointCsvWriter};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// What one export pass wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub state: Option<String>,
    pub records: usize,
    pub placemarks: usize,
    pub csv_path: Option<PathBuf>,
    pub kml_paths: Vec<(LabelScheme, PathBuf)>,
}

impl ExportSummary {
    pub fn skipped(&self) -> usize {
        self.records - self.placemarks
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();

        if let Some(ref csv_path) = self.csv_path {
            summary.push_str(&format!(
                "Saved {} waypoints to {}\n",
                self.records,
                csv_path.display()
            ));
        }

        match self.state {
            Some(ref state) => summary.push_str(&format!("Generated KML files for {}:\n", state)),
            None => summary.push_str("Generated KML files:\n"),
        }
        for (scheme, path) in &self.kml_paths {
            summary.push_str(&format!(" - {} ({})\n", path.display(), scheme));
        }
        summary.push_str(&format!(
            "Placemarks: {} of {} ({} skipped for invalid coordinates)\n",
            self.placemarks,
            self.records,
            self.skipped()
        ));

        summary
    }
}

/// Writes waypoint collections to CSV and KML files under one directory
pub struct FileExporter {
    output_dir: PathBuf,
    file_stem: String,
    max_workers: usize,
    placemarks: PlacemarkExporter,
    kml_writer: KmlWriter,
    csv_writer: WaypointCsvWriter,
}

impl FileExporter {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            file_stem: DEFAULT_FILE_STEM.to_string(),
            max_workers: num_cpus::get(),
            placemarks: PlacemarkExporter::new(),
            kml_writer: KmlWriter::new(),
            csv_writer: WaypointCsvWriter::new(),
        }
    }

    pub fn with_file_stem(mut self, file_stem: &str) -> Self {
        self.file_stem = file_stem.to_string();
        self
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn with_placemark_exporter(mut self, placemarks: PlacemarkExporter) -> Self {
        self.placemarks = placemarks;
        self
    }

    /// Write {stem}_name.kml, {stem}_code.kml and {stem}_code_name.kml for the whole collection
    pub fn export_whole(&self, collection: &WaypointCollection) -> Result<ExportSummary> {
        std::fs::create_dir_all(&self.output_dir)?;

        let set = self.placemarks.export_all(collection.records());
        let kml_paths = self.write_documents(&set, None)?;

        Ok(ExportSummary {
            state: None,
            records: set.total_records,
            placemarks: set.placemark_count(),
            csv_path: None,
            kml_paths,
        })
    }

    /// Write one CSV and three KML files per state, states processed in parallel.
    /// Takes the output of `WaypointCollection::partition_by_state`.
    pub fn export_by_state(
        &self,
        partitions: &BTreeMap<String, WaypointCollection>,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<ExportSummary>> {
        std::fs::create_dir_all(&self.output_dir)?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| ProcessingError::Config(e.to_string()))?;

        // Each partition only touches its own files
        pool.install(|| {
            partitions
                .par_iter()
                .map(|(state, partition)| {
                    let result = self.export_state(state, partition);
                    if let Some(p) = progress {
                        p.increment(1);
                    }
                    result
                })
                .collect()
        })
    }

    /// Export a single state's partition
    pub fn export_state(&self, state: &str, partition: &WaypointCollection) -> Result<ExportSummary> {
        let csv_path = state_csv_path(&self.output_dir, &self.file_stem, state);
        self.csv_writer.write_records(partition.records(), &csv_path)?;

        let set = self.placemarks.export_all(partition.records());
        let kml_paths = self.write_documents(&set, Some(state))?;

        Ok(ExportSummary {
            state: Some(state.to_string()),
            records: set.total_records,
            placemarks: set.placemark_count(),
            csv_path: Some(csv_path),
            kml_paths,
        })
    }

    fn write_documents(
        &self,
        set: &PlacemarkSet,
        state: Option<&str>,
    ) -> Result<Vec<(LabelScheme, PathBuf)>> {
        let mut paths = Vec::with_capacity(set.documents.len());
        for document in &set.documents {
            let path = kml_output_path(&self.output_dir, &self.file_stem, state, document.scheme);
            self.kml_writer.write_document(document, &path)?;
            paths.push((document.scheme, path));
        }
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WaypointRecord;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn waypoint(name: &str, state: &str, code: &str, latitude: &str) -> WaypointRecord {
        WaypointRecord::new(
            name.to_string(),
            state.to_string(),
            code.to_string(),
            latitude.to_string(),
            "1393017E".to_string(),
        )
    }

    fn collection() -> WaypointCollection {
        vec![
            waypoint("MOUNT ISA", "QLD", "MTI", "204126S"),
            waypoint("ALBURY", "NSW", "ABX", "360402S"),
            waypoint("BROKEN", "QLD", "BRK", "2041S"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_export_whole() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let exporter = FileExporter::new(temp_dir.path()).with_max_workers(1);

        let summary = exporter.export_whole(&collection())?;

        assert_eq!(summary.records, 3);
        assert_eq!(summary.placemarks, 2);
        assert_eq!(summary.skipped(), 1);
        assert!(summary.csv_path.is_none());
        for name in ["waypoints_name.kml", "waypoints_code.kml", "waypoints_code_name.kml"] {
            assert!(temp_dir.path().join(name).exists(), "missing {}", name);
        }
        Ok(())
    }

    #[test]
    fn test_export_by_state() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let output_dir = temp_dir.path().join("waypoints_by_state");
        let exporter = FileExporter::new(&output_dir).with_max_workers(2);

        let summaries = exporter.export_by_state(&collection().partition_by_state(), None)?;

        let states: Vec<_> = summaries.iter().map(|s| s.state.clone().unwrap()).collect();
        assert_eq!(states, vec!["NSW".to_string(), "QLD".to_string()]);

        let qld = &summaries[1];
        assert_eq!(qld.records, 2);
        assert_eq!(qld.placemarks, 1);

        // The CSV keeps every record, KML only the convertible ones
        let csv = std::fs::read_to_string(output_dir.join("waypoints_QLD.csv"))?;
        assert_eq!(csv.lines().count(), 3);
        let kml = std::fs::read_to_string(output_dir.join("waypoints_QLD_code.kml"))?;
        assert!(kml.contains("<name>MTI</name>"));
        assert!(!kml.contains("BRK"));

        for name in [
            "waypoints_NSW.csv",
            "waypoints_NSW_name.kml",
            "waypoints_NSW_code.kml",
            "waypoints_NSW_code_name.kml",
        ] {
            assert!(output_dir.join(name).exists(), "missing {}", name);
        }
        Ok(())
    }

    #[test]
    fn test_export_by_state_writes_only_given_partitions() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let exporter = FileExporter::new(temp_dir.path()).with_max_workers(1);

        let mut partitions = collection().partition_by_state();
        partitions.remove("NSW");
        let summaries = exporter.export_by_state(&partitions, None)?;

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].state.as_deref(), Some("QLD"));
        assert!(temp_dir.path().join("waypoints_QLD.csv").exists());
        assert!(!temp_dir.path().join("waypoints_NSW.csv").exists());
        Ok(())
    }

    #[test]
    fn test_summary_text() {
        let summary = ExportSummary {
            state: Some("QLD".to_string()),
            records: 2,
            placemarks: 1,
            csv_path: Some(PathBuf::from("waypoints_QLD.csv")),
            kml_paths: vec![(LabelScheme::ByName, PathBuf::from("waypoints_QLD_name.kml"))],
        };

        let text = summary.summary();
        assert!(text.contains("Saved 2 waypoints to waypoints_QLD.csv"));
        assert!(text.contains("Generated KML files for QLD:"));
        assert!(text.contains(" - waypoints_QLD_name.kml (Waypoint Name as Label)"));
        assert!(text.contains("1 skipped"));
    }
}
