use crate::models::{LabelScheme, Placemark, PlacemarkDocument, WaypointRecord};
use crate::utils::coordinates::DecimalPosition;

/// The three parallel documents produced by one export pass
#[derive(Debug, Clone, PartialEq)]
pub struct PlacemarkSet {
    pub documents: Vec<PlacemarkDocument>,
    pub total_records: usize,
    pub skipped_records: usize,
}

impl PlacemarkSet {
    pub fn document(&self, scheme: LabelScheme) -> Option<&PlacemarkDocument> {
        self.documents.iter().find(|d| d.scheme == scheme)
    }

    pub fn placemark_count(&self) -> usize {
        self.total_records - self.skipped_records
    }
}

/// Builds placemark documents from waypoint records.
///
/// Records whose latitude or longitude cannot be normalized are left out of
/// every document; normalization runs once per record no matter how many
/// schemes are requested.
pub struct PlacemarkExporter {
    schemes: Vec<LabelScheme>,
}

impl PlacemarkExporter {
    pub fn new() -> Self {
        Self {
            schemes: LabelScheme::ALL.to_vec(),
        }
    }

    pub fn with_schemes(schemes: Vec<LabelScheme>) -> Self {
        Self { schemes }
    }

    /// Build a single document for one label scheme
    pub fn export(&self, records: &[WaypointRecord], scheme: LabelScheme) -> PlacemarkDocument {
        let mut document = PlacemarkDocument::new(scheme);
        for (record, position) in resolve_positions(records) {
            document.push(Placemark::from_record(record, position, scheme));
        }
        document
    }

    /// Build one document per configured scheme from a single normalization pass
    pub fn export_all(&self, records: &[WaypointRecord]) -> PlacemarkSet {
        let resolved = resolve_positions(records);

        let documents = self
            .schemes
            .iter()
            .map(|&scheme| PlacemarkDocument {
                scheme,
                placemarks: resolved
                    .iter()
                    .map(|(record, position)| Placemark::from_record(record, *position, scheme))
                    .collect(),
            })
            .collect();

        PlacemarkSet {
            documents,
            total_records: records.len(),
            skipped_records: records.len() - resolved.len(),
        }
    }
}

impl Default for PlacemarkExporter {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_positions(records: &[WaypointRecord]) -> Vec<(&WaypointRecord, DecimalPosition)> {
    records
        .iter()
        .filter_map(|record| record.decimal_position().map(|position| (record, position)))
        .collect()
}
