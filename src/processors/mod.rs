pub mod collection;
pub mod file_exporter;
pub mod placemark_exporter;
pub mod waypoint_extractor;

pub use collection::WaypointCollection;
pub use file_exporter::{ExportSummary, FileExporter};
pub use placemark_exporter::{PlacemarkExporter, PlacemarkSet};
pub use waypoint_extractor::{ExtractionReport, WaypointExtractor};
