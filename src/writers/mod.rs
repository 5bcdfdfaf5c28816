pub mod kml_writer;
pub mod waypoint_csv_writer;

pub use kml_writer::KmlWriter;
pub use waypoint_csv_writer::WaypointCsvWriter;
