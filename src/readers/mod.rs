pub mod document_reader;
pub mod line_tokenizer;
pub mod waypoint_csv_reader;

pub use document_reader::DocumentReader;
pub use line_tokenizer::{RecordTokenizer, SkipReason};
pub use waypoint_csv_reader::WaypointCsvReader;
