pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use coordinates::{dms_to_decimal, format_degrees, CoordinateRole, DecimalPosition};
pub use filename::{kml_output_path, state_csv_path};
pub use progress::ProgressReporter;
