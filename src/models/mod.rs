pub mod placemark;
pub mod waypoint;

pub use placemark::{split_code_name_label, LabelScheme, Placemark, PlacemarkDocument};
pub use waypoint::WaypointRecord;
