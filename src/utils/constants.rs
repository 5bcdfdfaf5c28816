/// Lines containing any of these are table captions or page furniture
pub const DEFAULT_SKIP_MARKERS: [&str; 3] = ["WAYPOINT STATE CODE LAT LONG", "VFR WAYPOINTS", "GEN"];

/// Fixed trailing columns: state, code, latitude, longitude
pub const TRAILING_FIELD_COUNT: usize = 4;
pub const MIN_FIELD_COUNT: usize = 5;

/// Packed DMS token shapes
pub const MIN_DMS_TOKEN_LEN: usize = 7;
pub const LAT_DMS_DIGITS: usize = 6;
pub const LON_DMS_DIGITS: usize = 7;

/// Tabular column headers
pub const COLUMN_WAYPOINT: &str = "Waypoint";
pub const COLUMN_STATE: &str = "State";
pub const COLUMN_CODE: &str = "Code";
pub const COLUMN_LATITUDE: &str = "Latitude";
pub const COLUMN_LONGITUDE: &str = "Longitude";
pub const COLUMN_COUNT: usize = 5;

/// KML
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";
pub const KML_CODE_NAME_SEPARATOR: &str = " - ";

/// Output defaults
pub const DEFAULT_FILE_STEM: &str = "waypoints";
pub const DEFAULT_EXTRACTED_CSV: &str = "waypoints_filtered.csv";
pub const DEFAULT_BY_STATE_DIR: &str = "waypoints_by_state";
pub const DEFAULT_KML_OUTPUT_DIR: &str = ".";
pub const DEFAULT_SETTINGS_FILE: &str = "waypoints.toml";
pub const SETTINGS_ENV_PREFIX: &str = "WAYPOINTS";

/// File extensions
pub const CSV_EXTENSION: &str = "csv";
pub const KML_EXTENSION: &str = "kml";
