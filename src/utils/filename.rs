use crate::models::LabelScheme;
use crate::utils::constants::{CSV_EXTENSION, KML_EXTENSION};
use std::path::{Path, PathBuf};

/// KML path for one label scheme: {stem}_{suffix}.kml, or {stem}_{state}_{suffix}.kml per state
pub fn kml_output_path(dir: &Path, stem: &str, state: Option<&str>, scheme: LabelScheme) -> PathBuf {
    let filename = match state {
        Some(state) => format!(
            "{}_{}_{}.{}",
            stem,
            state,
            scheme.file_suffix(),
            KML_EXTENSION
        ),
        None => format!("{}_{}.{}", stem, scheme.file_suffix(), KML_EXTENSION),
    };
    dir.join(filename)
}

/// Per-state CSV path: {stem}_{state}.csv
pub fn state_csv_path(dir: &Path, stem: &str, state: &str) -> PathBuf {
    dir.join(format!("{}_{}.{}", stem, state, CSV_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_file_kml_names() {
        let dir = Path::new(".");
        assert_eq!(
            kml_output_path(dir, "waypoints", None, LabelScheme::ByName),
            dir.join("waypoints_name.kml")
        );
        assert_eq!(
            kml_output_path(dir, "waypoints", None, LabelScheme::ByCode),
            dir.join("waypoints_code.kml")
        );
        assert_eq!(
            kml_output_path(dir, "waypoints", None, LabelScheme::ByCodeName),
            dir.join("waypoints_code_name.kml")
        );
    }

    #[test]
    fn test_per_state_names() {
        let dir = Path::new("waypoints_by_state");
        assert_eq!(
            kml_output_path(dir, "waypoints", Some("QLD"), LabelScheme::ByCodeName),
            dir.join("waypoints_QLD_code_name.kml")
        );
        assert_eq!(
            state_csv_path(dir, "waypoints", "NSW"),
            dir.join("waypoints_NSW.csv")
        );
    }
}
