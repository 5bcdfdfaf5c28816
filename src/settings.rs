use crate::error::{ProcessingError, Result};
use crate::utils::constants::{
    DEFAULT_BY_STATE_DIR, DEFAULT_EXTRACTED_CSV, DEFAULT_FILE_STEM, DEFAULT_KML_OUTPUT_DIR,
    DEFAULT_SETTINGS_FILE, DEFAULT_SKIP_MARKERS, SETTINGS_ENV_PREFIX,
};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime settings: built-in defaults, then an optional TOML file, then WAYPOINTS_* variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub skip_markers: Vec<String>,
    pub extracted_csv: PathBuf,
    pub by_state_dir: PathBuf,
    pub kml_output_dir: PathBuf,
    pub file_stem: String,
    pub max_workers: usize,
    pub quiet: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            skip_markers: DEFAULT_SKIP_MARKERS.iter().map(|m| m.to_string()).collect(),
            extracted_csv: PathBuf::from(DEFAULT_EXTRACTED_CSV),
            by_state_dir: PathBuf::from(DEFAULT_BY_STATE_DIR),
            kml_output_dir: PathBuf::from(DEFAULT_KML_OUTPUT_DIR),
            file_stem: DEFAULT_FILE_STEM.to_string(),
            max_workers: num_cpus::get(),
            quiet: false,
        }
    }
}

impl Settings {
    /// Load settings; an explicit file must exist, the default one is optional
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let file_source = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        let settings: Settings = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(SETTINGS_ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("skip_markers"),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.max_workers == 0 {
            return Err(ProcessingError::Config(
                "max_workers must be at least 1".to_string(),
            ));
        }
        if self.file_stem.trim().is_empty() {
            return Err(ProcessingError::Config(
                "file_stem must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
