//! Environment overrides live in their own test binary; variables are process-global
use pretty_assertions::assert_eq;
use waypoint_extractor::Settings;

#[test]
fn test_skip_markers_from_environment() {
    std::env::set_var("WAYPOINTS_SKIP_MARKERS", "AMDT,NOTAM");
    let settings = Settings::load(None);
    std::env::remove_var("WAYPOINTS_SKIP_MARKERS");

    let settings = settings.expect("Failed to load settings");
    assert_eq!(
        settings.skip_markers,
        vec!["AMDT".to_string(), "NOTAM".to_string()]
    );
    assert_eq!(settings.file_stem, "waypoints");
}
