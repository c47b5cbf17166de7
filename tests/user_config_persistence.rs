//! Integration tests for persisting user configuration to disk.

use std::path::PathBuf;

use spotlight::core::spotlight_panel::{PanelEvent, SpotlightPanel};
use spotlight::core::monitoring_model::MonitoringModel;
use spotlight::core::user_config::UserConfig;

/// A unique, initially absent config path under the system temp dir.
fn scratch_config(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "spotlight-test-{}-{}",
        tag,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir.join("nested").join("config.json")
}

#[test]
fn missing_file_loads_defaults() {
    let path = scratch_config("missing");
    let config = UserConfig::load(&path).unwrap();
    assert!(!config.spotlight_realtime());
    assert_eq!(config.path(), Some(path.as_path()));
}

#[test]
fn setter_writes_through_and_reloads() {
    let path = scratch_config("roundtrip");
    let mut config = UserConfig::load(&path).unwrap();

    config.set_spotlight_realtime(true);
    assert!(path.exists(), "config file should be created with its directory");

    let reloaded = UserConfig::load(&path).unwrap();
    assert!(reloaded.spotlight_realtime());
}

#[test]
fn realtime_toggle_reaches_disk() {
    let path = scratch_config("toggle");
    let mut config = UserConfig::load(&path).unwrap();
    let mut source = MonitoringModel::default();
    let mut panel = SpotlightPanel::new(&mut config);

    panel.handle_event(PanelEvent::RealtimeToggled(true), &mut source, &mut config);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"spotlight_realtime\": true"), "got: {text}");
}

#[test]
fn malformed_file_is_an_error_but_load_or_default_recovers() {
    let path = scratch_config("malformed");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ not json").unwrap();

    assert!(UserConfig::load(&path).is_err());

    let config = UserConfig::load_or_default(&path);
    assert!(!config.spotlight_realtime());
    assert_eq!(config.path(), Some(path.as_path()));
}
