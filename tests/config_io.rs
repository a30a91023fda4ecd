//! Round-trip tests for config persistence on a real filesystem

use std::fs;

use swipecell::config::SwipeConfig;

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");

    fs::write(&path, "touch_slop: 14.0\nbase_settle_ms: 320\n").expect("Failed to write config");

    let content = fs::read_to_string(&path).expect("Failed to read config");
    let config = SwipeConfig::from_yaml(&content).expect("Failed to parse config");
    assert_eq!(config.touch_slop, 14.0);
    assert_eq!(config.base_settle_ms, 320);
    // Unspecified fields fall back to defaults
    assert_eq!(config.min_fling_velocity, 300.0);
    assert_eq!(config.max_settle_ms, 600);
}

#[cfg(not(target_os = "windows"))]
#[test]
fn test_save_then_load_under_config_dir() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::env::set_var("XDG_CONFIG_HOME", dir.path());

    let mut config = SwipeConfig::default();
    config.min_fling_velocity = 480.0;
    config.max_settle_ms = 450;
    config.save().expect("Failed to save config");

    let path = dir.path().join("swipecell").join("config.yaml");
    assert!(path.exists(), "save must create the config file");

    let loaded = SwipeConfig::load();
    assert_eq!(loaded.min_fling_velocity, 480.0);
    assert_eq!(loaded.max_settle_ms, 450);

    std::env::remove_var("XDG_CONFIG_HOME");
}
