use std::path::PathBuf;
use std::time::Duration;

use approx::assert_relative_eq;

use juxta_core::config::ViewerConfig;
use juxta_core::geometry::DisplayMode;

#[test]
fn test_defaults() {
    let config = ViewerConfig::default();
    assert_eq!(config.display.initial_mode, DisplayMode::Fit);
    assert_relative_eq!(config.display.initial_divider, 50.0);
    assert_eq!(config.validation.max_file_bytes, 10 * 1024 * 1024);
    assert_eq!(config.export.directory, None);
    assert_eq!(config.notifications.duration(), Duration::from_millis(3000));
    assert_eq!(config.loading.slow_decode_warn(), Duration::from_secs(10));
}

#[test]
fn test_missing_sections_use_defaults() {
    let config: ViewerConfig =
        serde_json::from_str(r#"{ "display": { "initial_mode": "one_to_one", "initial_divider": 30.0 } }"#)
            .unwrap();
    assert_eq!(config.display.initial_mode, DisplayMode::OneToOne);
    assert_eq!(config.validation, Default::default());
    assert_eq!(config.notifications.duration_ms, 3000);
}

#[test]
fn test_serde_round_trip() {
    let mut config = ViewerConfig::default();
    config.export.directory = Some(PathBuf::from("/tmp/exports"));
    config.display.initial_mode = DisplayMode::Fullscreen;
    let json = serde_json::to_string(&config).unwrap();
    let back: ViewerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_viewport_from_config() {
    let config: ViewerConfig = serde_json::from_str(
        r#"{ "display": { "initial_mode": "fullscreen", "initial_divider": 150.0 } }"#,
    )
    .unwrap();
    let vp = config.viewport();
    assert_eq!(vp.state().display_mode(), DisplayMode::Fullscreen);
    assert_relative_eq!(vp.state().divider_percent(), 100.0);
}
