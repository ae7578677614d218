#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_shipped_page() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.theme_key, "theme");
    assert_eq!(cfg.contact_key, "formData");
    assert_eq!(cfg.details_page, "form-details.html");
    assert_eq!(cfg.slide_interval_ms, 5_000);
    assert_eq!(cfg.reveal_delay_ms, 100);
    assert_eq!(cfg.reveal_threshold, 0.5);
    assert_eq!(cfg.back_to_top_offset, 300.0);
    assert_eq!(cfg.log_level(), log::Level::Info);
}

#[test]
fn empty_object_keeps_defaults() {
    let cfg = PageConfig::from_json("{}").unwrap();
    assert_eq!(cfg, PageConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = PageConfig::from_json(r#"{"slideIntervalMs": 8000, "logLevel": "debug"}"#).unwrap();
    assert_eq!(cfg.slide_interval_ms, 8_000);
    assert_eq!(cfg.log_level(), log::Level::Debug);
    assert_eq!(cfg.theme_key, DEFAULT_THEME_KEY);
}

#[test]
fn unknown_key_is_rejected() {
    let err = PageConfig::from_json(r#"{"slideInterval": 1}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(PageConfig::from_json("{"), Err(ConfigError::Parse(_))));
}

#[test]
fn zero_interval_is_rejected() {
    let err = PageConfig::from_json(r#"{"slideIntervalMs": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "slideIntervalMs", .. }));
}

#[test]
fn threshold_must_be_a_fraction() {
    for raw in [r#"{"revealThreshold": 0}"#, r#"{"revealThreshold": 1.5}"#] {
        let err = PageConfig::from_json(raw).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "revealThreshold", .. }), "{raw}");
    }
    assert!(PageConfig::from_json(r#"{"revealThreshold": 1}"#).is_ok());
}

#[test]
fn blank_storage_key_is_rejected() {
    let err = PageConfig::from_json(r#"{"themeKey": "  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "themeKey", .. }));
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    let cfg = PageConfig { log_level: "chatty".into(), ..PageConfig::default() };
    assert_eq!(cfg.log_level(), log::Level::Info);
}
