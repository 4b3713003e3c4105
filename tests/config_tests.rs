mod common;
use common::temp_path;
use std::fs;
use std::path::Path;
use walkcal::config::{Config, check};
use walkcal::core::TieBreak;
use walkcal::errors::AppError;
use walkcal::models::ViewMode;

#[test]
fn test_missing_config_file_gives_defaults() {
    let path = temp_path("config_missing", "conf");
    let cfg = Config::load_from(Path::new(&path)).expect("defaults");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.day_start_hour, 6);
    assert_eq!(cfg.day_end_hour, 21);
    assert_eq!(cfg.default_view, ViewMode::Month);
    assert_eq!(cfg.holiday_tie_break, TieBreak::First);
    assert!(cfg.upcoming_only);
}

#[test]
fn test_partial_config_uses_serde_defaults() {
    let path = temp_path("config_partial", "conf");
    fs::write(&path, "default_view: week\nholiday_tie_break: latest\n").unwrap();

    let cfg = Config::load_from(Path::new(&path)).expect("load");
    assert_eq!(cfg.default_view, ViewMode::Week);
    assert_eq!(cfg.holiday_tie_break, TieBreak::Latest);
    assert_eq!(cfg.day_end_hour, 21);
}

#[test]
fn test_invalid_hours_rejected() {
    let path = temp_path("config_bad_hours", "conf");
    fs::write(&path, "day_start_hour: 20\nday_end_hour: 8\n").unwrap();

    match Config::load_from(Path::new(&path)) {
        Err(AppError::Config(msg)) => assert!(msg.contains("day_start_hour")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_save_and_reload() {
    let path = temp_path("config_roundtrip", "conf");
    let cfg = Config {
        data_file: "/tmp/walks.json".into(),
        color: false,
        ..Config::default()
    };
    cfg.save_to(Path::new(&path)).expect("save");

    let loaded = Config::load_from(Path::new(&path)).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn test_check_and_fill_missing_keys() {
    let path = temp_path("config_check", "conf");
    fs::write(&path, "data_file: /tmp/walks.json\ncolor: false\n").unwrap();

    let missing = check::missing_keys(Path::new(&path)).expect("check");
    assert!(missing.contains(&"day_start_hour".to_string()));
    assert!(missing.contains(&"holiday_tie_break".to_string()));
    assert!(!missing.contains(&"data_file".to_string()));

    let added = check::fill_missing(Path::new(&path)).expect("fix");
    assert_eq!(added, missing);
    assert!(check::missing_keys(Path::new(&path)).unwrap().is_empty());

    let cfg = Config::load_from(Path::new(&path)).expect("load");
    assert_eq!(cfg.data_file, "/tmp/walks.json");
    assert!(!cfg.color);
}

#[test]
fn test_data_path_expands_tilde() {
    let cfg = Config::default();
    let p = cfg.data_path();
    assert!(p.ends_with(".walkcal/snapshot.json"));
    assert!(!p.to_string_lossy().starts_with('~') || dirs::home_dir().is_none());
}
