use gpxfix::config::Config;
use gpxfix::errors::AppError;
use gpxfix::utils::path::default_output_path;
use std::path::Path;

mod common;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.gap_threshold, 15);
    assert_eq!(cfg.timestamp_interval, 15);
    assert_eq!(cfg.output_prefix, "fixed_");
    assert_eq!(cfg.indent, 2);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_partial_yaml_falls_back_to_defaults() {
    let cfg = Config::from_yaml("gap_threshold: 60\n").expect("parse");
    assert_eq!(cfg.gap_threshold, 60);
    assert_eq!(cfg.timestamp_interval, 15);
    assert_eq!(cfg.output_prefix, "fixed_");

    assert_eq!(Config::from_yaml("").expect("empty"), Config::default());
}

#[test]
fn test_missing_fields() {
    let missing = Config::missing_fields("gap_threshold: 60\nindent: 0\n").expect("yaml");
    assert_eq!(missing, vec!["timestamp_interval", "output_prefix"]);

    let full = Config::default().to_yaml().expect("yaml");
    assert!(Config::missing_fields(&full).expect("yaml").is_empty());
}

#[test]
fn test_zero_interval_is_invalid() {
    let cfg = Config::from_yaml("timestamp_interval: 0\n").expect("parse");
    assert!(matches!(cfg.validate(), Err(AppError::Config(_))));
}

#[test]
fn test_save_and_load() {
    let dir = common::temp_dir("config_save");
    let path = dir.join("nested").join("gpxfix.conf");
    let cfg = Config {
        gap_threshold: 45,
        output_prefix: "clean_".into(),
        ..Config::default()
    };

    cfg.save_to(&path).expect("save");
    assert_eq!(Config::load_from(&path).expect("load"), cfg);

    // Missing file → defaults
    assert_eq!(
        Config::load_from(&dir.join("absent.conf")).expect("load"),
        Config::default()
    );
}

#[test]
fn test_default_output_path() {
    assert_eq!(
        default_output_path(Path::new("/data/tracks/ride.gpx"), "fixed_"),
        Path::new("/data/tracks/fixed_ride.gpx")
    );
    assert_eq!(
        default_output_path(Path::new("ride.gpx"), "x_"),
        Path::new("x_ride.gpx")
    );
}
