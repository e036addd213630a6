#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_is_shape_graph_preset() {
    let config = ViewerConfig::default();
    assert_eq!(config, ViewerConfig::shape_graph());
    assert_eq!((config.min_zoom, config.max_zoom), (0.3, 2.5));
    assert_eq!(config.initial_zoom, Some(0.6));
    assert_eq!(config.zoom_step, 0.3);
    assert_eq!((config.min_canvas_width, config.min_canvas_height), (1400.0, 800.0));
}

#[test]
fn vector_preset_fits_on_load() {
    let config = ViewerConfig::vector_document();
    assert_eq!((config.min_zoom, config.max_zoom), (0.3, 10.0));
    assert_eq!(config.initial_zoom, None);
}

#[test]
fn empty_json_uses_defaults() {
    assert_eq!(ViewerConfig::from_json("{}").expect("config"), ViewerConfig::default());
}

#[test]
fn partial_json_overrides_fields() {
    let config = ViewerConfig::from_json(r#"{"max_zoom": 4.0, "source": {"file_name": "L2.svg"}}"#).expect("config");
    assert_eq!(config.max_zoom, 4.0);
    assert_eq!(config.min_zoom, 0.3);
    assert_eq!(config.source.file_name, "L2.svg");
    assert_eq!(config.source.production_base, DEFAULT_PRODUCTION_BASE);
}

#[test]
fn malformed_json_is_decode_error() {
    assert!(matches!(ViewerConfig::from_json("{"), Err(ConfigError::Decode(_))));
}

#[test]
fn inverted_zoom_range_rejected() {
    let err = ViewerConfig::from_json(r#"{"min_zoom": 3.0, "max_zoom": 1.0}"#).expect_err("invalid");
    assert!(matches!(err, ConfigError::InvalidZoomRange { .. }));
}

#[test]
fn zero_min_zoom_rejected() {
    assert!(matches!(ViewerConfig::from_json(r#"{"min_zoom": 0.0}"#), Err(ConfigError::NonPositiveZoom(_))));
}

#[test]
fn non_positive_step_rejected() {
    assert!(matches!(ViewerConfig::from_json(r#"{"zoom_step": 0}"#), Err(ConfigError::InvalidStep(_))));
}

#[test]
fn environment_parses_lowercase() {
    let config = ViewerConfig::from_json(r#"{"source": {"environment": "development"}}"#).expect("config");
    assert_eq!(config.source.environment, Environment::Development);
}

// --- FloorSource ---

#[test]
fn development_url_is_site_root() {
    let source = FloorSource::default().with_environment(Environment::Development);
    assert_eq!(source.url(), "/OR045101S.svg");
}

#[test]
fn production_url_uses_remote_base() {
    let source = FloorSource::default();
    assert_eq!(source.url(), "https://app.devttest.com/space-reserve-mtworks/OR045101S.svg");
}

#[test]
fn custom_file_name() {
    let source = FloorSource::default().with_file("L3.svg").with_environment(Environment::Development);
    assert_eq!(source.url(), "/L3.svg");
}

#[test]
fn detect_environment() {
    assert_eq!(Environment::detect("localhost", false), Environment::Development);
    assert_eq!(Environment::detect("app.devttest.com", true), Environment::Development);
    assert_eq!(Environment::detect("app.devttest.com", false), Environment::Production);
}
