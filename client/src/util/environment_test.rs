#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn production_uses_hosted_base() {
    let config = viewer_config_for(ViewerConfig::vector_document(), Some("OR045101S.svg"), Environment::Production);
    assert_eq!(config.source.url(), "https://app.devttest.com/space-reserve-mtworks/OR045101S.svg");
}

#[test]
fn development_uses_site_root() {
    let config = viewer_config_for(ViewerConfig::vector_document(), Some("plan.svg"), Environment::Development);
    assert_eq!(config.source.url(), "/plan.svg");
}

#[test]
fn file_name_defaults_when_absent() {
    let base = ViewerConfig::vector_document();
    let default_file = base.source.file_name.clone();
    let config = viewer_config_for(base, None, Environment::Production);
    assert_eq!(config.source.file_name, default_file);
}

#[test]
fn zoom_settings_survive() {
    let config = viewer_config_for(ViewerConfig::shape_graph(), Some("plan.svg"), Environment::Development);
    assert_eq!(config.min_zoom, ViewerConfig::shape_graph().min_zoom);
    assert_eq!(config.initial_zoom, ViewerConfig::shape_graph().initial_zoom);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn hostname_is_empty_outside_browser() {
    assert_eq!(page_hostname(), "");
}
