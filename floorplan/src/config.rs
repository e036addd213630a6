//! Viewer configuration.
//!
//! Every field has a default, so a partial JSON object (or `{}`) is a valid
//! configuration. [`ViewerConfig::shape_graph`] and
//! [`ViewerConfig::vector_document`] are the presets the two viewers ship
//! with.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CONTENT_MARGIN, MIN_CANVAS_HEIGHT, MIN_CANVAS_WIDTH, SHAPE_GRAPH_INITIAL_ZOOM, SHAPE_GRAPH_MAX_ZOOM,
    SHAPE_GRAPH_MIN_ZOOM, VECTOR_MAX_ZOOM, VECTOR_MIN_ZOOM, ZOOM_STEP,
};

/// Floor document fetched when none is named.
pub const DEFAULT_FLOOR_FILE: &str = "OR045101S.svg";

/// Base URL floor documents are served from in production.
pub const DEFAULT_PRODUCTION_BASE: &str = "https://app.devttest.com/space-reserve-mtworks";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid viewer config: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("zoom range is empty: min {min} > max {max}")]
    InvalidZoomRange { min: f64, max: f64 },

    #[error("zoom limits must be positive, got min {0}")]
    NonPositiveZoom(f64),

    #[error("zoom step must be positive, got {0}")]
    InvalidStep(f64),
}

/// Where the page is running; decides which base URL documents come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Development when served from `localhost` or built with debug assertions.
    #[must_use]
    pub fn detect(hostname: &str, debug_build: bool) -> Self {
        if debug_build || hostname == "localhost" { Self::Development } else { Self::Production }
    }
}

/// Location of the vector floor document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorSource {
    pub file_name: String,
    /// Prefix used in development; empty means site root.
    pub local_base: String,
    pub production_base: String,
    pub environment: Environment,
}

impl Default for FloorSource {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FLOOR_FILE.to_owned(),
            local_base: String::new(),
            production_base: DEFAULT_PRODUCTION_BASE.to_owned(),
            environment: Environment::default(),
        }
    }
}

impl FloorSource {
    #[must_use]
    pub fn with_file(mut self, file_name: &str) -> Self {
        file_name.clone_into(&mut self.file_name);
        self
    }

    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// URL to fetch: `{local_base}/{file}` in development,
    /// `{production_base}/{file}` otherwise.
    #[must_use]
    pub fn url(&self) -> String {
        let base = match self.environment {
            Environment::Development => &self.local_base,
            Environment::Production => &self.production_base,
        };
        format!("{}/{}", base.trim_end_matches('/'), self.file_name.trim_start_matches('/'))
    }
}

/// Tunables for one viewer instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom applied on load and reset; `None` fits the content to the viewport.
    pub initial_zoom: Option<f64>,
    /// Relative change per zoom button press, wheel notch and double-click.
    pub zoom_step: f64,
    pub content_margin: f64,
    pub min_canvas_width: f64,
    pub min_canvas_height: f64,
    pub source: FloorSource,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::shape_graph()
    }
}

impl ViewerConfig {
    /// Canvas viewer: 0.3–2.5, opening at 0.6.
    #[must_use]
    pub fn shape_graph() -> Self {
        Self {
            min_zoom: SHAPE_GRAPH_MIN_ZOOM,
            max_zoom: SHAPE_GRAPH_MAX_ZOOM,
            initial_zoom: Some(SHAPE_GRAPH_INITIAL_ZOOM),
            zoom_step: ZOOM_STEP,
            content_margin: CONTENT_MARGIN,
            min_canvas_width: MIN_CANVAS_WIDTH,
            min_canvas_height: MIN_CANVAS_HEIGHT,
            source: FloorSource::default(),
        }
    }

    /// Vector document viewer: 0.3–10, fit to the document on load.
    #[must_use]
    pub fn vector_document() -> Self {
        Self { min_zoom: VECTOR_MIN_ZOOM, max_zoom: VECTOR_MAX_ZOOM, initial_zoom: None, ..Self::shape_graph() }
    }

    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON or inconsistent limits.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check zoom limits and step.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_zoom <= 0.0 {
            return Err(ConfigError::NonPositiveZoom(self.min_zoom));
        }
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::InvalidZoomRange { min: self.min_zoom, max: self.max_zoom });
        }
        if self.zoom_step <= 0.0 {
            return Err(ConfigError::InvalidStep(self.zoom_step));
        }
        Ok(())
    }
}
