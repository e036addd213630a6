//! Fire-once floor document load state.
//!
//! The host starts a load with [`FloorLoader::begin`], performs the fetch
//! itself, and reports the outcome with [`FloorLoader::complete`]. A second
//! `begin` while a load is in flight, or after it has resolved, is rejected,
//! and a load resolves exactly once. There is no retry and no timeout.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use crate::svg::{FloorDocument, SvgError};

/// Why a floor document could not be shown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The server answered with a non-success status.
    #[error("Failed to load SVG: {status_text}")]
    Http { status: u16, status_text: String },

    /// The request never produced a response.
    #[error("Failed to load SVG: {0}")]
    Network(String),

    /// The body was not a usable floor document.
    #[error("{0}")]
    Parse(String),
}

impl From<SvgError> for LoadError {
    fn from(err: SvgError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Lifecycle of one floor document load.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading { url: String },
    Loaded(FloorDocument),
    Failed(LoadError),
}

impl LoadState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    #[must_use]
    pub fn document(&self) -> Option<&FloorDocument> {
        match self {
            Self::Loaded(doc) => Some(doc),
            _ => None,
        }
    }

    /// Fault message to display, if the load failed.
    #[must_use]
    pub fn fault(&self) -> Option<String> {
        match self {
            Self::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }

    /// Number of room shapes available for display. Zero unless loaded.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.document().map_or(0, |doc| doc.shapes.len())
    }
}

/// Guards a single load per mount.
#[derive(Debug, Clone, Default)]
pub struct FloorLoader {
    state: LoadState,
}

impl FloorLoader {
    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Start loading `url`. Returns `false` (and changes nothing) unless the
    /// loader is idle.
    pub fn begin(&mut self, url: &str) -> bool {
        if !matches!(self.state, LoadState::Idle) {
            log::debug!("loader: ignoring load of {url}; a load already started");
            return false;
        }
        log::info!("loader: loading floor document from {url}");
        self.state = LoadState::Loading { url: url.to_owned() };
        true
    }

    /// Resolve the in-flight load with the fetched body or a fetch error.
    /// The body is parsed here; a parse failure becomes a fault. Returns
    /// `false` if no load was in flight.
    pub fn complete(&mut self, outcome: Result<String, LoadError>) -> bool {
        let LoadState::Loading { url } = &self.state else {
            log::debug!("loader: ignoring completion; no load in flight");
            return false;
        };
        let url = url.clone();
        let parsed = outcome.and_then(|body| FloorDocument::parse(&body).map_err(LoadError::from));
        self.state = match parsed {
            Ok(doc) => {
                log::info!("loader: loaded {url} with {} room shapes", doc.shapes.len());
                LoadState::Loaded(doc)
            }
            Err(err) => {
                log::warn!("loader: {url} failed: {err}");
                LoadState::Failed(err)
            }
        };
        true
    }

    /// Return to `Idle` on teardown so a remount can load again.
    pub fn reset(&mut self) {
        self.state = LoadState::Idle;
    }
}
