//! Deployment environment and floor document location.
//!
//! Development serves documents from the site root; production reads them
//! from the hosted asset base. The page host decides which applies.

#[cfg(test)]
#[path = "environment_test.rs"]
mod environment_test;

use floorplan::config::{Environment, ViewerConfig};

/// Host name of the current page, empty outside the browser.
pub fn page_hostname() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Environment of the running build.
pub fn current_environment() -> Environment {
    Environment::detect(&page_hostname(), cfg!(debug_assertions))
}

/// `base` pointed at `file_name` for `environment`.
pub fn viewer_config_for(base: ViewerConfig, file_name: Option<&str>, environment: Environment) -> ViewerConfig {
    let mut source = base.source.clone().with_environment(environment);
    if let Some(file_name) = file_name {
        source = source.with_file(file_name);
    }
    ViewerConfig { source, ..base }
}

/// `base` pointed at `file_name` for the running build.
pub fn viewer_config(base: ViewerConfig, file_name: Option<&str>) -> ViewerConfig {
    viewer_config_for(base, file_name, current_environment())
}
