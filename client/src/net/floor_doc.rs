//! Floor document fetch.
//!
//! Client-side (hydrate): a plain GET via `gloo-net`.
//! Server-side (SSR): always fails, since documents are only fetched in the
//! browser after mount.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a [`LoadError`] so the engine can show it as a
//! fault. Non-success statuses keep the status text; HTTP/2 responses carry
//! none, so a canonical reason phrase stands in.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "floor_doc_test.rs"]
mod floor_doc_test;

use floorplan::loader::LoadError;

#[cfg(any(test, feature = "hydrate"))]
fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        408 => "Request Timeout",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Request failed",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn http_error(status: u16, status_text: &str) -> LoadError {
    let status_text = if status_text.trim().is_empty() { reason_phrase(status) } else { status_text };
    LoadError::Http { status, status_text: status_text.to_owned() }
}

/// Fetch the floor document at `url` as text.
///
/// # Errors
///
/// [`LoadError::Http`] for a non-success status, [`LoadError::Network`] when
/// no response arrives or the body cannot be read.
pub async fn fetch_floor_document(url: &str) -> Result<String, LoadError> {
    #[cfg(feature = "hydrate")]
    {
        log::info!("fetching floor document {url}");
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(http_error(resp.status(), &resp.status_text()));
        }
        resp.text().await.map_err(|e| LoadError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(LoadError::Network(format!("{url} is only fetched in the browser")))
    }
}
