//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into the proxy handler via the `State` extractor.
//! It holds one pooled HTTP client for all upstream calls and the upstream
//! base URL. Cloning is cheap.

use std::sync::Arc;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    upstream: Arc<str>,
}

impl AppState {
    /// Build state from host configuration.
    ///
    /// # Errors
    ///
    /// Returns the client builder error if the TLS backend fails to initialize.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, upstream: Arc::from(config.upstream_url.as_str()) })
    }

    /// Upstream base URL without a trailing slash.
    pub fn upstream(&self) -> &str {
        &self.upstream
    }
}
