//! Request helper configuration.

use crate::helper::HelperError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// Configuration for a [`RequestHelper`](crate::helper::RequestHelper).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelperConfig {
    /// Page URL that relative URLs are resolved against.
    pub base_url: Option<String>,
    /// Headers sent with every request.
    pub headers: HashMap<String, String>,
    /// Maximum response body size in bytes.
    pub max_body_size: usize,
    /// Whether parsed responses are logged.
    pub log_responses: bool,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            headers: HashMap::new(),
            max_body_size: 10 * 1024 * 1024, // 10MB
            log_responses: true,
        }
    }
}

impl HelperConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header. Names are stored lowercase.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(key.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    pub fn log_responses(mut self, log_responses: bool) -> Self {
        self.log_responses = log_responses;
        self
    }

    /// Resolve `url` to an absolute URL.
    ///
    /// Absolute URLs pass through. Anything else is joined onto `base_url`
    /// with the same rules a browser applies to links on a page.
    pub fn resolve_url(&self, url: &str) -> Result<String, HelperError> {
        match Url::parse(url) {
            Ok(absolute) => return Ok(absolute.into()),
            Err(url::ParseError::RelativeUrlWithoutBase) => {}
            Err(e) => return Err(HelperError::invalid_url(format!("'{}': {}", url, e))),
        }

        let base = self.base_url.as_deref().ok_or_else(|| {
            HelperError::invalid_url(format!("relative url '{}' without base url", url))
        })?;
        let base = Url::parse(base)
            .map_err(|e| HelperError::invalid_url(format!("base url '{}': {}", base, e)))?;
        Ok(base.join(url)?.into())
    }
}
