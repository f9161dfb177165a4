//! Backend origin configuration.
//!
//! The origin is fixed per build: `PARALLEL_YOU_API_BASE` at compile time, or
//! the local development backend when unset.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Where every backend request is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config for an explicit origin. Trailing slashes are dropped.
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Config baked in at build time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("PARALLEL_YOU_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    /// Absolute URL for an endpoint path such as `/predict`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
