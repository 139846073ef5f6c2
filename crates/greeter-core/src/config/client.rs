//! Greeter service client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// HTTP client settings for reaching the Greeter service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL that relative request paths are joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds (0 = wait indefinitely).
    #[serde(default)]
    pub request_timeout_seconds: u64,
    /// Value of the `User-Agent` header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment.
    #[serde(default = "default_true")]
    pub use_system_proxy: bool,
}

impl ClientConfig {
    /// Request timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Parse `base_url`, forcing a trailing slash so joins keep the last segment.
    pub fn parsed_base_url(&self) -> Result<reqwest::Url, AppError> {
        let raw = if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        };

        reqwest::Url::parse(&raw).map_err(|e| {
            AppError::configuration(format!("Invalid client.base_url '{}': {e}", self.base_url))
        })
    }

    pub(crate) fn validate(&self) -> Result<(), AppError> {
        let url = self.parsed_base_url()?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(AppError::configuration(format!(
                "Unsupported client.base_url scheme '{other}'"
            ))),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_seconds: 0,
            user_agent: default_user_agent(),
            use_system_proxy: true,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/".to_string()
}

fn default_user_agent() -> String {
    concat!("greeter/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_true() -> bool {
    true
}
