//! Outbound request description handed from RPC stubs to a handler.

use crate::error::TransportError;

/// One outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Endpoint path, relative to the handler's base URL or absolute.
    pub path: String,
    /// HTTP verb.
    pub method: String,
    /// Pre-encoded JSON payload, `None` for bodyless requests.
    pub body: Option<String>,
}

impl Request {
    /// Create a request without a body.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            body: None,
        }
    }

    /// Attach an already JSON-encoded body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Reject requests with an empty path or method.
    pub fn validate(&self) -> Result<(), TransportError> {
        if self.path.trim().is_empty() {
            return Err(TransportError::InvalidRequest(
                "request path must not be empty".to_string(),
            ));
        }
        if self.method.trim().is_empty() {
            return Err(TransportError::InvalidRequest(
                "request method must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Dispatch context passed alongside a [`Request`]. Only used for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallMeta {
    /// Fully-qualified service name, e.g. `helloworld.v1.Greeter`.
    pub service: String,
    /// RPC method name, e.g. `SayHello`.
    pub method: String,
}

impl CallMeta {
    /// Create call metadata.
    pub fn new(service: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            method: method.into(),
        }
    }
}
