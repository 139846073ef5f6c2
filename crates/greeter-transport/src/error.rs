//! Transport error types.
//!
//! A call either fails with a [`KratosError`] decoded from a non-2xx
//! response body, or with a generic failure (network, decoding, invalid
//! request). Callers branch on the variant, then on
//! [`KratosError::reason`], never on the embedded `code`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use greeter_core::error::{AppError, ErrorKind};

/// Server-reported failure. Every non-2xx response body has this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{reason}: {message}")]
pub struct KratosError {
    /// Mirrors the HTTP status. Branch on the transport status instead.
    pub code: i32,
    /// Enumerable failure category, stable across releases.
    pub reason: String,
    /// Human-readable explanation for display.
    pub message: String,
    /// Free-form diagnostic context.
    pub metadata: HashMap<String, String>,
}

/// Failure of a single transport call.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered with a structured error body.
    #[error(transparent)]
    Kratos(#[from] KratosError),

    /// The request never produced a response (connect, timeout, I/O).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request was rejected before being sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl TransportError {
    /// The structured server error, if this is one.
    pub fn as_kratos(&self) -> Option<&KratosError> {
        match self {
            Self::Kratos(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TransportError> for AppError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::InvalidRequest(msg) => AppError::validation(msg),
            other => AppError::with_source(
                ErrorKind::ExternalService,
                format!("Greeter call failed: {other}"),
                other,
            ),
        }
    }
}
