//! reqwest-backed [`RequestHandler`].

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Url};
use serde_json::Value;
use tracing::{debug, warn};

use greeter_core::config::client::ClientConfig;
use greeter_core::error::{AppError, ErrorKind};

use crate::error::{KratosError, TransportError};
use crate::handler::RequestHandler;
use crate::request::{CallMeta, Request};

/// HTTP transport that sends JSON requests and maps non-2xx responses
/// to [`KratosError`].
///
/// No retries are performed. A request timeout applies only when
/// `client.request_timeout_seconds` is non-zero.
#[derive(Debug, Clone)]
pub struct HttpHandler {
    /// Shared reqwest client.
    client: Client,
    /// Base URL relative request paths are resolved against.
    base_url: Url,
}

impl HttpHandler {
    /// Build a handler from client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let base_url = config.parsed_base_url()?;

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to build HTTP client: {e}"),
                e,
            )
        })?;

        Ok(Self { client, base_url })
    }

    /// Base URL this handler resolves paths against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn resolve(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url.join(path).map_err(|e| {
            TransportError::InvalidRequest(format!("Cannot resolve path '{path}': {e}"))
        })
    }
}

#[async_trait]
impl RequestHandler for HttpHandler {
    async fn handle(&self, request: Request, meta: CallMeta) -> Result<Value, TransportError> {
        request.validate()?;

        let url = self.resolve(&request.path)?;
        let method = Method::from_bytes(request.method.to_ascii_uppercase().as_bytes())
            .map_err(|_| {
                TransportError::InvalidRequest(format!("Invalid HTTP method '{}'", request.method))
            })?;

        debug!(
            service = %meta.service,
            method = %meta.method,
            http_method = %method,
            url = %url,
            "Dispatching request"
        );

        let mut builder = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            debug!(
                service = %meta.service,
                method = %meta.method,
                status = status.as_u16(),
                "Request succeeded"
            );
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let err: KratosError = serde_json::from_slice(&bytes)?;
        warn!(
            service = %meta.service,
            method = %meta.method,
            status = status.as_u16(),
            reason = %err.reason,
            "Server returned an error"
        );
        Err(TransportError::Kratos(err))
    }
}
