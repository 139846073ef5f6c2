//! `helloworld.v1.Greeter` messages and RPC stub.
//!
//! The stub follows the service's HTTP binding `GET /helloworld/{name}`:
//! `name` is percent-encoded into the path and no body is sent.

use std::sync::Arc;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use greeter_transport::{CallMeta, Request, RequestHandler, TransportError};

/// Characters left as-is in a path segment, matching `encodeURIComponent`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The request message containing the user's name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloRequest {
    /// Name to greet.
    pub name: String,
}

/// The response message containing the greetings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloReply {
    /// Greeting text. proto3 omits empty strings, hence the default.
    #[serde(default)]
    pub message: String,
}

/// Stub for the `helloworld.v1.Greeter` service.
#[derive(Debug, Clone)]
pub struct GreeterClient {
    handler: Arc<dyn RequestHandler>,
}

impl GreeterClient {
    /// Fully-qualified service name reported in [`CallMeta`].
    pub const SERVICE: &'static str = "helloworld.v1.Greeter";

    /// Create a stub that sends every call through `handler`.
    pub fn new(handler: Arc<dyn RequestHandler>) -> Self {
        Self { handler }
    }

    /// Sends a greeting.
    pub async fn say_hello(&self, request: HelloRequest) -> Result<HelloReply, TransportError> {
        let path = format!(
            "helloworld/{}",
            utf8_percent_encode(&request.name, PATH_SEGMENT)
        );

        let value = self
            .handler
            .handle(Request::new("GET", path), CallMeta::new(Self::SERVICE, "SayHello"))
            .await?;

        Ok(serde_json::from_value(value)?)
    }
}
