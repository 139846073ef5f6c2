//! Request handler trait implemented by transports and test doubles.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;
use crate::request::{CallMeta, Request};

/// Executes one request on behalf of an RPC stub.
///
/// On a 2xx response the decoded JSON body is returned unmodified; the
/// stub knows the expected shape. Any other status yields
/// [`TransportError::Kratos`].
#[async_trait]
pub trait RequestHandler: Send + Sync + std::fmt::Debug {
    /// Perform the call.
    async fn handle(&self, request: Request, meta: CallMeta) -> Result<Value, TransportError>;
}
