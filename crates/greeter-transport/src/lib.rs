//! # greeter-transport
//!
//! The transport adapter used by generated RPC stubs. A stub turns a
//! typed call into a [`Request`] plus [`CallMeta`] and hands both to a
//! [`RequestHandler`]. The handler performs the HTTP exchange and yields
//! either the decoded JSON body or a [`TransportError`], where
//! non-2xx responses become [`KratosError`] values.

pub mod error;
pub mod handler;
pub mod http;
pub mod request;

pub use error::{KratosError, TransportError};
pub use handler::RequestHandler;
pub use http::HttpHandler;
pub use request::{CallMeta, Request};
