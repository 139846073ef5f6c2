//! # greeter-client
//!
//! Client side of the `helloworld.v1.Greeter` service:
//!
//! - [`proto`]: request/reply messages and the [`GreeterClient`] stub,
//!   which delegates to a [`greeter_transport::RequestHandler`].
//! - [`state`]: [`GreetState`], the reactive `name`/`processing`/`message`
//!   surface a view binds to.
//! - [`context`]: [`AppContext`], built once per application and handed
//!   to views in place of global stores.

pub mod context;
pub mod proto;
pub mod state;

pub use context::AppContext;
pub use proto::{GreeterClient, HelloReply, HelloRequest};
pub use state::{GreetError, GreetState};
