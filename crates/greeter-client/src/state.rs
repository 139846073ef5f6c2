//! Reactive interaction state for the greeting view.
//!
//! [`GreetState`] exposes three fields as `tokio::sync::watch` channels
//! so a view can read the current value or subscribe to changes:
//!
//! | field        | written by             |
//! |--------------|------------------------|
//! | `name`       | the view               |
//! | `processing` | [`GreetState::say_hello`] |
//! | `message`    | [`GreetState::say_hello`] |
//!
//! At most one call is in flight per instance. A second
//! `say_hello` while one is outstanding is rejected with
//! [`GreetError::DuplicateCall`], not queued.

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use greeter_core::error::AppError;
use greeter_transport::TransportError;

use crate::proto::{GreeterClient, HelloRequest};

/// Errors returned to the caller of [`GreetState::say_hello`].
///
/// Call failures are never returned; they are rendered into `message`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreetError {
    /// A call is already in flight.
    #[error("duplicate call: a greeting is already in progress")]
    DuplicateCall,
}

impl From<GreetError> for AppError {
    fn from(err: GreetError) -> Self {
        AppError::conflict(err.to_string())
    }
}

/// Render a failed call for display.
pub fn render_error(err: &TransportError) -> String {
    match err {
        TransportError::Kratos(e) => format!("kratos error: {} {}", e.reason, e.message),
        other => format!("unknown error: {other}"),
    }
}

/// Greeting input, busy flag, and last result.
#[derive(Debug)]
pub struct GreetState {
    client: GreeterClient,
    name: watch::Sender<String>,
    processing: watch::Sender<bool>,
    message: watch::Sender<String>,
}

impl GreetState {
    /// Create an idle state with empty `name` and `message`.
    pub fn new(client: GreeterClient) -> Self {
        Self {
            client,
            name: watch::Sender::new(String::new()),
            processing: watch::Sender::new(false),
            message: watch::Sender::new(String::new()),
        }
    }

    /// Current input.
    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    /// Replace the input. Any string is accepted, including empty.
    pub fn set_name(&self, name: impl Into<String>) {
        self.name.send_replace(name.into());
    }

    /// Whether a call is outstanding.
    pub fn processing(&self) -> bool {
        *self.processing.borrow()
    }

    /// Last reply text or rendered error.
    pub fn message(&self) -> String {
        self.message.borrow().clone()
    }

    pub fn subscribe_name(&self) -> watch::Receiver<String> {
        self.name.subscribe()
    }

    pub fn subscribe_processing(&self) -> watch::Receiver<bool> {
        self.processing.subscribe()
    }

    pub fn subscribe_message(&self) -> watch::Receiver<String> {
        self.message.subscribe()
    }

    /// Send the current `name` to the Greeter service.
    ///
    /// On return `message` holds either the reply text or a rendered
    /// error, and `processing` is false again. Only a re-entrant call
    /// produces an `Err`.
    pub async fn say_hello(&self) -> Result<(), GreetError> {
        let _busy = self.begin()?;

        let name = self.name();
        info!(name = %name, "Calling SayHello");

        let text = match self.client.say_hello(HelloRequest { name }).await {
            Ok(reply) => {
                debug!("SayHello succeeded");
                reply.message
            }
            Err(err) => {
                if let Some(kratos) = err.as_kratos() {
                    debug!(reason = %kratos.reason, "SayHello returned a server error");
                } else {
                    debug!(error = %err, "SayHello failed");
                }
                render_error(&err)
            }
        };

        self.message.send_replace(text);
        Ok(())
    }

    /// Atomically flip `processing` from false to true.
    fn begin(&self) -> Result<Busy<'_>, GreetError> {
        let acquired = self.processing.send_if_modified(|busy| {
            if *busy {
                false
            } else {
                *busy = true;
                true
            }
        });

        if !acquired {
            warn!("Rejected SayHello: call already in flight");
            return Err(GreetError::DuplicateCall);
        }
        Ok(Busy(&self.processing))
    }
}

/// Clears `processing` when dropped, including on cancellation.
struct Busy<'a>(&'a watch::Sender<bool>);

impl Drop for Busy<'_> {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}
