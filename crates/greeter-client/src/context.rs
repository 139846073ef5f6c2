//! Application context shared with views.

use std::sync::Arc;

use tracing::info;

use greeter_core::config::AppConfig;
use greeter_core::result::AppResult;
use greeter_transport::{HttpHandler, RequestHandler};

use crate::proto::GreeterClient;
use crate::state::GreetState;

/// Everything a view needs, built once per application and passed down.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Transport used by every RPC stub
    pub handler: Arc<dyn RequestHandler>,
    /// Greeting interaction state
    pub greet: Arc<GreetState>,
}

impl AppContext {
    /// Build the context with the HTTP transport described by `config`.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let handler = HttpHandler::new(&config.client)?;
        info!(base_url = %handler.base_url(), "Greeter transport ready");
        Ok(Self::with_handler(config, Arc::new(handler)))
    }

    /// Build the context around an existing transport.
    pub fn with_handler(config: AppConfig, handler: Arc<dyn RequestHandler>) -> Self {
        let greet = Arc::new(GreetState::new(GreeterClient::new(Arc::clone(&handler))));
        Self {
            config: Arc::new(config),
            handler,
            greet,
        }
    }
}
