//! Convenience result type alias for the Greeter client.

use crate::error::AppError;

/// A specialized `Result` type for application-boundary operations.
pub type AppResult<T> = Result<T, AppError>;
