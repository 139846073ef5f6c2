//! # greeter-core
//!
//! Core crate for the Greeter client. Contains configuration schemas
//! and the unified error system shared by the transport, the
//! interaction state, and the command-line front-end.
//!
//! This crate has **no** internal dependencies on other Greeter crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
