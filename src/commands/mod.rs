//! CLI command definitions and dispatch.

pub mod config;
pub mod hello;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use greeter_core::config::AppConfig;
use greeter_core::error::AppError;

/// Greeter: talk to a helloworld Greeter service
#[derive(Debug, Parser)]
#[command(name = "greeter", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Send a greeting
    Hello(hello::HelloArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, app_config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Hello(args) => hello::execute(args, app_config, self.format).await,
            Commands::Config(args) => {
                config::execute(args, &self.config, app_config, self.format)
            }
        }
    }
}
