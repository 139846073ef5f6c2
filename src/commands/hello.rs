//! Send a greeting through the interaction state.

use clap::Args;
use dialoguer::Input;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use greeter_client::AppContext;
use greeter_core::config::AppConfig;
use greeter_core::error::AppError;

/// Arguments for the hello command
#[derive(Debug, Args)]
pub struct HelloArgs {
    /// Name to greet (prompted for when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Print busy-flag transitions while the call runs
    #[arg(long)]
    pub watch: bool,
}

/// Result of a greeting, as printed in JSON mode
#[derive(Debug, Serialize)]
struct HelloOutput {
    /// Name that was sent
    name: String,
    /// Reply text or rendered error
    message: String,
}

/// Execute the hello command
pub async fn execute(
    args: &HelloArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompt_name()?,
    };

    let ctx = AppContext::new(config)?;
    ctx.greet.set_name(name);

    let watcher = args.watch.then(|| {
        let mut processing = ctx.greet.subscribe_processing();
        tokio::spawn(async move {
            while processing.changed().await.is_ok() {
                let busy = *processing.borrow_and_update();
                output::print_kv("processing", &busy.to_string());
                if !busy {
                    break;
                }
            }
        })
    });

    ctx.greet.say_hello().await?;

    if let Some(watcher) = watcher {
        watcher
            .await
            .map_err(|e| AppError::internal(format!("Watcher task failed: {}", e)))?;
    }

    match format {
        OutputFormat::Text => println!("{}", ctx.greet.message()),
        OutputFormat::Json => output::print_item(
            &HelloOutput {
                name: ctx.greet.name(),
                message: ctx.greet.message(),
            },
            format,
        ),
    }

    Ok(())
}

fn prompt_name() -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt("Name")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AppError::internal(format!("Failed to read name: {}", e)))
}
