//! SpeedList terminal client
//!
//! Keeps an anonymous shopping list in sync with the SpeedList API.
//! Configuration comes from the environment (or a `.env` file):
//! - `SPEEDLIST_API_URL`: base URL of the API
//! - `SPEEDLIST_USER_ID`: use this owner id instead of the persisted one
//! - `SPEEDLIST_IDENTITY_FILE`: where the generated owner id is stored
//! - `SPEEDLIST_TIMEOUT_SECS`: request timeout

mod command;
mod render;
mod shell;

use std::sync::Arc;

use anyhow::{Context, Result};
use speedlist_core::adapters::{resolve_owner, HttpShoppingListGateway, SystemClipboard};
use speedlist_core::app::Session;
use speedlist_core::Config;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they don't interleave with the list on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,speedlist=info,speedlist_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();

    let owner = resolve_owner(&config).context("Failed to resolve anonymous identity")?;
    let gateway =
        HttpShoppingListGateway::from_config(&config).context("Failed to build HTTP client")?;

    tracing::info!(api_url = %config.api_url, owner = %owner, "Starting SpeedList");

    let mut session = Session::new(owner, Arc::new(gateway), Arc::new(SystemClipboard::new()));

    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    shell::run(&mut session, input, &mut output).await?;

    tracing::info!("Goodbye");
    Ok(())
}
