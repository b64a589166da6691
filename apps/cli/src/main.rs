//! McpScout CLI entry point.
//!
//! Thin wrapper over `mcpscout-core`: parses arguments, picks the server
//! catalog, runs one inventory pass, and renders the report.

mod args;
mod render;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use mcpscout_core::{InventoryService, ServerRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG controls verbosity; logs go to stderr so stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = args::Cli::parse();

    let registry = match &cli.registry {
        Some(path) => ServerRegistry::load(path).await?,
        None => ServerRegistry::bundled(),
    };
    tracing::debug!(servers = registry.len(), "server catalog loaded");

    let service = InventoryService::new(Arc::new(registry));
    let report = service
        .run(cli.client)
        .await
        .context("inspecting client configuration")?;

    render::print_report(&report);
    Ok(())
}
