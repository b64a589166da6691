//! CLI argument definitions using clap

use clap::Parser;
use mcpscout_core::ClientKind;
use std::path::PathBuf;

/// Inventory MCP servers installed in local AI clients.
#[derive(Parser)]
#[command(name = "mcpscout")]
#[command(about = "List MCP servers installed in local AI clients")]
#[command(
    long_about = "List MCP servers installed in local AI clients\n\n\
USAGE:\n  \
mcpscout                         # inventory every known client\n  \
mcpscout --client claude-desktop # one client only\n  \
mcpscout --registry catalog.json # use an alternate server catalog"
)]
#[command(version)]
pub struct Cli {
    /// Restrict the inventory to one client (claude-desktop, continue)
    #[arg(short, long)]
    pub client: Option<ClientKind>,

    /// Load the server catalog from a JSON file instead of the bundled one
    #[arg(long, value_name = "PATH")]
    pub registry: Option<PathBuf>,
}
