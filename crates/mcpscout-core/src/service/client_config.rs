//! On-disk configuration shapes for the supported clients.
//!
//! Read-side models of what the clients persist:
//! - Claude Desktop (`claude_desktop_config.json`): top-level `mcpServers`
//!   map keyed by server id.
//! - Continue (`config.json`): `experimental.modelContextProtocolServers`
//!   array with a per-entry launch transport.
//!
//! Only the fields reconciliation needs are modeled; everything else in the
//! files is ignored. List-bearing fields default to empty so a missing
//! sub-path never reads as an error.

use serde::Deserialize;
use serde_json::Value;

/// Claude Desktop configuration (read side).
///
/// The `mcpServers` keys are the install identity tokens. The descriptor
/// bodies are irrelevant for reconciliation and kept opaque.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ClaudeDesktopConfig {
    /// Keyed install map. `serde_json`'s preserve_order keeps file order.
    #[serde(rename = "mcpServers", default)]
    pub mcp_servers: serde_json::Map<String, Value>,
}

/// Continue configuration (read side).
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ContinueConfig {
    #[serde(default)]
    pub experimental: ContinueExperimental,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ContinueExperimental {
    #[serde(rename = "modelContextProtocolServers", default)]
    pub model_context_protocol_servers: Vec<ContinueServerEntry>,
}

/// One installed-server descriptor in Continue's experimental list.
#[derive(Debug, Deserialize)]
pub(crate) struct ContinueServerEntry {
    pub transport: ContinueTransport,
}

/// Launch invocation recorded by Continue. Carries no identity field.
#[derive(Debug, Deserialize)]
pub(crate) struct ContinueTransport {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}
