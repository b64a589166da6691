//! Core types for the MCP server registry

use serde::{Deserialize, Serialize};

/// Launch configuration for a stdio MCP server.
///
/// `args` is the canonical argument template. Clients may append extra
/// runtime flags past the template; structural matching tolerates that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Command to execute
    pub command: String,

    /// Argument template
    #[serde(default)]
    pub args: Vec<String>,
}

impl LaunchConfig {
    /// Whether an observed launch invocation structurally matches this
    /// template.
    ///
    /// The observed args are truncated to the template's length before the
    /// element-wise comparison, so an invocation that appends flags beyond
    /// the template still matches. An invocation shorter than the template
    /// never does.
    pub fn matches_invocation(&self, command: &str, args: &[String]) -> bool {
        if self.command != command {
            return false;
        }
        if args.len() < self.args.len() {
            return false;
        }
        args[..self.args.len()] == self.args[..]
    }
}

/// One known MCP server definition from the registry catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryServer {
    /// Unique identifier (e.g. "filesystem", "github").
    /// May be omitted in keyed-object registries, where the key supplies it.
    #[serde(default)]
    pub id: String,

    /// Human-readable display name
    #[serde(default)]
    pub name: Option<String>,

    /// Short description
    pub description: Option<String>,

    /// Canonical install configuration
    pub launch: LaunchConfig,
}
