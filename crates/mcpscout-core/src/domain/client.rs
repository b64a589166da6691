//! ClientKind - AI client applications McpScout knows how to inspect

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Supported AI client applications.
///
/// Each client persists its installed MCP servers in a different on-disk
/// shape. The set is fixed and small, so inspection dispatches on this enum
/// rather than through open polymorphism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientKind {
    /// Claude Desktop (`claude_desktop_config.json`, `mcpServers` map)
    ClaudeDesktop,
    /// Continue (`~/.continue/config.json`, experimental MCP server list)
    Continue,
}

impl ClientKind {
    /// All supported client kinds, in display order.
    pub const ALL: [ClientKind; 2] = [ClientKind::ClaudeDesktop, ClientKind::Continue];

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ClientKind::ClaudeDesktop => "Claude Desktop",
            ClientKind::Continue => "Continue",
        }
    }

    /// Default config file path for this client.
    ///
    /// Returns `None` when the home directory cannot be resolved; the
    /// inspector treats that the same as "client not installed".
    pub fn config_path(&self) -> Option<PathBuf> {
        match self {
            ClientKind::ClaudeDesktop => {
                #[cfg(target_os = "macos")]
                {
                    dirs::home_dir().map(|h| {
                        h.join("Library")
                            .join("Application Support")
                            .join("Claude")
                            .join("claude_desktop_config.json")
                    })
                }
                #[cfg(not(target_os = "macos"))]
                {
                    dirs::config_dir().map(|c| c.join("Claude").join("claude_desktop_config.json"))
                }
            }
            ClientKind::Continue => {
                dirs::home_dir().map(|h| h.join(".continue").join("config.json"))
            }
        }
    }
}

impl fmt::Display for ClientKind {
    /// Stable slug used in logs and on the CLI.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClientKind::ClaudeDesktop => "claude-desktop",
            ClientKind::Continue => "continue",
        })
    }
}

impl FromStr for ClientKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claude-desktop" | "claude" => Ok(ClientKind::ClaudeDesktop),
            "continue" => Ok(ClientKind::Continue),
            other => Err(format!(
                "unknown client '{other}' (expected one of: claude-desktop, continue)"
            )),
        }
    }
}
