//! Client inspection: read a client's config file and reconcile its
//! installed servers against the registry.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::domain::{ClientKind, ReconciledEntry};
use crate::error::InspectError;
use crate::registry::ServerRegistry;

use super::client_config::{ClaudeDesktopConfig, ContinueConfig};

/// Inspects a single client's on-disk config for installed MCP servers.
///
/// One inspector per client kind. The registry is injected at construction
/// and only read, so inspectors for different clients are independent.
pub struct ClientInspector {
    kind: ClientKind,
    registry: Arc<ServerRegistry>,
    config_path: Option<PathBuf>,
}

impl ClientInspector {
    /// Create an inspector for a client kind against a registry.
    pub fn new(kind: ClientKind, registry: Arc<ServerRegistry>) -> Self {
        Self {
            kind,
            registry,
            config_path: None,
        }
    }

    /// Override the config file location (tests, non-standard installs).
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn kind(&self) -> ClientKind {
        self.kind
    }

    /// Inspect the client and reconcile its installed servers.
    ///
    /// A missing config file (or an unresolvable home directory) yields an
    /// empty result: the client is simply not installed. A file that exists
    /// but cannot be read or parsed yields
    /// [`InspectError::ConfigUnavailable`].
    pub async fn inspect(&self) -> Result<Vec<ReconciledEntry>, InspectError> {
        let path = match self.config_path.clone().or_else(|| self.kind.config_path()) {
            Some(path) => path,
            None => return Ok(Vec::new()),
        };

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(InspectError::unavailable(self.kind, path, err)),
        };

        let entries = match self.kind {
            ClientKind::ClaudeDesktop => self.reconcile_claude_desktop(&content, &path)?,
            ClientKind::Continue => self.reconcile_continue(&content, &path)?,
        };

        debug!(
            client = %self.kind,
            total = entries.len(),
            recognized = entries.iter().filter(|e| e.recognized).count(),
            "reconciled installed servers"
        );

        Ok(entries)
    }

    /// Exact-key reconciliation for Claude Desktop.
    ///
    /// The `mcpServers` keys are identity tokens. Keys without a registry
    /// entry are still reported, flagged unrecognized, so manual installs
    /// stay visible. Recognized entries come first, each group in file order.
    fn reconcile_claude_desktop(
        &self,
        content: &str,
        path: &Path,
    ) -> Result<Vec<ReconciledEntry>, InspectError> {
        let config: ClaudeDesktopConfig = serde_json::from_str(content)
            .map_err(|err| InspectError::unavailable(self.kind, path, err))?;

        let (recognized, unrecognized): (Vec<&String>, Vec<&String>) = config
            .mcp_servers
            .keys()
            .partition(|key| self.registry.contains(key.as_str()));

        Ok(recognized
            .into_iter()
            .map(|key| ReconciledEntry::recognized(self.kind, key.as_str()))
            .chain(
                unrecognized
                    .into_iter()
                    .map(|key| ReconciledEntry::unrecognized(self.kind, key.as_str())),
            )
            .collect())
    }

    /// Structural-prefix reconciliation for Continue.
    ///
    /// Entries carry no identity token, only the launch invocation. An entry
    /// resolves to the first registry server whose template matches it.
    /// Entries with no match are dropped here, unlike Claude Desktop's
    /// keep-and-flag.
    fn reconcile_continue(
        &self,
        content: &str,
        path: &Path,
    ) -> Result<Vec<ReconciledEntry>, InspectError> {
        let config: ContinueConfig = serde_json::from_str(content)
            .map_err(|err| InspectError::unavailable(self.kind, path, err))?;

        Ok(config
            .experimental
            .model_context_protocol_servers
            .iter()
            .filter_map(|entry| {
                self.registry
                    .find_by_invocation(&entry.transport.command, &entry.transport.args)
                    .map(|server| ReconciledEntry::recognized(self.kind, server.id.clone()))
            })
            .collect())
    }
}
