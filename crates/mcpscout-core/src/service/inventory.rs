//! Inventory aggregation across the supported clients.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::warn;

use crate::domain::{ClientKind, ClientListing, InventoryReport};
use crate::error::InspectError;
use crate::registry::ServerRegistry;

use super::inspector::ClientInspector;

/// Runs client inspections and merges their results into one report.
pub struct InventoryService {
    registry: Arc<ServerRegistry>,
    path_overrides: HashMap<ClientKind, PathBuf>,
}

impl InventoryService {
    /// Create an inventory service over a registry.
    pub fn new(registry: Arc<ServerRegistry>) -> Self {
        Self {
            registry,
            path_overrides: HashMap::new(),
        }
    }

    /// Override a client's config path (tests, non-standard installs).
    pub fn with_config_path(mut self, kind: ClientKind, path: impl Into<PathBuf>) -> Self {
        self.path_overrides.insert(kind, path.into());
        self
    }

    fn inspector_for(&self, kind: ClientKind) -> ClientInspector {
        let inspector = ClientInspector::new(kind, self.registry.clone());
        match self.path_overrides.get(&kind) {
            Some(path) => inspector.with_config_path(path.clone()),
            None => inspector,
        }
    }

    /// Inventory the selected client, or all known clients.
    ///
    /// With an explicit selection, an unavailable config is a hard failure:
    /// the caller asked for that client and deserves to know it is broken.
    /// Without one, inspection is best-effort: a client whose config cannot
    /// be read is logged and reported as empty so the other clients still
    /// list.
    pub async fn run(
        &self,
        selection: Option<ClientKind>,
    ) -> Result<InventoryReport, InspectError> {
        let kinds: Vec<ClientKind> = match selection {
            Some(kind) => vec![kind],
            None => ClientKind::ALL.to_vec(),
        };

        let mut listings = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let entries = match self.inspector_for(kind).inspect().await {
                Ok(entries) => entries,
                Err(err) if selection.is_none() => {
                    warn!(client = %kind, error = %err, "skipping client with unavailable config");
                    Vec::new()
                }
                Err(err) => return Err(err),
            };
            listings.push(ClientListing {
                client: kind,
                entries,
            });
        }

        Ok(InventoryReport { listings })
    }
}
