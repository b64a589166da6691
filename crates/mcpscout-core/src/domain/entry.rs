//! Inventory output units

use serde::{Deserialize, Serialize};

use super::ClientKind;

/// One installed-server reference, reconciled against the registry.
///
/// `server_id` is a registry id when `recognized`, otherwise the opaque
/// client-local key the reference was stored under (display only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledEntry {
    /// Client the reference was found in
    pub client: ClientKind,

    /// Registry server id, or the client-local key for unrecognized entries
    pub server_id: String,

    /// Whether the reference matched a registry server
    pub recognized: bool,
}

impl ReconciledEntry {
    /// Entry matched to a registry server.
    pub fn recognized(client: ClientKind, server_id: impl Into<String>) -> Self {
        Self {
            client,
            server_id: server_id.into(),
            recognized: true,
        }
    }

    /// Entry with no registry counterpart, reported for operator visibility.
    pub fn unrecognized(client: ClientKind, server_id: impl Into<String>) -> Self {
        Self {
            client,
            server_id: server_id.into(),
            recognized: false,
        }
    }
}

/// All entries found for a single client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientListing {
    /// Inspected client
    pub client: ClientKind,

    /// Reconciled entries in report order
    pub entries: Vec<ReconciledEntry>,
}

impl ClientListing {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Aggregate inventory across the requested clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryReport {
    /// One listing per inspected client, in inspection order
    pub listings: Vec<ClientListing>,
}

impl InventoryReport {
    /// True iff at least one client reported a non-empty listing.
    pub fn found_any(&self) -> bool {
        self.listings.iter().any(|l| !l.is_empty())
    }
}
