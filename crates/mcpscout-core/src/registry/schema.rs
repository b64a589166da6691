//! MCP Server Registry Schema
//!
//! Supports both registry formats:
//! - **Keyed object**: `{ "servers": { "filesystem": { ... } } }`
//! - **Array**: `{ "servers": [{ "id": "filesystem", ... }] }`
//!
//! Catalog order is preserved in both forms: structural matching picks the
//! first server that matches, so iteration order must be deterministic.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};

use super::types::RegistryServer;

/// Registry schema version for compatibility
pub const REGISTRY_SCHEMA_VERSION: &str = "1.0";

/// Default catalog compiled into the crate.
const BUNDLED_REGISTRY_JSON: &str = include_str!("bundled.json");

/// Catalog of known MCP servers.
///
/// Read-only once loaded; inspectors receive a shared reference at
/// construction and never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerRegistry {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: String,

    /// Known servers in catalog order
    #[serde(deserialize_with = "deserialize_servers")]
    pub servers: Vec<RegistryServer>,
}

fn default_version() -> String {
    REGISTRY_SCHEMA_VERSION.to_string()
}

/// Deserialize servers from either array or keyed object format.
///
/// Keyed entries take their id from the key when the body omits it.
/// Duplicate ids are rejected: id uniqueness is an invariant of the catalog.
fn deserialize_servers<'de, D>(deserializer: D) -> Result<Vec<RegistryServer>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, MapAccess, SeqAccess, Visitor};
    use std::collections::HashSet;
    use std::fmt;

    struct ServersVisitor;

    impl<'de> Visitor<'de> for ServersVisitor {
        type Value = Vec<RegistryServer>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of server IDs to servers, or an array of servers")
        }

        // Handle keyed object: { "id1": {...}, "id2": {...} }
        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut servers = Vec::new();
            let mut seen = HashSet::new();
            while let Some((key, mut server)) = map.next_entry::<String, RegistryServer>()? {
                if server.id.is_empty() {
                    server.id = key;
                }
                if !seen.insert(server.id.clone()) {
                    return Err(de::Error::custom(format!(
                        "duplicate server id '{}'",
                        server.id
                    )));
                }
                servers.push(server);
            }
            Ok(servers)
        }

        // Handle array: [{ "id": "...", ... }, { "id": "...", ... }]
        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut servers = Vec::new();
            let mut seen = HashSet::new();
            while let Some(server) = seq.next_element::<RegistryServer>()? {
                if server.id.is_empty() {
                    return Err(de::Error::custom("server in array must have an 'id' field"));
                }
                if !seen.insert(server.id.clone()) {
                    return Err(de::Error::custom(format!(
                        "duplicate server id '{}'",
                        server.id
                    )));
                }
                servers.push(server);
            }
            Ok(servers)
        }
    }

    deserializer.deserialize_any(ServersVisitor)
}

impl ServerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            version: REGISTRY_SCHEMA_VERSION.to_string(),
            servers: Vec::new(),
        }
    }

    /// Parse a registry from JSON (keyed-object or array form).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The catalog bundled into the binary.
    pub fn bundled() -> Self {
        // The asset is part of the crate; a parse failure is a build defect.
        Self::from_json(BUNDLED_REGISTRY_JSON).expect("bundled registry JSON must parse")
    }

    /// Load a registry from a local JSON file.
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading registry file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("parsing registry file {}", path.display()))
    }

    /// Get a server by ID
    pub fn get(&self, id: &str) -> Option<&RegistryServer> {
        self.servers.iter().find(|s| s.id == id)
    }

    /// Whether a server with this ID exists
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Find the first server whose launch template structurally matches the
    /// observed invocation. Catalog order decides ties.
    pub fn find_by_invocation(&self, command: &str, args: &[String]) -> Option<&RegistryServer> {
        self.servers
            .iter()
            .find(|s| s.launch.matches_invocation(command, args))
    }

    /// List all server IDs in catalog order
    pub fn server_ids(&self) -> Vec<&str> {
        self.servers.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

impl Default for ServerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
