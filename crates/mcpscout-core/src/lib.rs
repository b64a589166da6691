//! # McpScout Core Library
//!
//! Domain logic and inspection services for McpScout.
//!
//! ## Modules
//!
//! - `domain` - Core entities (ClientKind, ReconciledEntry, InventoryReport)
//! - `registry` - MCP server registry schema and bundled catalog
//! - `error` - Inspection failure taxonomy
//! - `service` - Per-client inspection and inventory aggregation

pub mod domain;
pub mod error;
pub mod registry;
pub mod service;

// Re-export commonly used types
pub use domain::*;
pub use error::InspectError;
pub use registry::{LaunchConfig, RegistryServer, ServerRegistry};
pub use service::*;
