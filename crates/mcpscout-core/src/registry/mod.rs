//! MCP Server Registry
//!
//! This module defines the schema for the catalog of known MCP servers.
//! A default catalog ships bundled into the crate; a registry can also be
//! loaded from a local JSON file.

mod schema;
mod types;

pub use schema::*;
pub use types::*;
