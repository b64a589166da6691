//! Inspection services
//!
//! Per-client config inspection and inventory aggregation.

mod client_config;
mod inspector;
mod inventory;

pub use inspector::ClientInspector;
pub use inventory::InventoryService;
