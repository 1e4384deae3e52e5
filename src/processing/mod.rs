//! Subnet enrichment logic.
//!
//! - [`endpoint`] - Round-robin virtual center assignment
//! - [`builder`] - Raw subnet + VLAN -> enriched [`Subnet`](crate::models::Subnet)
//! - [`aggregate`] - Inventory keyed by router and VLAN number
//! - [`inventory`] - Per-account VLAN walk

mod aggregate;
mod builder;
mod endpoint;
mod inventory;

// Re-export public functions
pub use aggregate::{RouterVlans, SubnetVlanMap};
pub use builder::build_subnet;
pub use endpoint::assign_virtual_center;
pub use inventory::process_account_vlans;
