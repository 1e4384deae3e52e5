//! Domain models for the subnet inventory.
//!
//! - [`NetworkVlan`] and friends - raw records from the SoftLayer API
//! - [`Subnet`] - enriched subnet written to the inventory
//! - [`Ipv6`] and [`derive_ipv6`] - per-VLAN IPv6 addressing
//! - [`Credential`] and [`EndpointMap`] - run inputs

mod account;
mod ipv6;
mod subnet;
mod vlan;

// Re-export public types
pub use account::{Credential, EndpointMap};
pub use ipv6::{derive_ipv6, Ipv6, Ipv6Fields};
pub use subnet::Subnet;
pub use vlan::{IpAddressRecord, NetworkVlan, Router, VlanSubnet};
