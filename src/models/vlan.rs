//! SoftLayer network VLAN records, as returned by `SoftLayer_Account::getNetworkVlans`.
//!
//! Every field is optional on the wire; the builder decides which ones it needs.

use crate::config;
use crate::error::{require, InventoryError};
use serde::{Deserialize, Serialize};

/// A VLAN owned by the account.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetworkVlan {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub vlan_number: Option<u32>,
    pub fully_qualified_name: Option<String>,
    #[serde(default)]
    pub subnets: Vec<VlanSubnet>,
    pub primary_router: Option<Router>,
}

/// Router a VLAN is trunked to.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Router {
    pub hostname: Option<String>,
}

/// IPv4 subnet routed on a VLAN.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VlanSubnet {
    pub id: Option<u64>,
    pub ip_address_count: Option<u32>,
    pub gateway: Option<String>,
    pub cidr: Option<u8>,
    pub netmask: Option<String>,
    pub network_identifier: Option<String>,
    pub subnet_type: Option<String>,
    #[serde(default)]
    pub ip_addresses: Vec<IpAddressRecord>,
}

/// Member address of a subnet.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct IpAddressRecord {
    pub ip_address: Option<String>,
    pub is_network: Option<bool>,
    pub is_broadcast: Option<bool>,
    pub is_gateway: Option<bool>,
}

impl NetworkVlan {
    /// Whether the VLAN name carries the inventory marker (case-sensitive).
    ///
    /// Unnamed VLANs are never inventoried.
    pub fn is_inventoried(&self) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| name.contains(config::VLAN_NAME_MARKER))
    }

    pub fn number(&self) -> Result<u32, InventoryError> {
        require(self.vlan_number, "vlan", "vlanNumber")
    }

    pub fn router_hostname(&self) -> Result<&str, InventoryError> {
        let router = require(self.primary_router.as_ref(), "vlan", "primaryRouter")?;
        require(router.hostname.as_deref(), "vlan", "primaryRouter.hostname")
    }
}
