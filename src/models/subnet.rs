//! Enriched subnet record written to the inventory file.

use serde::{Deserialize, Serialize};

/// One inventoried subnet: the IPv4 facts from SoftLayer plus the derived
/// IPv6 scheme and the assigned virtual center.
///
/// Field names are what the provisioning tooling reads.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Subnet {
    pub cidr: u8,
    /// The gateway appliance also serves DNS for the subnet.
    #[serde(rename = "dnsServer")]
    pub dns_server: String,
    #[serde(rename = "machineNetworkCidr")]
    pub machine_network_cidr: String,
    pub gateway: String,
    pub mask: String,
    pub network: String,
    #[serde(rename = "ipAddresses")]
    pub ip_addresses: Vec<String>,
    /// Empty when no virtual center is mapped for the owner/router.
    #[serde(rename = "virtualcenter")]
    pub virtual_center: String,

    #[serde(rename = "ipv6prefix")]
    pub ipv6_prefix: String,
    #[serde(rename = "StartIPv6Address")]
    pub start_ipv6_address: String,
    #[serde(rename = "StopIPv6Address")]
    pub stop_ipv6_address: String,
    #[serde(rename = "LinkLocalIPv6")]
    pub link_local_ipv6: String,
    #[serde(rename = "CidrIPv6")]
    pub cidr_ipv6: u8,
    #[serde(rename = "gatewayipv6")]
    pub gateway_ipv6: String,
}
