//! Fixed settings for a run.

use std::net::Ipv6Addr;

/// Output file, written to the working directory.
pub const OUTPUT_FILE: &str = "subnets.json";

/// VLANs whose name contains this marker are inventoried.
pub const VLAN_NAME_MARKER: &str = "ci";

/// Unique-local prefix the VLAN number is substituted into as the fourth hextet.
pub const IPV6_PREFIX_HEAD: &str = "fd65:a1a8:60ad";

/// Prefix length of every derived IPv6 block.
pub const IPV6_PREFIX_LEN: u8 = 64;

/// Host offsets from the network address of the derived /64.
pub const IPV6_GATEWAY_OFFSET: u128 = 2;
pub const IPV6_START_OFFSET: u128 = 4;
pub const IPV6_STOP_OFFSET: u128 = 100;

/// Link-local block the per-VLAN link-local address is taken from.
pub const LINK_LOCAL_NETWORK: Ipv6Addr = Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0);
pub const LINK_LOCAL_PREFIX_LEN: u8 = 64;

/// SoftLayer REST API base.
pub const SOFTLAYER_API_URL: &str = "https://api.softlayer.com/rest/v3.1";

/// HTTP timeout for a single VLAN fetch.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Object mask projecting the VLAN fields the inventory reads.
pub const NETWORK_VLAN_MASK: &str = "mask[id,name,vlanNumber,fullyQualifiedName,\
subnets[id,ipAddressCount,gateway,cidr,netmask,networkIdentifier,subnetType,\
ipAddresses[ipAddress,isNetwork,isBroadcast,isGateway]],\
primaryRouter[hostname]]";
