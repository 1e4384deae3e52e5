//! Builds one enriched [`Subnet`] from a raw SoftLayer subnet and its VLAN.

use super::endpoint::assign_virtual_center;
use crate::error::require;
use crate::models::{derive_ipv6, EndpointMap, NetworkVlan, Subnet, VlanSubnet};
use colored::Colorize;
use std::error::Error;

/// Combine a raw subnet with its VLAN's IPv6 scheme and virtual center.
///
/// # Arguments
/// * `subnet` - Raw subnet from the API
/// * `vlan` - VLAN the subnet belongs to
/// * `endpoints` - Virtual center association map
/// * `owner` - Account the VLAN was fetched with
/// * `index` - Position of the VLAN in the account's unfiltered VLAN list
///
/// # Returns
/// * `Err` - If a field the record must carry is absent
pub fn build_subnet(
    subnet: &VlanSubnet,
    vlan: &NetworkVlan,
    endpoints: &EndpointMap,
    owner: &str,
    index: usize,
) -> Result<Subnet, Box<dyn Error>> {
    let router = vlan.router_hostname()?;
    let vlan_number = vlan.number()?;
    let cidr = require(subnet.cidr, "subnet", "cidr")?;
    let gateway = require(subnet.gateway.as_ref(), "subnet", "gateway")?;
    let netmask = require(subnet.netmask.as_ref(), "subnet", "netmask")?;
    let network = require(
        subnet.network_identifier.as_ref(),
        "subnet",
        "networkIdentifier",
    )?;

    // Count is a capacity hint only, never trusted past the records present.
    let hint = subnet.ip_address_count.unwrap_or(0) as usize;
    let mut ip_addresses = Vec::with_capacity(hint.min(subnet.ip_addresses.len()));
    for ip in &subnet.ip_addresses {
        ip_addresses.push(require(ip.ip_address.clone(), "ipAddresses", "ipAddress")?);
    }

    log::info!(
        "router {}, vlan {}, stype {}, network {}",
        router.cyan(),
        vlan_number,
        subnet.subnet_type.as_deref().unwrap_or("unknown"),
        network
    );

    let ipv6 = derive_ipv6(vlan_number)?;
    let virtual_center = assign_virtual_center(owner, router, endpoints, index)?;

    Ok(Subnet {
        cidr,
        dns_server: gateway.clone(),
        machine_network_cidr: format!("{network}/{cidr}"),
        gateway: gateway.clone(),
        mask: netmask.clone(),
        network: network.clone(),
        ip_addresses,
        virtual_center,
        ipv6_prefix: ipv6.prefix.to_string(),
        start_ipv6_address: ipv6.start.to_string(),
        stop_ipv6_address: ipv6.stop.to_string(),
        link_local_ipv6: ipv6.link_local_cidr(),
        cidr_ipv6: ipv6.prefix_len(),
        gateway_ipv6: ipv6.gateway.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::models::{IpAddressRecord, Router};
    use std::collections::HashMap;

    fn ip(addr: &str) -> IpAddressRecord {
        IpAddressRecord {
            ip_address: Some(addr.to_string()),
            ..Default::default()
        }
    }

    fn ci_test_vlan() -> NetworkVlan {
        NetworkVlan {
            name: Some("ci-test".to_string()),
            vlan_number: Some(42),
            primary_router: Some(Router {
                hostname: Some("router-a".to_string()),
            }),
            ..Default::default()
        }
    }

    fn ci_test_subnet() -> VlanSubnet {
        VlanSubnet {
            ip_address_count: Some(1),
            gateway: Some("10.0.0.1".to_string()),
            cidr: Some(24),
            netmask: Some("255.255.255.0".to_string()),
            network_identifier: Some("10.0.0.0".to_string()),
            subnet_type: Some("PRIMARY".to_string()),
            ip_addresses: vec![ip("10.0.0.2")],
            ..Default::default()
        }
    }

    fn endpoints() -> EndpointMap {
        HashMap::from([(
            "owner".to_string(),
            HashMap::from([(
                "router-a".to_string(),
                vec!["vc1".to_string(), "vc2".to_string()],
            )]),
        )])
    }

    #[test]
    fn test_build_subnet() {
        let subnet =
            build_subnet(&ci_test_subnet(), &ci_test_vlan(), &endpoints(), "owner", 0).unwrap();

        assert_eq!(
            subnet,
            Subnet {
                cidr: 24,
                dns_server: "10.0.0.1".to_string(),
                machine_network_cidr: "10.0.0.0/24".to_string(),
                gateway: "10.0.0.1".to_string(),
                mask: "255.255.255.0".to_string(),
                network: "10.0.0.0".to_string(),
                ip_addresses: vec!["10.0.0.2".to_string()],
                virtual_center: "vc1".to_string(),
                ipv6_prefix: "fd65:a1a8:60ad:42::/64".to_string(),
                start_ipv6_address: "fd65:a1a8:60ad:42::4".to_string(),
                stop_ipv6_address: "fd65:a1a8:60ad:42::64".to_string(),
                link_local_ipv6: "fe80::2a/64".to_string(),
                cidr_ipv6: 64,
                gateway_ipv6: "fd65:a1a8:60ad:42::2".to_string(),
            }
        );
    }

    #[test]
    fn test_build_subnet_uses_raw_index() {
        let subnet =
            build_subnet(&ci_test_subnet(), &ci_test_vlan(), &endpoints(), "owner", 3).unwrap();
        assert_eq!(subnet.virtual_center, "vc2");

        let subnet =
            build_subnet(&ci_test_subnet(), &ci_test_vlan(), &endpoints(), "other", 3).unwrap();
        assert_eq!(subnet.virtual_center, "");
    }

    #[test]
    fn test_build_subnet_keeps_addresses_past_count() {
        let mut raw = ci_test_subnet();
        raw.ip_addresses = vec![ip("10.0.0.2"), ip("10.0.0.3"), ip("10.0.0.4")];
        let subnet = build_subnet(&raw, &ci_test_vlan(), &endpoints(), "owner", 0).unwrap();
        assert_eq!(subnet.ip_addresses, vec!["10.0.0.2", "10.0.0.3", "10.0.0.4"]);
    }

    #[test]
    fn test_build_subnet_inflated_count() {
        let mut raw = ci_test_subnet();
        raw.ip_address_count = Some(u32::MAX);
        let subnet = build_subnet(&raw, &ci_test_vlan(), &endpoints(), "owner", 0).unwrap();
        assert_eq!(subnet.ip_addresses, vec!["10.0.0.2"]);
    }

    #[test]
    fn test_build_subnet_missing_field() {
        let mut raw = ci_test_subnet();
        raw.netmask = None;
        let err = build_subnet(&raw, &ci_test_vlan(), &endpoints(), "owner", 0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InventoryError>(),
            Some(InventoryError::MissingField {
                field: "netmask",
                ..
            })
        ));

        let mut vlan = ci_test_vlan();
        vlan.vlan_number = None;
        let err = build_subnet(&ci_test_subnet(), &vlan, &endpoints(), "owner", 0).unwrap_err();
        assert_eq!(err.to_string(), "missing field 'vlanNumber' on vlan");
    }
}
