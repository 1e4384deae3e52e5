//! Walks one account's VLANs into the inventory.

use super::aggregate::SubnetVlanMap;
use super::builder::build_subnet;
use crate::models::{EndpointMap, NetworkVlan};
use std::error::Error;

/// Add every subnet of the account's inventoried VLANs to `subnets`.
///
/// VLANs are taken in API order; the position of each VLAN in the full list
/// (filtered-out VLANs included) drives virtual center round-robin.
///
/// # Returns
/// * `Ok(usize)` - Number of subnets built for this account
/// * `Err` - On the first record missing a required field
pub fn process_account_vlans(
    vlans: &[NetworkVlan],
    owner: &str,
    endpoints: &EndpointMap,
    subnets: &mut SubnetVlanMap,
) -> Result<usize, Box<dyn Error>> {
    let mut built = 0;

    for (i, vlan) in vlans.iter().enumerate() {
        if !vlan.is_inventoried() {
            log::debug!(
                "skip vlan #{i} name={:?} number={:?}",
                vlan.name,
                vlan.vlan_number
            );
            continue;
        }
        for raw in &vlan.subnets {
            let subnet = build_subnet(raw, vlan, endpoints, owner, i)?;
            subnets.insert(vlan.router_hostname()?, vlan.number()?, subnet);
            built += 1;
        }
    }

    Ok(built)
}
