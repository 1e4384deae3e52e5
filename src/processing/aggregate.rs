//! Inventory keyed by router hostname, then VLAN number.

use crate::models::Subnet;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// VLAN number -> subnet, for one router.
pub type RouterVlans = BTreeMap<u32, Subnet>;

/// Subnet inventory for a run, keyed by router hostname then VLAN number.
///
/// Holds at most one subnet per (router, VLAN); a later insert for the same
/// pair replaces the earlier one, including across accounts.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(transparent)]
pub struct SubnetVlanMap {
    routers: BTreeMap<String, RouterVlans>,
}

impl SubnetVlanMap {
    pub fn new() -> SubnetVlanMap {
        SubnetVlanMap {
            routers: BTreeMap::new(),
        }
    }

    /// Store `subnet` under (`router`, `vlan_number`), returning the subnet it replaced.
    pub fn insert(&mut self, router: &str, vlan_number: u32, subnet: Subnet) -> Option<Subnet> {
        let replaced = self
            .routers
            .entry(router.to_string())
            .or_default()
            .insert(vlan_number, subnet);
        if let Some(old) = &replaced {
            log::warn!(
                "{overwrite} router {router} vlan {vlan_number} (was network {network})",
                overwrite = "overwrite".on_yellow(),
                network = old.network,
            );
        }
        replaced
    }

    pub fn get(&self, router: &str, vlan_number: u32) -> Option<&Subnet> {
        self.routers.get(router)?.get(&vlan_number)
    }

    pub fn router(&self, router: &str) -> Option<&RouterVlans> {
        self.routers.get(router)
    }

    pub fn routers(&self) -> impl Iterator<Item = (&String, &RouterVlans)> {
        self.routers.iter()
    }

    /// Total number of subnets across all routers.
    pub fn len(&self) -> usize {
        self.routers.values().map(|vlans| vlans.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.routers.is_empty()
    }
}
