//! SoftLayer VLAN sources.
//!
//! - [`client`] - Live `SoftLayer_Account::getNetworkVlans` calls
//! - [`cache`] - Previously captured API responses, for offline runs

mod cache;
mod client;

pub use cache::{read_vlan_cache, VlanCache};
pub use client::SoftLayerClient;

use crate::error::InventoryError;
use crate::models::{Credential, NetworkVlan};
use std::error::Error;

/// Where an account's VLANs come from.
pub enum VlanSource {
    Api(SoftLayerClient),
    Cache(VlanCache),
}

impl VlanSource {
    /// Fetch all VLANs visible to the credential, in API order.
    pub async fn network_vlans(
        &self,
        credential: &Credential,
    ) -> Result<Vec<NetworkVlan>, Box<dyn Error>> {
        match self {
            VlanSource::Api(client) => client.get_network_vlans(credential).await,
            VlanSource::Cache(cache) => match cache.get(&credential.username) {
                Some(vlans) => Ok(vlans.clone()),
                None => Err(InventoryError::UnknownAccount(credential.username.clone()).into()),
            },
        }
    }
}
