//! Builds the SoftLayer subnet inventory consumed by cluster provisioning.
//!
//! For every account, VLANs whose name carries the `ci` marker are read from
//! SoftLayer, each subnet is given a derived IPv6 scheme and a virtual
//! center, and the results are collected by router hostname and VLAN number.

pub mod cli;
pub mod config;
pub mod error;
pub mod inputs;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod softlayer;

use cli::RunOptions;
use processing::{process_account_vlans, SubnetVlanMap};
use softlayer::{read_vlan_cache, SoftLayerClient, VlanSource};
use std::error::Error;

/// Build the subnet inventory for every account in the credential file.
///
/// Accounts are processed one after another; the first error aborts the run.
pub async fn generate_subnets(options: &RunOptions) -> Result<SubnetVlanMap, Box<dyn Error>> {
    let endpoints = inputs::read_endpoint_map(&options.vcenter)?;
    let credentials = inputs::read_credentials(&options.auth)?;

    let source = match &options.vlan_cache {
        Some(cache_file) => VlanSource::Cache(read_vlan_cache(cache_file)?),
        None => VlanSource::Api(SoftLayerClient::new(&options.api_url)?),
    };

    let mut subnets = SubnetVlanMap::new();
    for credential in &credentials {
        log::info!("{}", credential.username);
        let vlans = source.network_vlans(credential).await?;
        let built =
            process_account_vlans(&vlans, &credential.username, &endpoints, &mut subnets)?;
        log::info!(
            "account {} vlans={} subnets={built}",
            credential.username,
            vlans.len()
        );
    }

    Ok(subnets)
}
