//! Offline VLAN source.
//!
//! A cache file maps account username to the raw `getNetworkVlans` response
//! for that account. It is only ever read.

use crate::models::NetworkVlan;
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

/// Account username -> VLANs, in API order.
pub type VlanCache = HashMap<String, Vec<NetworkVlan>>;

/// Read a VLAN cache file.
///
/// # Returns
/// * `Err` - If the file is missing or not a valid cache
pub fn read_vlan_cache(cache_file: &str) -> Result<VlanCache, Box<dyn Error>> {
    if !Path::new(cache_file).exists() {
        return Err(format!("Cache file does not exist: {cache_file}").into());
    }
    log::info!("Using VLAN cache file: {cache_file}");

    let json = std::fs::read_to_string(cache_file)
        .map_err(|e| format!("Error reading cache file {cache_file}: {e}"))?;
    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let cache: VlanCache = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        format!(
            "Error parsing cache file {cache_file}: path={} error={}",
            e.path(),
            e
        )
    })?;
    Ok(cache)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_vlan_cache() {
        let cache = read_vlan_cache("src/tests/test_data/vlans_cache_01.json")
            .expect("Error reading VLAN cache");
        let vlans = &cache["ci-owner"];
        assert_eq!(vlans.len(), 4);
        assert_eq!(vlans[0].name.as_deref(), Some("ci-test"));
        assert_eq!(cache["other-owner"].len(), 1);
    }

    #[test]
    fn test_read_vlan_cache_missing_file() {
        let err = read_vlan_cache("src/tests/test_data/no_such_cache.json").unwrap_err();
        assert!(err.to_string().starts_with("Cache file does not exist"));
    }
}
