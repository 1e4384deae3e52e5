//! SoftLayer REST client.

use crate::config;
use crate::error::InventoryError;
use crate::models::{Credential, NetworkVlan};
use colored::Colorize;
use reqwest::{Client, Url};
use std::error::Error;
use std::time::Duration;

/// Client for the SoftLayer REST API.
pub struct SoftLayerClient {
    base_url: String,
    client: Client,
}

impl SoftLayerClient {
    pub fn new(base_url: &str) -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config::REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// `getNetworkVlans` URL with the inventory object mask applied.
    fn network_vlans_url(&self) -> Result<Url, Box<dyn Error>> {
        let url = Url::parse_with_params(
            &format!("{}/SoftLayer_Account/getNetworkVlans.json", self.base_url),
            &[("objectMask", config::NETWORK_VLAN_MASK)],
        )?;
        Ok(url)
    }

    /// Fetch the account's VLANs with their subnets and primary router.
    pub async fn get_network_vlans(
        &self,
        credential: &Credential,
    ) -> Result<Vec<NetworkVlan>, Box<dyn Error>> {
        let url = self.network_vlans_url()?;
        log::debug!("GET {} as {}", url.path().on_blue(), credential.username);

        let resp = self
            .client
            .get(url)
            .basic_auth(&credential.username, Some(&credential.api_token))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            log::warn!(
                "{failed} getNetworkVlans for {user}",
                failed = "failed".on_red(),
                user = credential.username
            );
            return Err(InventoryError::Api {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        parse_network_vlans(&body)
    }
}

/// Decode a `getNetworkVlans` response body, reporting the JSON path on failure.
pub(crate) fn parse_network_vlans(body: &str) -> Result<Vec<NetworkVlan>, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    let vlans: Vec<NetworkVlan> = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing VLAN response: path={} error={}", e.path(), e))?;
    log::info!("got {} VLANs", vlans.len());
    Ok(vlans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_vlans_url() {
        let client = SoftLayerClient::new("https://api.example.test/rest/v3.1/").unwrap();
        let url = client.network_vlans_url().unwrap();
        assert_eq!(
            url.path(),
            "/rest/v3.1/SoftLayer_Account/getNetworkVlans.json"
        );
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "objectMask");
        assert_eq!(value, config::NETWORK_VLAN_MASK);
    }

    #[test]
    fn test_parse_network_vlans() {
        let vlans = parse_network_vlans(
            r#"[{"name": "ci-a", "vlanNumber": 5, "primaryRouter": {"hostname": "r1"}}]"#,
        )
        .unwrap();
        assert_eq!(vlans.len(), 1);
        assert_eq!(vlans[0].number().unwrap(), 5);
    }

    #[test]
    fn test_parse_network_vlans_reports_path() {
        let err = parse_network_vlans(r#"[{"name": "ci-a", "vlanNumber": "five"}]"#).unwrap_err();
        assert!(err.to_string().contains("path=[0].vlanNumber"), "{err}");
    }
}
