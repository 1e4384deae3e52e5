//! Run input files: account credentials and virtual center associations.

use crate::models::{Credential, EndpointMap};
use serde::de::DeserializeOwned;
use std::error::Error;

/// Read and decode a JSON file, naming the offending path on failure.
fn read_json_file<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn Error>> {
    let json = std::fs::read_to_string(path).map_err(|e| format!("Error reading {path}: {e}"))?;
    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let value = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing {path}: path={} error={}", e.path(), e))?;
    Ok(value)
}

/// Read the virtual center association file (owner -> router -> virtual centers).
pub fn read_endpoint_map(path: &str) -> Result<EndpointMap, Box<dyn Error>> {
    let endpoints: EndpointMap = read_json_file(path)?;
    log::info!("Read virtual centers for {} owners from {path}", endpoints.len());
    Ok(endpoints)
}

/// Read the account credential file, keeping file order.
pub fn read_credentials(path: &str) -> Result<Vec<Credential>, Box<dyn Error>> {
    let credentials: Vec<Credential> = read_json_file(path)?;
    log::info!("Read {} accounts from {path}", credentials.len());
    Ok(credentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_endpoint_map() {
        let endpoints = read_endpoint_map("src/tests/test_data/vcenters_01.json")
            .expect("Error reading virtual centers");
        assert_eq!(endpoints["ci-owner"]["router-a"], vec!["vc1", "vc2"]);
        assert_eq!(endpoints["ci-owner"]["router-b"], vec!["vc3"]);
    }

    #[test]
    fn test_read_credentials_keeps_order() {
        let credentials = read_credentials("src/tests/test_data/credentials_01.json")
            .expect("Error reading credentials");
        let users: Vec<&str> = credentials.iter().map(|c| c.username.as_str()).collect();
        assert_eq!(users, vec!["ci-owner", "other-owner"]);
    }

    #[test]
    fn test_read_credentials_bad_shape() {
        let err = read_credentials("src/tests/test_data/vcenters_01.json").unwrap_err();
        assert!(err.to_string().contains("Error parsing"), "{err}");
    }

    #[test]
    fn test_read_missing_file() {
        assert!(read_endpoint_map("src/tests/test_data/missing.json").is_err());
    }
}
