//! Virtual center assignment.

use crate::error::InventoryError;
use crate::models::EndpointMap;

/// Pick the virtual center for a VLAN, round-robin over the list configured
/// for `owner` and `router`.
///
/// `index` is the VLAN's position in the account's full VLAN list, before
/// name filtering. Returns an empty string when nothing is configured for
/// the owner or router.
pub fn assign_virtual_center(
    owner: &str,
    router: &str,
    endpoints: &EndpointMap,
    index: usize,
) -> Result<String, InventoryError> {
    let Some(centers) = endpoints.get(owner).and_then(|routers| routers.get(router)) else {
        return Ok(String::new());
    };
    if centers.is_empty() {
        return Err(InventoryError::EmptyEndpointList {
            owner: owner.to_string(),
            router: router.to_string(),
        });
    }
    Ok(centers[index % centers.len()].clone())
}
