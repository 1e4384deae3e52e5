//! Error types for subnet inventory generation.

use thiserror::Error;

/// Errors raised while turning raw VLAN records into the subnet inventory.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A field the builder dereferences was absent from the API record.
    #[error("missing field '{field}' on {record}")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    /// VLAN number does not fit the IPv6 prefix template.
    #[error("VLAN number {0} does not fit one IPv6 hextet")]
    InvalidVlanNumber(u32),

    /// Endpoint list configured for an owner/router but empty.
    #[error("no virtual centers listed for owner '{owner}' router '{router}'")]
    EmptyEndpointList { owner: String, router: String },

    /// Offline VLAN source has no entry for the account.
    #[error("no cached VLANs for account '{0}'")]
    UnknownAccount(String),

    /// SoftLayer API returned an error response.
    #[error("SoftLayer API error {status}: {body}")]
    Api { status: u16, body: String },
}

/// Unwrap an optional API field or report which one is missing.
pub fn require<T>(
    value: Option<T>,
    record: &'static str,
    field: &'static str,
) -> Result<T, InventoryError> {
    value.ok_or(InventoryError::MissingField { record, field })
}
