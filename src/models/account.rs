//! Account credentials and the virtual center association map.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// SoftLayer API credential for one account.
///
/// Decoded from `{"Username": ..., "ApiToken": ...}`; key case is ignored.
#[derive(Clone)]
pub struct Credential {
    pub username: String,
    pub api_token: String,
}

impl<'de> Deserialize<'de> for Credential {
    fn deserialize<D>(deserializer: D) -> Result<Credential, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = HashMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let field = |name: &'static str| -> Result<String, D::Error> {
            let value = fields
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
                .ok_or_else(|| de::Error::missing_field(name))?;
            value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| de::Error::custom(format!("{name} must be a string")))
        };
        Ok(Credential {
            username: field("Username")?,
            api_token: field("ApiToken")?,
        })
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

/// owner -> router hostname -> virtual centers, in round-robin order.
pub type EndpointMap = HashMap<String, HashMap<String, Vec<String>>>;
