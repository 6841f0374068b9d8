//! Company records returned by the suggestion endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the suggestion response.
///
/// Every field is optional on the wire; missing or `null` values deserialize
/// to an empty name/domain and an absent logo.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RawCompany {
    /// Display name of the company.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Bare domain, e.g. `segment.com`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub domain: String,

    /// Logo image URL, if the service has one.
    #[serde(default)]
    pub logo: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl RawCompany {
    /// Returns `true` when the record carries a usable domain.
    pub fn has_domain(&self) -> bool {
        !self.domain.trim().is_empty()
    }

    /// Returns the logo URL when present and non-blank.
    pub fn logo_url(&self) -> Option<&str> {
        self.logo.as_deref().filter(|l| !l.trim().is_empty())
    }
}
