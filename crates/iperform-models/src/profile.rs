use iperform_core::serde::{lenient_opt_string, lenient_string};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The school's public identity, shown on the login screen and report
/// headers.
///
/// The sanitizer substitutes [`SchoolProfile::default`] whenever a document
/// arrives without one, so downstream code can rely on the profile existing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolProfile {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub motto: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_opt_string"
    )]
    pub logo_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for SchoolProfile {
    /// The placeholder profile used when a document omits `schoolProfile`.
    fn default() -> Self {
        Self {
            name: "I Perform Demo School".to_string(),
            address: "Digital Space".to_string(),
            code: "IP-DEMO".to_string(),
            motto: "Excellence".to_string(),
            logo_url: None,
            extra: Map::new(),
        }
    }
}
