//! Stock-keeper records.

use iperform_core::serde::{lenient_i64, lenient_string};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub item_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub quantity: i64,
    /// Unit of measure, e.g. `"pcs"`, `"boxes"`, `"kg"`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub unit: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_updated: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
