use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::serde_json::{Map, Value};
use near_sdk_macros::NearSchema;

/// NEP-297 envelope for catalog events.
#[derive(NearSchema, Serialize, Deserialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct CatalogEvent {
    pub(crate) standard: String,
    pub(crate) version: String,
    pub(crate) event: String,
    pub(crate) data: Vec<CatalogEventEntry>,
}

/// One entry in the data array: the action taken, the account that took it,
/// and action-specific fields flattened alongside.
#[derive(NearSchema, Serialize, Deserialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct CatalogEventEntry {
    pub(crate) action: String,
    pub(crate) actor: String,
    #[serde(flatten)]
    pub(crate) fields: Map<String, Value>,
}
