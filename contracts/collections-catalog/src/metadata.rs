use near_sdk::near;

/// Contract-level metadata, NEP-177-flavored. `base_uri` is the indirection
/// root for [`token_uri`](crate::Contract::token_uri) derivation.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct ContractMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub base_uri: Option<String>,
}

impl Default for ContractMetadata {
    fn default() -> Self {
        Self {
            spec: "catalog-1.0.0".to_string(),
            name: "Catalog Collections".to_string(),
            symbol: "CATALOG".to_string(),
            base_uri: None,
        }
    }
}
