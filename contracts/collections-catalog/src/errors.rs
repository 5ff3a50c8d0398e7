use near_sdk_macros::NearSchema;

use catalog_nodes::NodeId;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum CollectionError {
    AlreadyInitialized,
    NotAuthorized(String),
    InvalidSequenceConfig(String),
    InvalidMintRequest(String),
    SequenceIsSealed,
    SequenceSupplyExhausted,
    NotFound(String),
    InvalidInput(String),
    Internal(String),
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInitialized => write!(f, "AlreadyInitialized"),
            Self::NotAuthorized(msg) => write!(f, "NotAuthorized: {}", msg),
            Self::InvalidSequenceConfig(msg) => write!(f, "InvalidSequenceConfig: {}", msg),
            Self::InvalidMintRequest(msg) => write!(f, "InvalidMintRequest: {}", msg),
            Self::SequenceIsSealed => write!(f, "SequenceIsSealed"),
            Self::SequenceSupplyExhausted => write!(f, "SequenceSupplyExhausted"),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl CollectionError {
    pub fn collection_not_found() -> Self {
        Self::NotFound("Collection not found".into())
    }
    pub fn sequence_not_found() -> Self {
        Self::NotFound("Sequence not found".into())
    }
    pub fn token_not_found() -> Self {
        Self::NotFound("Token not found".into())
    }
    pub fn node_authority(node_id: NodeId) -> Self {
        Self::NotAuthorized(format!("Caller lacks authority over node {}", node_id))
    }
}
