use near_sdk::store::{IterableMap, LookupMap};
use near_sdk::{AccountId, PanicOnDefault, near};

use catalog_nodes::NodeGrants;

pub mod constants;
mod errors;
mod guards;
mod validation;

mod events;

mod authority;
mod collection;
mod factory;
mod metadata;
mod storage;


pub use collection::types::{
    Collection, CollectionId, InitState, Royalty, RoyaltyInfo, SequenceConfig, TokenRecord,
    ordinal_of_token_data, pack_token_data, sequence_of_token_data,
};
pub use constants::*;
pub use errors::CollectionError;
pub use metadata::ContractMetadata;
pub use storage::StorageKey;

pub(crate) use guards::{balance_key, sequence_key, token_key};

/// Factory plus every collection clone it has produced, in one contract.
///
/// Each `Collection` record carries its own immutable bindings (control node)
/// and init latch; the contract-level `node_registry` binding is shared by all
/// clones, mirroring a factory deployed against a single authority instance.
#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    /// Bound Node Authority account. Immutable after init; sole writer of
    /// `grants`.
    pub node_registry: AccountId,
    pub(crate) grants: NodeGrants,

    pub contract_metadata: ContractMetadata,

    // Collection id 0 is the latched implementation record; clones start at 1.
    pub next_collection_id: CollectionId,
    pub collections: IterableMap<CollectionId, Collection>,

    // Composite "collection:sequence" keys; sequence ids are per-collection.
    pub(crate) sequences: LookupMap<String, SequenceConfig>,

    // Composite "collection:token" keys; token ids are per-collection, dense.
    pub tokens: IterableMap<String, TokenRecord>,
    pub(crate) balances: LookupMap<String, u64>,
}
