use crate::*;
use near_sdk::env;

use catalog_nodes::NodeId;

#[near]
impl Contract {
    #[init]
    pub fn new(node_registry: AccountId, contract_metadata: Option<ContractMetadata>) -> Self {
        let mut contract = Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            node_registry,
            grants: NodeGrants::new(StorageKey::Grants),
            contract_metadata: contract_metadata.unwrap_or_default(),
            next_collection_id: IMPLEMENTATION_ID + 1,
            collections: IterableMap::new(StorageKey::Collections),
            sequences: LookupMap::new(StorageKey::Sequences),
            tokens: IterableMap::new(StorageKey::Tokens),
            balances: LookupMap::new(StorageKey::Balances),
        };
        // Latched from birth: `init` against the implementation fails the same
        // way it fails against an already-initialized clone.
        contract
            .collections
            .insert(IMPLEMENTATION_ID, Collection::implementation());
        contract
    }

    /// Produce a new collection clone bound to `control_node_id` and run its
    /// one-time init. The assigned id is returned and carried in the creation
    /// event so callers can locate the collection.
    #[handle_result]
    pub fn create_collection(
        &mut self,
        name: String,
        symbol: String,
        control_node_id: NodeId,
        owner: AccountId,
        contract_uri: String,
    ) -> Result<CollectionId, CollectionError> {
        let creator = env::predecessor_account_id();
        guards::check_node_authority(&self.grants, control_node_id, &creator)?;
        validation::validate_display_strings(&name, &symbol)?;
        validation::validate_uri(&contract_uri)?;

        let collection_id = self.next_collection_id;
        self.next_collection_id = self
            .next_collection_id
            .checked_add(1)
            .ok_or_else(|| CollectionError::Internal("Collection id counter overflow".into()))?;

        let mut collection = Collection::cloned(control_node_id);
        collection.init(name, symbol, owner.clone(), contract_uri)?;
        self.collections.insert(collection_id, collection);

        events::emit_collection_created(&creator, collection_id, control_node_id, &owner);
        Ok(collection_id)
    }

    pub fn implementation(&self) -> CollectionId {
        IMPLEMENTATION_ID
    }

    /// One-time initializer. The factory consumes the single transition inside
    /// `create_collection`, so every reachable record is already latched and
    /// this entry point can only fail.
    #[handle_result]
    pub fn init(
        &mut self,
        collection_id: CollectionId,
        name: String,
        symbol: String,
        owner: AccountId,
        contract_uri: String,
    ) -> Result<(), CollectionError> {
        let collection = self
            .collections
            .get_mut(&collection_id)
            .ok_or_else(CollectionError::collection_not_found)?;
        collection.init(name, symbol, owner, contract_uri)
    }
}
