use crate::*;
use near_sdk::json_types::{U64, U128};

#[near]
impl Contract {
    pub fn collection_name(&self, collection_id: CollectionId) -> Option<String> {
        self.collections.get(&collection_id).map(|c| c.name.clone())
    }

    pub fn collection_symbol(&self, collection_id: CollectionId) -> Option<String> {
        self.collections
            .get(&collection_id)
            .map(|c| c.symbol.clone())
    }

    pub fn collection_owner(&self, collection_id: CollectionId) -> Option<AccountId> {
        self.collections
            .get(&collection_id)
            .and_then(|c| c.owner.clone())
    }

    pub fn control_node(&self, collection_id: CollectionId) -> Option<u64> {
        self.collections
            .get(&collection_id)
            .map(|c| c.control_node)
    }

    pub fn contract_uri(&self, collection_id: CollectionId) -> Option<String> {
        self.collections
            .get(&collection_id)
            .map(|c| c.contract_uri.clone())
    }

    pub fn get_collection(&self, collection_id: CollectionId) -> Option<Collection> {
        self.collections.get(&collection_id).cloned()
    }

    pub fn total_supply(&self, collection_id: CollectionId) -> U64 {
        U64(self
            .collections
            .get(&collection_id)
            .map(|c| c.total_supply)
            .unwrap_or(0))
    }

    pub fn balance_of(&self, collection_id: CollectionId, account_id: AccountId) -> U64 {
        U64(self
            .balances
            .get(&balance_key(collection_id, &account_id))
            .copied()
            .unwrap_or(0))
    }

    pub fn owner_of(&self, collection_id: CollectionId, token_id: U64) -> Option<AccountId> {
        self.tokens
            .get(&token_key(collection_id, token_id.0))
            .map(|record| record.owner_id.clone())
    }

    /// Raw packed token data for external interpretation; see
    /// [`pack_token_data`].
    pub fn get_token_data(&self, collection_id: CollectionId, token_id: U64) -> Option<U64> {
        self.tokens
            .get(&token_key(collection_id, token_id.0))
            .map(|record| U64(record.data))
    }

    /// Deterministic URI derived from the packed token data. Pure function of
    /// stored state; `base_uri` in the contract metadata is the only
    /// indirection.
    pub fn token_uri(&self, collection_id: CollectionId, token_id: U64) -> Option<String> {
        let record = self.tokens.get(&token_key(collection_id, token_id.0))?;
        let base = self
            .contract_metadata
            .base_uri
            .as_deref()
            .unwrap_or("catalog:/");
        Some(format!("{}/{}/{}", base, collection_id, record.data))
    }

    /// Receiver/amount for a hypothetical sale at `sale_price`. `None` only
    /// for unknown tokens; an unset royalty slot reports zero receiver and
    /// zero amount.
    pub fn royalty_info(
        &self,
        collection_id: CollectionId,
        token_id: U64,
        sale_price: U128,
    ) -> Option<RoyaltyInfo> {
        self.tokens.get(&token_key(collection_id, token_id.0))?;
        let collection = self.collections.get(&collection_id)?;
        Some(match &collection.royalty {
            Some(royalty) => RoyaltyInfo {
                receiver: Some(royalty.receiver.clone()),
                amount: U128(
                    sale_price.0.saturating_mul(u128::from(royalty.bps))
                        / u128::from(BASIS_POINTS),
                ),
            },
            None => RoyaltyInfo {
                receiver: None,
                amount: U128(0),
            },
        })
    }

    /// Capability probe. Ownership/transfer (nep171), event envelope (nep297)
    /// and the royalty surface (nep199) are always on.
    pub fn supports_standard(&self, standard: String) -> bool {
        matches!(standard.as_str(), "nep171" | "nep199" | "nep297")
    }

    pub fn get_contract_metadata(&self) -> &ContractMetadata {
        &self.contract_metadata
    }

    pub fn get_version(&self) -> &String {
        &self.version
    }
}
