use crate::*;
use near_sdk::env;

#[near]
impl Contract {
    #[handle_result]
    pub fn set_owner(
        &mut self,
        collection_id: CollectionId,
        new_owner: AccountId,
    ) -> Result<(), CollectionError> {
        let actor = env::predecessor_account_id();
        let mut collection = self.live_collection(collection_id)?;
        self.check_collection_admin(&collection, &actor)?;

        let old_owner = collection.owner.clone();
        collection.owner = Some(new_owner.clone());
        self.collections.insert(collection_id, collection);

        events::emit_collection_owner_changed(&actor, collection_id, old_owner.as_ref(), &new_owner);
        Ok(())
    }

    /// Generic on-chain broadcast channel. The only stored side effect is the
    /// collection's `contract_uri`; `topic` just tags the event for indexers.
    #[handle_result]
    pub fn broadcast_and_store(
        &mut self,
        collection_id: CollectionId,
        topic: String,
        message: String,
    ) -> Result<(), CollectionError> {
        let actor = env::predecessor_account_id();
        let mut collection = self.live_collection(collection_id)?;
        self.check_collection_admin(&collection, &actor)?;
        validation::validate_uri(&message)?;

        collection.contract_uri = message.clone();
        self.collections.insert(collection_id, collection);

        events::emit_collection_broadcast(&actor, collection_id, &topic, &message);
        Ok(())
    }

    /// Fill or clear the collection's royalty slot. Until set, `royalty_info`
    /// reports a zero receiver and zero amount.
    #[handle_result]
    pub fn set_royalty(
        &mut self,
        collection_id: CollectionId,
        royalty: Option<Royalty>,
    ) -> Result<(), CollectionError> {
        let actor = env::predecessor_account_id();
        let mut collection = self.live_collection(collection_id)?;
        self.check_collection_admin(&collection, &actor)?;
        if let Some(royalty) = &royalty {
            validation::validate_royalty(royalty)?;
        }

        collection.royalty = royalty.clone();
        self.collections.insert(collection_id, collection);

        events::emit_collection_royalty_updated(&actor, collection_id, royalty.as_ref());
        Ok(())
    }
}
