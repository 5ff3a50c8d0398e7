use crate::*;
use near_sdk::env;
use near_sdk::serde_json::Value;

#[near]
impl Contract {
    /// Configure a fresh minting sequence. Authorization is checked against
    /// the sequence's own drop node, not the collection's control node, so a
    /// control-node holder can delegate campaigns to sub-nodes without
    /// granting full ownership.
    ///
    /// `extra_data` is an open extension slot broadcast with the
    /// configuration event; it is never persisted.
    #[handle_result]
    pub fn configure_sequence(
        &mut self,
        collection_id: CollectionId,
        config: SequenceConfig,
        extra_data: Option<Value>,
    ) -> Result<u16, CollectionError> {
        let actor = env::predecessor_account_id();

        // Sequences are always created fresh, never imported mid-flight.
        // Checked before anything else, regardless of other field values.
        if config.minted != 0 {
            return Err(CollectionError::InvalidSequenceConfig(
                "minted must be 0 at configuration time".into(),
            ));
        }
        if config.max_supply > MAX_SEQUENCE_ORDINAL {
            return Err(CollectionError::InvalidSequenceConfig(format!(
                "max_supply exceeds ordinal capacity of {}",
                MAX_SEQUENCE_ORDINAL
            )));
        }

        let mut collection = self.live_collection(collection_id)?;
        guards::check_node_authority(&self.grants, config.drop_node_id, &actor)?;

        let sequence_id = collection.next_sequence_id;
        collection.next_sequence_id = collection
            .next_sequence_id
            .checked_add(1)
            .ok_or_else(|| CollectionError::Internal("Sequence id counter overflow".into()))?;

        self.sequences
            .insert(sequence_key(collection_id, sequence_id), config.clone());
        self.collections.insert(collection_id, collection);

        events::emit_sequence_configured(&actor, collection_id, sequence_id, &config, extra_data);
        Ok(sequence_id)
    }

    pub fn get_sequence(
        &self,
        collection_id: CollectionId,
        sequence_id: u16,
    ) -> Option<SequenceConfig> {
        self.sequences
            .get(&sequence_key(collection_id, sequence_id))
            .cloned()
    }
}
