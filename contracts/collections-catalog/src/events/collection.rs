use near_sdk::AccountId;
use near_sdk::serde_json::Value;

use catalog_nodes::NodeId;

use crate::{CollectionId, Royalty, SequenceConfig};

use super::builder::EventBuilder;
use super::{COLLECTION, SEQUENCE, nep171};

pub fn emit_collection_created(
    creator_id: &AccountId,
    collection_id: CollectionId,
    control_node_id: NodeId,
    owner: &AccountId,
) {
    EventBuilder::new(COLLECTION, "create", creator_id)
        .field("collection_id", collection_id)
        .field("control_node_id", control_node_id)
        .field("owner", owner)
        .emit();
}

pub fn emit_collection_owner_changed(
    actor_id: &AccountId,
    collection_id: CollectionId,
    old_owner: Option<&AccountId>,
    new_owner: &AccountId,
) {
    EventBuilder::new(COLLECTION, "owner_changed", actor_id)
        .field("collection_id", collection_id)
        .field_opt("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

/// Generic broadcast channel: `topic` routes nothing on-chain, it only tags
/// the payload for off-chain consumers.
pub fn emit_collection_broadcast(
    actor_id: &AccountId,
    collection_id: CollectionId,
    topic: &str,
    message: &str,
) {
    EventBuilder::new(COLLECTION, "broadcast", actor_id)
        .field("collection_id", collection_id)
        .field("topic", topic)
        .field("message", message)
        .emit();
}

pub fn emit_collection_royalty_updated(
    actor_id: &AccountId,
    collection_id: CollectionId,
    royalty: Option<&Royalty>,
) {
    EventBuilder::new(COLLECTION, "royalty_updated", actor_id)
        .field("collection_id", collection_id)
        .field_opt("receiver", royalty.map(|r| &r.receiver))
        .field_opt("bps", royalty.map(|r| r.bps))
        .emit();
}

pub fn emit_sequence_configured(
    actor_id: &AccountId,
    collection_id: CollectionId,
    sequence_id: u16,
    config: &SequenceConfig,
    extra_data: Option<Value>,
) {
    EventBuilder::new(SEQUENCE, "configure", actor_id)
        .field("collection_id", collection_id)
        .field("sequence_id", sequence_id)
        .field("drop_node_id", config.drop_node_id)
        .field("engine", &config.engine)
        .field("sealed_before_timestamp", config.sealed_before_timestamp)
        .field("sealed_after_timestamp", config.sealed_after_timestamp)
        .field("max_supply", config.max_supply)
        .field_opt("extra_data", extra_data)
        .emit();
}

pub fn emit_records_minted(
    engine_id: &AccountId,
    receiver_id: &AccountId,
    collection_id: CollectionId,
    sequence_id: u16,
    token_ids: &[u64],
) {
    let ids: Vec<String> = token_ids.iter().map(|id| id.to_string()).collect();
    EventBuilder::new(SEQUENCE, "mint", engine_id)
        .field("collection_id", collection_id)
        .field("sequence_id", sequence_id)
        .field("receiver_id", receiver_id)
        .field("token_ids", ids.as_slice())
        .emit();

    let composite: Vec<String> = token_ids
        .iter()
        .map(|id| crate::token_key(collection_id, *id))
        .collect();
    nep171::emit_mint(receiver_id.as_str(), &composite, None);
}
