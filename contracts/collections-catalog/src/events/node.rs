use near_sdk::AccountId;

use catalog_nodes::NodeId;

use super::NODE;
use super::builder::EventBuilder;

pub fn emit_node_authority_granted(registry_id: &AccountId, node_id: NodeId, account_id: &AccountId) {
    EventBuilder::new(NODE, "grant", registry_id)
        .field("node_id", node_id)
        .field("account_id", account_id)
        .emit();
}

pub fn emit_node_authority_revoked(registry_id: &AccountId, node_id: NodeId, account_id: &AccountId) {
    EventBuilder::new(NODE, "revoke", registry_id)
        .field("node_id", node_id)
        .field("account_id", account_id)
        .emit();
}
