use crate::*;
use near_sdk::env;

use catalog_nodes::{NodeAuthority, NodeId};

#[near]
impl Contract {
    /// Attest that `account_id` may act for `node_id`. The bound registry
    /// resolves hierarchy and delegation off-contract and pushes only the
    /// boolean outcome here.
    #[handle_result]
    pub fn grant_node_authority(
        &mut self,
        node_id: NodeId,
        account_id: AccountId,
    ) -> Result<(), CollectionError> {
        self.check_node_registry(&env::predecessor_account_id())?;
        if self.grants.grant(node_id, account_id.clone()) {
            events::emit_node_authority_granted(&self.node_registry, node_id, &account_id);
        }
        Ok(())
    }

    #[handle_result]
    pub fn revoke_node_authority(
        &mut self,
        node_id: NodeId,
        account_id: AccountId,
    ) -> Result<(), CollectionError> {
        self.check_node_registry(&env::predecessor_account_id())?;
        if self.grants.revoke(node_id, &account_id) {
            events::emit_node_authority_revoked(&self.node_registry, node_id, &account_id);
        }
        Ok(())
    }

    pub fn is_authorized(&self, node_id: NodeId, account_id: AccountId) -> bool {
        self.grants.is_authorized(node_id, &account_id)
    }

    pub fn node_registry(&self) -> &AccountId {
        &self.node_registry
    }
}

impl Contract {
    pub(crate) fn check_node_registry(&self, actor: &AccountId) -> Result<(), CollectionError> {
        if actor != &self.node_registry {
            return Err(CollectionError::NotAuthorized(
                "Only the bound node registry can attest node authority".into(),
            ));
        }
        Ok(())
    }
}
