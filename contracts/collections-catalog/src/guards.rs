use near_sdk::{AccountId, env};

use catalog_nodes::{NodeAuthority, NodeId};

use crate::{Collection, CollectionError, CollectionId, DELIMITER, ONE_YOCTO};

pub(crate) fn check_node_authority(
    authority: &impl NodeAuthority,
    node_id: NodeId,
    account: &AccountId,
) -> Result<(), CollectionError> {
    if !authority.is_authorized(node_id, account) {
        return Err(CollectionError::node_authority(node_id));
    }
    Ok(())
}

pub(crate) fn check_one_yocto() -> Result<(), CollectionError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(CollectionError::InvalidInput(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

pub(crate) fn sequence_key(collection_id: CollectionId, sequence_id: u16) -> String {
    format!("{collection_id}{DELIMITER}{sequence_id}")
}

pub(crate) fn token_key(collection_id: CollectionId, token_id: u64) -> String {
    format!("{collection_id}{DELIMITER}{token_id}")
}

pub(crate) fn balance_key(collection_id: CollectionId, account: &AccountId) -> String {
    format!("{collection_id}{DELIMITER}{account}")
}

impl crate::Contract {
    /// Owner-mutating gate: the current owner, or any account holding
    /// authority over the collection's control node.
    pub(crate) fn check_collection_admin(
        &self,
        collection: &Collection,
        actor: &AccountId,
    ) -> Result<(), CollectionError> {
        if collection.owner.as_ref() == Some(actor) {
            return Ok(());
        }
        check_node_authority(&self.grants, collection.control_node, actor)
    }

    /// A clone that has run its init. The implementation record is latched but
    /// ownerless and never serves collection traffic.
    pub(crate) fn live_collection(
        &self,
        collection_id: CollectionId,
    ) -> Result<Collection, CollectionError> {
        let collection = self
            .collections
            .get(&collection_id)
            .ok_or_else(CollectionError::collection_not_found)?;
        if collection.owner.is_none() {
            return Err(CollectionError::collection_not_found());
        }
        Ok(collection.clone())
    }
}
