use near_sdk::store::LookupMap;
use near_sdk::{AccountId, IntoStorageKey, near};

use crate::{NodeAuthority, NodeId};

/// Flat attestation table: node id -> accounts allowed to act for it.
///
/// The bound registry account is the only writer. Grant lists stay small (a
/// node's direct operators), so a `Vec` per node beats a nested set in both
/// storage and gas.
#[near(serializers = [borsh])]
pub struct NodeGrants {
    grants: LookupMap<NodeId, Vec<AccountId>>,
}

impl NodeGrants {
    pub fn new<S>(prefix: S) -> Self
    where
        S: IntoStorageKey,
    {
        Self {
            grants: LookupMap::new(prefix),
        }
    }

    /// Record that `account` may act for `node_id`.
    /// Returns `false` when the grant was already present.
    pub fn grant(&mut self, node_id: NodeId, account: AccountId) -> bool {
        match self.grants.get_mut(&node_id) {
            Some(entries) => {
                if entries.contains(&account) {
                    return false;
                }
                entries.push(account);
                true
            }
            None => {
                self.grants.insert(node_id, vec![account]);
                true
            }
        }
    }

    /// Remove a previous attestation.
    /// Returns `false` when no such grant existed.
    pub fn revoke(&mut self, node_id: NodeId, account: &AccountId) -> bool {
        let Some(entries) = self.grants.get_mut(&node_id) else {
            return false;
        };
        let Some(pos) = entries.iter().position(|a| a == account) else {
            return false;
        };
        entries.swap_remove(pos);
        true
    }
}

impl NodeAuthority for NodeGrants {
    fn is_authorized(&self, node_id: NodeId, account: &AccountId) -> bool {
        self.grants
            .get(&node_id)
            .is_some_and(|entries| entries.contains(account))
    }
}
