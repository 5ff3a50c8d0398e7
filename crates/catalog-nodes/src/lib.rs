//! Node authority seam for the Catalog protocol.
//!
//! Collections never store permission lists themselves — only node ids. Every
//! privileged action issues a synchronous capability query through the
//! [`NodeAuthority`] trait. The node registry owns the hierarchy and
//! delegation rules; it materializes the boolean answers into a [`NodeGrants`]
//! table embedded in the consuming contract, so the collection core stays
//! decoupled from how authority is derived.

mod grants;

pub use grants::NodeGrants;

use near_sdk::AccountId;

/// Identifier of a node in the external ownership hierarchy.
pub type NodeId = u64;

/// Capability check consumed by collection contracts.
///
/// Implementations answer one question: may `account` currently act for
/// `node_id`. Hierarchy traversal and delegation live behind this seam.
pub trait NodeAuthority {
    fn is_authorized(&self, node_id: NodeId, account: &AccountId) -> bool;
}
