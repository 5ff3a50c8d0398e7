use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::AccountId;

use catalog_nodes::NodeId;

use crate::constants::{MAX_SEQUENCE_ORDINAL, ORDINAL_BITS};
use crate::errors::CollectionError;

pub type CollectionId = u64;

/// One-shot init latch. Clones transition Uninitialized -> Initialized exactly
/// once, inside the factory call that produced them; the implementation record
/// is born Initialized so the same transition can never run against it.
#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Debug, PartialEq)]
pub enum InitState {
    Uninitialized,
    Initialized,
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Collection {
    pub state: InitState,
    pub name: String,
    pub symbol: String,
    // `None` only for the implementation record and the in-flight clone
    // between creation and init.
    pub owner: Option<AccountId>,
    /// Node whose authority governs ownership actions. Write-once at creation.
    pub control_node: NodeId,
    pub contract_uri: String,
    #[serde(default)]
    pub royalty: Option<Royalty>,
    pub next_sequence_id: u16,
    pub next_token_id: u64,
    pub total_supply: u64,
}

impl Collection {
    /// A fresh clone bound to its control node, awaiting its single init.
    pub(crate) fn cloned(control_node: NodeId) -> Self {
        Self {
            state: InitState::Uninitialized,
            name: String::new(),
            symbol: String::new(),
            owner: None,
            control_node,
            contract_uri: String::new(),
            royalty: None,
            next_sequence_id: 1,
            next_token_id: 1,
            total_supply: 0,
        }
    }

    /// The shared implementation record: latched from birth.
    pub(crate) fn implementation() -> Self {
        let mut collection = Self::cloned(0);
        collection.state = InitState::Initialized;
        collection
    }

    pub(crate) fn init(
        &mut self,
        name: String,
        symbol: String,
        owner: AccountId,
        contract_uri: String,
    ) -> Result<(), CollectionError> {
        if self.state == InitState::Initialized {
            return Err(CollectionError::AlreadyInitialized);
        }
        self.name = name;
        self.symbol = symbol;
        self.owner = Some(owner);
        self.contract_uri = contract_uri;
        self.state = InitState::Initialized;
        Ok(())
    }
}

/// A bounded minting campaign: sole engine, inclusive-exclusive time window,
/// hard supply cap.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct SequenceConfig {
    /// Node whose authority must approve configuring this sequence.
    pub drop_node_id: NodeId,
    /// Sole account permitted to mint under this sequence.
    pub engine: AccountId,
    /// Window opening boundary in nanoseconds; 0 means unbounded.
    #[serde(default)]
    pub sealed_before_timestamp: u64,
    /// Window closing boundary in nanoseconds; 0 means unbounded.
    #[serde(default)]
    pub sealed_after_timestamp: u64,
    pub max_supply: u64,
    #[serde(default)]
    pub minted: u64,
}

impl SequenceConfig {
    pub(crate) fn is_sealed_at(&self, now: u64) -> bool {
        (self.sealed_before_timestamp != 0 && now < self.sealed_before_timestamp)
            || (self.sealed_after_timestamp != 0 && now >= self.sealed_after_timestamp)
    }
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct TokenRecord {
    /// Sequence that minted this token (provenance).
    pub sequence_id: u16,
    pub owner_id: AccountId,
    /// Packed `(sequence_id << 48) | ordinal`; see [`pack_token_data`].
    pub data: u64,
}

/// Compact on-chain token data: sequence id in the top 16 bits, per-sequence
/// ordinal in the low 48. Metadata URIs derive from this without extra storage.
pub fn pack_token_data(sequence_id: u16, ordinal: u64) -> u64 {
    (u64::from(sequence_id) << ORDINAL_BITS) | (ordinal & MAX_SEQUENCE_ORDINAL)
}

pub fn sequence_of_token_data(data: u64) -> u16 {
    (data >> ORDINAL_BITS) as u16
}

pub fn ordinal_of_token_data(data: u64) -> u64 {
    data & MAX_SEQUENCE_ORDINAL
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Royalty {
    pub receiver: AccountId,
    pub bps: u16,
}

/// Receiver/amount pair for a hypothetical sale. Unset royalty reports a zero
/// receiver and zero amount.
#[near(serializers = [json])]
pub struct RoyaltyInfo {
    pub receiver: Option<AccountId>,
    pub amount: U128,
}
