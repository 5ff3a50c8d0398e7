use near_sdk::BorshStorageKey;
use near_sdk::near;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Grants,
    Collections,
    Sequences,
    Tokens,
    Balances,
}
