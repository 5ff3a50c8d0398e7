use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U64;
use near_sdk::testing_env;

fn context_with_one_yocto(predecessor: near_sdk::AccountId) -> near_sdk::test_utils::VMContextBuilder {
    let mut builder = context(predecessor);
    builder.attached_deposit(ONE_YOCTO);
    builder
}

fn setup_with_token() -> (Contract, CollectionId) {
    let (mut contract, collection_id, sequence_id) = setup_with_sequence();
    testing_env!(context(engine()).build());
    contract
        .mint_record(collector(), collection_id, sequence_id)
        .unwrap();
    (contract, collection_id)
}

#[test]
fn owner_transfers_token() {
    let (mut contract, collection_id) = setup_with_token();
    testing_env!(context_with_one_yocto(collector()).build());

    contract
        .transfer_record(collection_id, U64(1), stranger(), None)
        .unwrap();

    assert_eq!(contract.owner_of(collection_id, U64(1)), Some(stranger()));
    assert_eq!(contract.balance_of(collection_id, collector()), U64(0));
    assert_eq!(contract.balance_of(collection_id, stranger()), U64(1));
    // Total supply is unaffected by transfers.
    assert_eq!(contract.total_supply(collection_id), U64(1));
}

#[test]
fn transfer_requires_one_yocto() {
    let (mut contract, collection_id) = setup_with_token();
    testing_env!(context(collector()).build());

    let err = contract
        .transfer_record(collection_id, U64(1), stranger(), None)
        .unwrap_err();
    assert!(matches!(err, CollectionError::InvalidInput(_)));
}

#[test]
fn non_owner_cannot_transfer() {
    let (mut contract, collection_id) = setup_with_token();
    testing_env!(context_with_one_yocto(stranger()).build());

    let err = contract
        .transfer_record(collection_id, U64(1), stranger(), None)
        .unwrap_err();
    assert!(matches!(err, CollectionError::NotAuthorized(_)));
    assert_eq!(contract.owner_of(collection_id, U64(1)), Some(collector()));
}

#[test]
fn self_transfer_rejected() {
    let (mut contract, collection_id) = setup_with_token();
    testing_env!(context_with_one_yocto(collector()).build());

    let err = contract
        .transfer_record(collection_id, U64(1), collector(), None)
        .unwrap_err();
    assert!(matches!(err, CollectionError::InvalidInput(_)));
}

#[test]
fn transfer_unknown_token_fails() {
    let (mut contract, collection_id) = setup_with_token();
    testing_env!(context_with_one_yocto(collector()).build());

    let err = contract
        .transfer_record(collection_id, U64(9), stranger(), None)
        .unwrap_err();
    assert!(matches!(err, CollectionError::NotFound(_)));
}
