use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::{U64, U128};
use near_sdk::testing_env;

fn setup_with_token() -> (Contract, CollectionId) {
    let (mut contract, collection_id, sequence_id) = setup_with_sequence();
    testing_env!(context(engine()).build());
    contract
        .mint_record(collector(), collection_id, sequence_id)
        .unwrap();
    (contract, collection_id)
}

#[test]
fn token_uri_is_deterministic() {
    let (contract, collection_id) = setup_with_token();

    let data = contract.get_token_data(collection_id, U64(1)).unwrap().0;
    let uri = contract.token_uri(collection_id, U64(1)).unwrap();
    assert_eq!(uri, format!("catalog://{}/{}", collection_id, data));
    // Pure function of stored state.
    assert_eq!(contract.token_uri(collection_id, U64(1)).unwrap(), uri);
}

#[test]
fn token_uri_uses_configured_base() {
    testing_env!(context(registry()).build());
    let mut contract = Contract::new(
        registry(),
        Some(ContractMetadata {
            base_uri: Some("ipfs://root".to_string()),
            ..ContractMetadata::default()
        }),
    );
    contract
        .grant_node_authority(NODE_ONE, controller())
        .unwrap();
    let collection_id = create_collection(&mut contract);
    testing_env!(context(controller()).build());
    let sequence_id = contract
        .configure_sequence(collection_id, seq_config(), None)
        .unwrap();
    testing_env!(context(engine()).build());
    contract
        .mint_record(collector(), collection_id, sequence_id)
        .unwrap();

    let data = contract.get_token_data(collection_id, U64(1)).unwrap().0;
    assert_eq!(
        contract.token_uri(collection_id, U64(1)).unwrap(),
        format!("ipfs://root/{}/{}", collection_id, data)
    );
}

#[test]
fn token_uri_unknown_token_is_none() {
    let (contract, collection_id) = setup_with_token();
    assert!(contract.token_uri(collection_id, U64(2)).is_none());
}

#[test]
fn royalty_defaults_to_zero() {
    let (contract, collection_id) = setup_with_token();

    let info = contract
        .royalty_info(collection_id, U64(1), U128(100))
        .unwrap();
    assert!(info.receiver.is_none());
    assert_eq!(info.amount, U128(0));
}

#[test]
fn royalty_amount_follows_bps() {
    let (mut contract, collection_id) = setup_with_token();
    testing_env!(context(controller()).build());
    contract
        .set_royalty(
            collection_id,
            Some(Royalty {
                receiver: controller(),
                bps: 500,
            }),
        )
        .unwrap();

    let info = contract
        .royalty_info(collection_id, U64(1), U128(10_000))
        .unwrap();
    assert_eq!(info.receiver, Some(controller()));
    assert_eq!(info.amount, U128(500));
}

#[test]
fn royalty_info_unknown_token_is_none() {
    let (contract, collection_id) = setup_with_token();
    assert!(contract.royalty_info(collection_id, U64(9), U128(100)).is_none());
}

#[test]
fn capability_probe_reports_standards() {
    let contract = new_contract();

    assert!(contract.supports_standard("nep171".to_string()));
    assert!(contract.supports_standard("nep199".to_string()));
    assert!(contract.supports_standard("nep297".to_string()));
    assert!(!contract.supports_standard("nep141".to_string()));
}

#[test]
fn balances_default_to_zero() {
    let (contract, collection_id) = setup_with_token();

    assert_eq!(contract.balance_of(collection_id, stranger()), U64(0));
    // Unknown collections read as empty rather than failing.
    assert_eq!(contract.total_supply(77), U64(0));
    assert_eq!(contract.balance_of(77, stranger()), U64(0));
}

#[test]
fn collection_views_for_unknown_id_are_none() {
    let contract = new_contract();

    assert!(contract.collection_name(42).is_none());
    assert!(contract.collection_symbol(42).is_none());
    assert!(contract.collection_owner(42).is_none());
    assert!(contract.control_node(42).is_none());
    assert!(contract.contract_uri(42).is_none());
    assert!(contract.get_collection(42).is_none());
}

#[test]
fn implementation_owner_reads_as_none() {
    let contract = new_contract();
    assert!(contract.collection_owner(IMPLEMENTATION_ID).is_none());
    assert_eq!(
        contract.get_collection(IMPLEMENTATION_ID).unwrap().state,
        InitState::Initialized
    );
}

#[test]
fn contract_metadata_defaults() {
    let contract = new_contract();
    let metadata = contract.get_contract_metadata();
    assert_eq!(metadata.spec, "catalog-1.0.0");
    assert!(metadata.base_uri.is_none());
    assert_eq!(contract.get_version(), &env!("CARGO_PKG_VERSION").to_string());
}
