use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- Clone deployment ---

#[test]
fn deploy_a_clone_collection() {
    let mut contract = new_contract();
    testing_env!(context(controller()).build());

    let id = contract
        .create_collection(
            "A".into(),
            "B".into(),
            NODE_ONE,
            controller(),
            "collectionURI".into(),
        )
        .unwrap();

    assert_eq!(contract.collection_name(id), Some("A".to_string()));
    assert_eq!(contract.collection_symbol(id), Some("B".to_string()));
    assert_eq!(contract.collection_owner(id), Some(controller()));
}

#[test]
fn clone_ids_are_sequential_from_one() {
    let mut contract = new_contract();
    let first = create_collection(&mut contract);
    let second = create_collection(&mut contract);

    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[test]
fn clone_stores_contract_uri() {
    let mut contract = new_contract();
    let id = create_collection(&mut contract);

    assert_eq!(contract.contract_uri(id), Some("collectionURI".to_string()));
}

#[test]
fn clone_reads_immutable_bindings() {
    let mut contract = new_contract();
    let id = create_collection(&mut contract);

    assert_eq!(contract.node_registry(), &registry());
    assert_eq!(contract.control_node(id), Some(NODE_ONE));
}

#[test]
fn create_requires_control_node_authority() {
    let mut contract = new_contract();
    testing_env!(context(stranger()).build());

    let err = contract
        .create_collection(
            "A".into(),
            "B".into(),
            NODE_ONE,
            stranger(),
            "collectionURI".into(),
        )
        .unwrap_err();
    assert!(matches!(err, CollectionError::NotAuthorized(_)));
}

#[test]
fn create_rejects_unmanaged_node() {
    let mut contract = new_contract();
    testing_env!(context(controller()).build());

    // Node 2 has no grant for anyone.
    let err = contract
        .create_collection(
            "A".into(),
            "B".into(),
            2,
            controller(),
            "collectionURI".into(),
        )
        .unwrap_err();
    assert!(matches!(err, CollectionError::NotAuthorized(_)));
}

#[test]
fn create_rejects_oversized_name() {
    let mut contract = new_contract();
    testing_env!(context(controller()).build());

    let err = contract
        .create_collection(
            "x".repeat(MAX_NAME_LEN + 1),
            "B".into(),
            NODE_ONE,
            controller(),
            "collectionURI".into(),
        )
        .unwrap_err();
    assert!(matches!(err, CollectionError::InvalidInput(_)));
}

// --- Init latch ---

#[test]
fn init_twice_fails() {
    let mut contract = new_contract();
    let id = create_collection(&mut contract);

    let err = contract
        .init(id, "A".into(), "B".into(), controller(), "".into())
        .unwrap_err();
    assert!(matches!(err, CollectionError::AlreadyInitialized));
    // The failed init mutated nothing.
    assert_eq!(contract.collection_name(id), Some("Test".to_string()));
}

#[test]
fn init_implementation_fails() {
    let mut contract = new_contract();
    let implementation = contract.implementation();
    assert_eq!(implementation, IMPLEMENTATION_ID);

    let err = contract
        .init(
            implementation,
            "A".into(),
            "B".into(),
            controller(),
            "".into(),
        )
        .unwrap_err();
    assert!(matches!(err, CollectionError::AlreadyInitialized));
}

#[test]
fn init_unknown_collection_fails() {
    let mut contract = new_contract();

    let err = contract
        .init(99, "A".into(), "B".into(), controller(), "".into())
        .unwrap_err();
    assert!(matches!(err, CollectionError::NotFound(_)));
}

#[test]
fn implementation_record_serves_no_traffic() {
    let mut contract = new_contract();
    testing_env!(context(controller()).build());

    let err = contract
        .configure_sequence(IMPLEMENTATION_ID, seq_config(), None)
        .unwrap_err();
    assert!(matches!(err, CollectionError::NotFound(_)));

    let err = contract
        .set_owner(IMPLEMENTATION_ID, controller())
        .unwrap_err();
    assert!(matches!(err, CollectionError::NotFound(_)));
}
