use crate::*;

#[test]
fn pack_round_trips() {
    let data = pack_token_data(7, 42);
    assert_eq!(sequence_of_token_data(data), 7);
    assert_eq!(ordinal_of_token_data(data), 42);
}

#[test]
fn first_edition_of_first_sequence() {
    let data = pack_token_data(1, 1);
    assert!(data > 0);
    assert_eq!(sequence_of_token_data(data), 1);
    assert_eq!(ordinal_of_token_data(data), 1);
}

#[test]
fn ordinal_boundary_values() {
    let data = pack_token_data(1, MAX_SEQUENCE_ORDINAL);
    assert_eq!(sequence_of_token_data(data), 1);
    assert_eq!(ordinal_of_token_data(data), MAX_SEQUENCE_ORDINAL);
}

#[test]
fn sequence_boundary_values() {
    let data = pack_token_data(u16::MAX, MAX_SEQUENCE_ORDINAL);
    assert_eq!(sequence_of_token_data(data), u16::MAX);
    assert_eq!(ordinal_of_token_data(data), MAX_SEQUENCE_ORDINAL);
}

#[test]
fn fields_do_not_bleed() {
    // A full ordinal must not spill into the sequence bits.
    let data = pack_token_data(0, MAX_SEQUENCE_ORDINAL);
    assert_eq!(sequence_of_token_data(data), 0);

    // And a full sequence leaves the ordinal clean.
    let data = pack_token_data(u16::MAX, 0);
    assert_eq!(ordinal_of_token_data(data), 0);
}
