use super::builder::Nep171Event;

const VERSION: &str = "1.2.0";

/// Standard issuance observation: ownership appears from nowhere, so only the
/// new owner and token ids are carried.
pub fn emit_mint(owner_id: &str, token_ids: &[String], memo: Option<&str>) {
    Nep171Event::new("nft_mint", VERSION)
        .field("owner_id", owner_id)
        .field("token_ids", token_ids)
        .field_opt("memo", memo)
        .emit();
}

pub fn emit_transfer(
    old_owner_id: &str,
    new_owner_id: &str,
    token_ids: &[&str],
    authorized_id: Option<&str>,
    memo: Option<&str>,
) {
    Nep171Event::new("nft_transfer", VERSION)
        .field("old_owner_id", old_owner_id)
        .field(
            "token_ids",
            token_ids
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<String>>(),
        )
        .field("new_owner_id", new_owner_id)
        .field_opt("authorized_id", authorized_id)
        .field_opt("memo", memo)
        .emit();
}
