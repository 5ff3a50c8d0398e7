use crate::guards::check_one_yocto;
use crate::*;
use near_sdk::env;
use near_sdk::json_types::U64;

#[near]
impl Contract {
    /// Owner-to-owner transfer. Requires 1 yoctoNEAR as a full-access-key
    /// confirmation, matching NEP-171 conventions.
    #[payable]
    #[handle_result]
    pub fn transfer_record(
        &mut self,
        collection_id: CollectionId,
        token_id: U64,
        receiver_id: AccountId,
        memo: Option<String>,
    ) -> Result<(), CollectionError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        let key = token_key(collection_id, token_id.0);
        let mut record = self
            .tokens
            .get(&key)
            .ok_or_else(CollectionError::token_not_found)?
            .clone();

        if record.owner_id != sender_id {
            return Err(CollectionError::NotAuthorized(
                "Only the token owner can transfer".into(),
            ));
        }
        if record.owner_id == receiver_id {
            return Err(CollectionError::InvalidInput(
                "Receiver must differ from current owner".into(),
            ));
        }

        record.owner_id = receiver_id.clone();
        self.tokens.insert(key.clone(), record);
        self.debit_balance(collection_id, &sender_id, 1);
        self.credit_balance(collection_id, &receiver_id, 1);

        events::nep171::emit_transfer(
            sender_id.as_str(),
            receiver_id.as_str(),
            &[key.as_str()],
            None,
            memo.as_deref(),
        );
        Ok(())
    }
}
