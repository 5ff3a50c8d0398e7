use crate::*;
use near_sdk::env;
use near_sdk::json_types::U64;

#[near]
impl Contract {
    /// Single-quantity engine mint. Callable only by the account stored as
    /// the sequence's engine.
    #[handle_result]
    pub fn mint_record(
        &mut self,
        receiver_id: AccountId,
        collection_id: CollectionId,
        sequence_id: u16,
    ) -> Result<U64, CollectionError> {
        let caller = env::predecessor_account_id();
        let token_ids =
            self.mint_from_sequence(&caller, &receiver_id, collection_id, sequence_id, 1)?;
        Ok(U64(token_ids[0]))
    }

    /// Batch-quantity form of [`mint_record`](Contract::mint_record).
    #[handle_result]
    pub fn mint_records(
        &mut self,
        receiver_id: AccountId,
        collection_id: CollectionId,
        sequence_id: u16,
        quantity: u32,
    ) -> Result<Vec<U64>, CollectionError> {
        let caller = env::predecessor_account_id();
        let token_ids =
            self.mint_from_sequence(&caller, &receiver_id, collection_id, sequence_id, quantity)?;
        Ok(token_ids.into_iter().map(U64).collect())
    }
}

impl Contract {
    // Counter invariant: `minted`, `total_supply`, token records and balances
    // move together; every failure path exits before the first write.
    pub(crate) fn mint_from_sequence(
        &mut self,
        caller: &AccountId,
        receiver_id: &AccountId,
        collection_id: CollectionId,
        sequence_id: u16,
        quantity: u32,
    ) -> Result<Vec<u64>, CollectionError> {
        if quantity == 0 || quantity > MAX_BATCH_MINT {
            return Err(CollectionError::InvalidInput(format!(
                "Quantity must be 1-{}",
                MAX_BATCH_MINT
            )));
        }

        let mut collection = self.live_collection(collection_id)?;
        let key = sequence_key(collection_id, sequence_id);
        let mut sequence = self
            .sequences
            .get(&key)
            .ok_or_else(CollectionError::sequence_not_found)?
            .clone();

        // Exact engine match; the collection owner gets no special path.
        if caller != &sequence.engine {
            return Err(CollectionError::InvalidMintRequest(format!(
                "Only the sequence engine {} may mint",
                sequence.engine
            )));
        }

        if sequence.is_sealed_at(env::block_timestamp()) {
            return Err(CollectionError::SequenceIsSealed);
        }

        let quantity = u64::from(quantity);
        let minted_after = sequence
            .minted
            .checked_add(quantity)
            .ok_or(CollectionError::SequenceSupplyExhausted)?;
        if minted_after > sequence.max_supply {
            return Err(CollectionError::SequenceSupplyExhausted);
        }

        let mut token_ids = Vec::with_capacity(quantity as usize);
        for i in 0..quantity {
            let token_id = collection.next_token_id;
            collection.next_token_id += 1;
            let ordinal = sequence.minted + i + 1;
            self.tokens.insert(
                token_key(collection_id, token_id),
                TokenRecord {
                    sequence_id,
                    owner_id: receiver_id.clone(),
                    data: pack_token_data(sequence_id, ordinal),
                },
            );
            token_ids.push(token_id);
        }

        sequence.minted = minted_after;
        collection.total_supply += quantity;
        self.credit_balance(collection_id, receiver_id, quantity);
        self.sequences.insert(key, sequence);
        self.collections.insert(collection_id, collection);

        events::emit_records_minted(caller, receiver_id, collection_id, sequence_id, &token_ids);
        Ok(token_ids)
    }

    pub(crate) fn credit_balance(
        &mut self,
        collection_id: CollectionId,
        account: &AccountId,
        amount: u64,
    ) {
        let key = balance_key(collection_id, account);
        let balance = self.balances.get(&key).copied().unwrap_or(0);
        self.balances.insert(key, balance + amount);
    }

    pub(crate) fn debit_balance(
        &mut self,
        collection_id: CollectionId,
        account: &AccountId,
        amount: u64,
    ) {
        let key = balance_key(collection_id, account);
        let balance = self.balances.get(&key).copied().unwrap_or(0);
        self.balances.insert(key, balance.saturating_sub(amount));
    }
}
