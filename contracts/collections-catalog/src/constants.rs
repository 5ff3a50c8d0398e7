use near_sdk::NearToken;

use crate::CollectionId;

/// The shared implementation record: latched at contract init, never mintable.
pub const IMPLEMENTATION_ID: CollectionId = 0;

pub const MAX_NAME_LEN: usize = 64;
pub const MAX_SYMBOL_LEN: usize = 16;
pub const MAX_URI_LEN: usize = 2_048;

pub const MAX_BATCH_MINT: u32 = 10;

pub const BASIS_POINTS: u16 = 10_000; // 100%
pub const MAX_ROYALTY_BPS: u16 = 5_000; // 50%

/// Token `data` packs the sequence id into the top 16 bits and the
/// per-sequence ordinal into the low 48.
pub const ORDINAL_BITS: u32 = 48;
pub const MAX_SEQUENCE_ORDINAL: u64 = (1 << ORDINAL_BITS) - 1;

// Composite key invariant: delimiter cannot appear in numeric ids or NEAR
// account IDs, preventing key collisions across collections.
pub const DELIMITER: &str = ":";
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
