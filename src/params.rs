//! Curl-P-81 Algorithm Parameters
//!
//! Every constant here is fixed by the hash definition and the IOTA
//! transaction layout; changing any of them produces an incompatible
//! hash function.

/// A balanced-ternary digit, one of -1, 0, 1
pub type Trit = i8;

/// Length of a full transaction in trits
pub const TRANSACTION_LENGTH: usize = 8019;

/// Length of a Curl digest (and of one sponge rate block) in trits
pub const HASH_LENGTH: usize = 243;

/// Width of the sponge state in trits (rate + 2x capacity)
pub const STATE_LENGTH: usize = 3 * HASH_LENGTH;

/// Number of rounds of the sponge permutation
pub const NUMBER_OF_ROUNDS: usize = 81;

/// Number of independent search lanes packed into one 64-bit word pair
pub const LANES: usize = 64;

/// Offset of the nonce segment within the transaction
pub const NONCE_OFFSET: usize = TRANSACTION_LENGTH - HASH_LENGTH;

/// Offset of the searchable counter within the nonce segment; the first
/// 162 trits of the segment are message-derived and never mutated
pub const COUNTER_OFFSET: usize = 2 * HASH_LENGTH / 3;

/// Width of the lane-seeded window at the start of the counter
pub const SEED_TRITS: usize = 4;

/// One third of the 81-trit counter
const COUNTER_THIRD: usize = (HASH_LENGTH - COUNTER_OFFSET) / 3;

/// Counter sub-range a worker pre-advances to claim a disjoint partition
pub(crate) const PARTITION_START: usize = COUNTER_OFFSET + COUNTER_THIRD;
pub(crate) const PARTITION_END: usize = COUNTER_OFFSET + 2 * COUNTER_THIRD;

/// Counter sub-range advanced once per scan iteration
pub(crate) const SCAN_START: usize = PARTITION_END;
pub(crate) const SCAN_END: usize = HASH_LENGTH;
