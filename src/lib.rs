//! # PearlDiver
//!
//! Proof-of-work nonce search for the IOTA transaction format: given a
//! nearly-complete 8019-trit transaction, find a final 243-trit segment
//! whose Curl digest ends in at least `min_weight_magnitude` zero
//! trits.
//!
//! ## Features
//!
//! - **Bit-Sliced Search**: one `u64` word pair carries 64 independent
//!   candidate lanes, so every 81-round transform tests 64 nonces
//! - **Disjoint Partitioning**: each worker pre-advances a middle
//!   counter digit to claim its own slice of the 81-trit counter space
//! - **First-Wins Cancellation**: a single shared flag, written once by
//!   the winning worker and polled by the rest
//! - **Independent Verification**: a scalar [`Curl`] sponge for
//!   re-hashing completed transactions
//!
//! ## Algorithm Parameters
//!
//! - 729-trit sponge state, 243-trit rate
//! - 81 permutation rounds
//! - 64 search lanes seeded from four fixed constant pairs
//!
//! ## Example
//!
//! ```rust
//! use pearldiver::{meets_min_weight, Curl, PearlDiver, Sponge};
//! use pearldiver::{HASH_LENGTH, TRANSACTION_LENGTH};
//!
//! let mut trits = vec![0i8; TRANSACTION_LENGTH];
//! PearlDiver::with_workers(1).search(&mut trits, 3).unwrap();
//!
//! let mut curl = Curl::default();
//! let mut digest = [0i8; HASH_LENGTH];
//! curl.absorb(&trits);
//! curl.squeeze(&mut digest);
//! assert!(meets_min_weight(&digest, 3));
//! ```

mod bitslice;
mod curl;
mod params;
mod search;

pub use bitslice::{LanePair, SlicedState};
pub use curl::{Curl, Sponge};
pub use params::*;
pub use search::{meets_min_weight, search, PearlDiver, SearchError};
