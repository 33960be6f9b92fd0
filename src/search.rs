//! Nonce search over the bit-sliced state
//!
//! The coordinator absorbs the fixed message prefix once, seeds the
//! counter lanes, and hands each worker a private clone offset into a
//! disjoint slice of the counter space. Workers race; the first
//! qualifying lane wins and stops the others.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use thiserror::Error;

use crate::bitslice::SlicedState;
use crate::params::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The transaction buffer was not exactly 8019 trits long
    #[error("invalid transaction trits length: {0}")]
    InvalidTransactionLength(usize),

    /// The difficulty target was outside `0..=243`
    #[error("invalid min weight magnitude: {0}")]
    InvalidMinWeightMagnitude(usize),

    /// Every worker wrapped its counter partition without a match
    #[error("search space exhausted without a qualifying nonce")]
    ExhaustedSearchSpace,

    /// A worker died mid-search; its partition may have held the nonce
    #[error("a search worker panicked")]
    WorkerPanicked,
}

/// Proof-of-work nonce searcher.
///
/// Finds a value for the final 243-trit segment of an 8019-trit
/// transaction such that its Curl digest ends in at least
/// `min_weight_magnitude` zero trits, testing 64 candidates per
/// transform via bit-slicing.
///
/// # Example
///
/// ```rust
/// use pearldiver::{Curl, PearlDiver, Sponge, HASH_LENGTH, TRANSACTION_LENGTH};
///
/// let mut trits = vec![0i8; TRANSACTION_LENGTH];
/// PearlDiver::with_workers(1).search(&mut trits, 3).unwrap();
///
/// // Re-hash through the scalar sponge to verify independently.
/// let mut curl = Curl::default();
/// let mut digest = [0i8; HASH_LENGTH];
/// curl.absorb(&trits);
/// curl.squeeze(&mut digest);
/// assert!(digest[HASH_LENGTH - 3..].iter().all(|&t| t == 0));
/// ```
pub struct PearlDiver {
    workers: usize,
}

impl PearlDiver {
    /// Create a searcher using all available parallelism
    pub fn new() -> Self {
        PearlDiver {
            workers: num_cpus::get().max(1),
        }
    }

    /// Create a searcher with an explicit worker count; `0` selects all
    /// available parallelism
    pub fn with_workers(workers: usize) -> Self {
        if workers == 0 {
            Self::new()
        } else {
            PearlDiver { workers }
        }
    }

    /// Overwrite the final 243 trits of `trits` with a nonce whose
    /// digest ends in at least `min_weight_magnitude` zero trits.
    ///
    /// Validation failures are reported before any work starts and
    /// leave the buffer untouched, as does every other error.
    pub fn search(
        &self,
        trits: &mut [Trit],
        min_weight_magnitude: usize,
    ) -> Result<(), SearchError> {
        if trits.len() != TRANSACTION_LENGTH {
            return Err(SearchError::InvalidTransactionLength(trits.len()));
        }
        if min_weight_magnitude > HASH_LENGTH {
            return Err(SearchError::InvalidMinWeightMagnitude(min_weight_magnitude));
        }

        let (message, nonce_segment) = trits.split_at(NONCE_OFFSET);

        // Absorb the fixed prefix once; all lanes start identical.
        let mut mid = SlicedState::new();
        for block in message.chunks_exact(HASH_LENGTH) {
            mid.absorb(block);
        }

        // The final block sits in the rate while its counter is varied:
        // message head, then the lane seeds, then counter space.
        mid.write_rate(&nonce_segment[..COUNTER_OFFSET]);
        mid.seed_counter_lanes();

        let found = AtomicBool::new(false);
        let nonce = if self.workers == 1 {
            scan(mid, min_weight_magnitude, &found)
        } else {
            self.run_workers(&mid, min_weight_magnitude, &found)?
        };

        match nonce {
            Some(nonce) => {
                trits[NONCE_OFFSET..].copy_from_slice(&nonce);
                Ok(())
            }
            None => Err(SearchError::ExhaustedSearchSpace),
        }
    }

    fn run_workers(
        &self,
        mid: &SlicedState,
        min_weight_magnitude: usize,
        found: &AtomicBool,
    ) -> Result<Option<[Trit; HASH_LENGTH]>, SearchError> {
        thread::scope(|scope| {
            let handles: Vec<_> = (0..self.workers)
                .map(|k| {
                    // Pre-advancing a middle-third digit k times gives
                    // worker k a disjoint slice of the counter space.
                    let mut state = mid.clone();
                    for _ in 0..k {
                        state.increment(PARTITION_START, PARTITION_END);
                    }
                    scope.spawn(move || scan(state, min_weight_magnitude, found))
                })
                .collect();

            let mut winner = None;
            let mut panicked = false;
            for handle in handles {
                match handle.join() {
                    Ok(Some(nonce)) => winner = winner.or(Some(nonce)),
                    Ok(None) => {}
                    Err(_) => panicked = true,
                }
            }

            // A dead worker's partition may have held the only nonce in
            // reach; fail the whole search rather than mask it.
            if panicked {
                Err(SearchError::WorkerPanicked)
            } else {
                Ok(winner)
            }
        })
    }
}

impl Default for PearlDiver {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan loop for one worker: increment, transform a working copy, test
/// all 64 lanes against the difficulty target.
///
/// Returns `None` when cancelled, beaten to the flag, or out of counter
/// space.
fn scan(
    mut mid: SlicedState,
    min_weight_magnitude: usize,
    found: &AtomicBool,
) -> Option<[Trit; HASH_LENGTH]> {
    while !found.load(Ordering::Relaxed) {
        if !mid.increment(SCAN_START, SCAN_END) {
            return None;
        }

        let mut work = mid.clone();
        work.transform();

        // A set bit survives only for lanes whose digest is zero at
        // every required trailing position.
        let mut mask = u64::MAX;
        for i in (0..min_weight_magnitude).rev() {
            mask &= work.pair(HASH_LENGTH - 1 - i).zero_lanes();
            if mask == 0 {
                break;
            }
        }
        if mask == 0 {
            continue;
        }

        if found
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::Relaxed)
            .is_ok()
        {
            // The winning nonce is read from the pre-transform state,
            // where the counter still sits in the rate.
            let lane = mask.trailing_zeros() as usize;
            let mut nonce = [0; HASH_LENGTH];
            mid.lane_trits(lane, &mut nonce);
            return Some(nonce);
        }

        // A sibling won the exchange in the same instant.
        return None;
    }

    None
}

/// Search with all available parallelism.
///
/// Convenience wrapper over [`PearlDiver::search`].
pub fn search(trits: &mut [Trit], min_weight_magnitude: usize) -> Result<(), SearchError> {
    PearlDiver::new().search(trits, min_weight_magnitude)
}

/// Check whether a digest ends in at least `min_weight_magnitude` zero
/// trits.
///
/// # Example
///
/// ```rust
/// use pearldiver::meets_min_weight;
///
/// let digest = [1, -1, 1, 0, 0, 0];
/// assert!(meets_min_weight(&digest, 3));
/// assert!(!meets_min_weight(&digest, 4));
/// ```
#[inline(always)]
pub fn meets_min_weight(digest: &[Trit], min_weight_magnitude: usize) -> bool {
    digest.len() >= min_weight_magnitude
        && digest
            .iter()
            .rev()
            .take(min_weight_magnitude)
            .all(|&t| t == 0)
}
