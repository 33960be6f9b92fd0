//! Bit-sliced ternary state for batched Curl transforms
//!
//! A trit is spread across two 64-bit words, one bit position per lane,
//! so a single word-wide operation advances 64 independent candidate
//! hashes at once. The encoding and every operation that depends on it
//! live in this module.

use crate::params::*;

/// Two words jointly encoding one trit per lane.
///
/// Per-lane encoding: `(low=0, high=1)` is 1, `(low=1, high=0)` is -1,
/// `(low=1, high=1)` is 0. `(0, 0)` is invalid and never produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanePair {
    pub low: u64,
    pub high: u64,
}

impl LanePair {
    /// All 64 lanes carrying a zero trit
    pub const ZERO: Self = LanePair {
        low: u64::MAX,
        high: u64::MAX,
    };

    /// Spread a single trit to all 64 lanes
    #[inline(always)]
    pub fn broadcast(trit: Trit) -> Self {
        match trit {
            1 => LanePair {
                low: 0,
                high: u64::MAX,
            },
            -1 => LanePair {
                low: u64::MAX,
                high: 0,
            },
            _ => Self::ZERO,
        }
    }

    /// Extract one lane's trit
    #[inline(always)]
    pub fn trit(self, lane: usize) -> Trit {
        let mask = 1u64 << lane;
        if self.low & mask == 0 {
            1
        } else if self.high & mask == 0 {
            -1
        } else {
            0
        }
    }

    /// Bitmask of lanes whose trit is zero (`low == high` per lane)
    #[inline(always)]
    pub fn zero_lanes(self) -> u64 {
        !(self.low ^ self.high)
    }
}

/// Constant pairs loaded into the first four counter positions so that
/// every lane starts from a distinct digit combination. Opaque and tied
/// to the 64-lane width; reproduced bit-for-bit, never derived.
const LANE_SEEDS: [LanePair; SEED_TRITS] = [
    LanePair {
        low: 0xDB6D_B6DB_6DB6_DB6D,
        high: 0xB6DB_6DB6_DB6D_B6DB,
    },
    LanePair {
        low: 0xF1F8_FC7E_3F1F_8FC7,
        high: 0x8FC7_E3F1_F8FC_7E3F,
    },
    LanePair {
        low: 0x7FFF_E00F_FFFC_01FF,
        high: 0xFFC0_1FFF_F803_FFFF,
    },
    LanePair {
        low: 0xFFC0_0000_07FF_FFFF,
        high: 0x003F_FFFF_FFFF_FFFF,
    },
];

/// Sponge state for 64 candidate digests at once: 729 lane pairs, the
/// first 243 of which are the rate.
#[derive(Clone)]
pub struct SlicedState {
    pairs: [LanePair; STATE_LENGTH],
}

impl SlicedState {
    /// Fresh state, every position a zero trit in every lane
    pub fn new() -> Self {
        SlicedState {
            pairs: [LanePair::ZERO; STATE_LENGTH],
        }
    }

    /// Broadcast-encode one 243-trit block into the rate and run the
    /// permutation, the sponge's absorption step
    pub fn absorb(&mut self, block: &[Trit]) {
        self.write_rate(block);
        self.transform();
    }

    /// Broadcast-encode trits into the leading rate positions without
    /// transforming
    pub fn write_rate(&mut self, trits: &[Trit]) {
        debug_assert!(trits.len() <= HASH_LENGTH);
        for (pair, &trit) in self.pairs.iter_mut().zip(trits) {
            *pair = LanePair::broadcast(trit);
        }
    }

    /// Install the lane-seed constants at the start of the counter
    pub fn seed_counter_lanes(&mut self) {
        self.pairs[COUNTER_OFFSET..COUNTER_OFFSET + SEED_TRITS].copy_from_slice(&LANE_SEEDS);
    }

    #[inline(always)]
    pub fn pair(&self, index: usize) -> LanePair {
        self.pairs[index]
    }

    /// Decode one lane's leading positions into `out`
    pub fn lane_trits(&self, lane: usize, out: &mut [Trit]) {
        debug_assert!(out.len() <= STATE_LENGTH);
        for (trit, pair) in out.iter_mut().zip(&self.pairs) {
            *trit = pair.trit(lane);
        }
    }

    /// Run the 81-round permutation in place, all 64 lanes at once.
    ///
    /// The index step (+364 below 365, -365 from there) is a fixed
    /// cyclic permutation of the 729 positions; 81, 729, 364 and 365
    /// are fixed by the hash definition.
    pub fn transform(&mut self) {
        let mut index = 0;
        for _ in 0..NUMBER_OF_ROUNDS {
            let scratch = self.pairs;
            for pair in self.pairs.iter_mut() {
                let alpha = scratch[index].low;
                let beta = scratch[index].high;
                index = if index < 365 { index + 364 } else { index - 365 };
                let gamma = scratch[index].high;
                let delta = (alpha | !gamma) & (scratch[index].low ^ beta);
                pair.low = !delta;
                pair.high = (alpha ^ gamma) | delta;
            }
        }
    }

    /// Add one, in balanced ternary and lane-synchronously, to the pair
    /// sub-range `[from, to)`, carrying left to right: 1 wraps to -1 and
    /// carries, -1 becomes 0, 0 becomes 1.
    ///
    /// Returns `false` iff the carry ran off the end of the range, i.e.
    /// the whole sub-range wrapped back to its starting value. The range
    /// must not touch the seeded window.
    pub fn increment(&mut self, from: usize, to: usize) -> bool {
        for pair in &mut self.pairs[from..to] {
            if pair.low == 0 {
                pair.low = u64::MAX;
                pair.high = 0;
            } else if pair.high == 0 {
                pair.high = u64::MAX;
                return true;
            } else {
                pair.low = 0;
                return true;
            }
        }
        false
    }
}

impl Default for SlicedState {
    fn default() -> Self {
        Self::new()
    }
}
