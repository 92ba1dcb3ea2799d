//! The 32-bit Mersenne Twister (MT19937).
//!
//! This is the engine behind C++'s `std::mt19937` and many storage-engine
//! test baselines. It is not cryptographically secure. It is provided so that
//! node heights can be reproduced bit-for-bit from a 32-bit seed.

use std::fmt;

use rand::{RngCore, SeedableRng};

/// Number of words in the state.
const N: usize = 624;
/// Offset of the word mixed into each twist.
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
/// Multiplier of the seeding recurrence.
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// A 32-bit Mersenne Twister random number generator.
///
/// Seeding with [`Mt19937::new`] matches `std::mt19937(seed)`, so for example
/// the default seed `5489` yields `3_499_211_612` as its first output.
#[derive(Clone)]
pub struct Mt19937 {
    state: Box<[u32; N]>,
    index: usize,
}

impl Mt19937 {
    /// The seed used by `std::mt19937` when none is given.
    pub const DEFAULT_SEED: u32 = 5489;

    /// Create a new generator from a 32-bit seed.
    #[must_use]
    #[inline]
    pub fn new(seed: u32) -> Self {
        let mut state = Box::new([0_u32; N]);
        state[0] = seed;
        for (i, offset) in (1..N).zip(1_u32..) {
            let prev = state[i - 1];
            state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(offset);
        }
        Mt19937 { state, index: N }
    }

    /// Regenerate the whole state block.
    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut next = self.state[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }
}

impl Default for Mt19937 {
    #[inline]
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl RngCore for Mt19937 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        // Tempering.
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Mt19937 {
    /// The seed is a little-endian `u32`.
    type Seed = [u8; 4];

    #[inline]
    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
