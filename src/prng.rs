//! Mulberry32: a tiny deterministic PRNG for seeded sampling.
//!
//! The whole generator state is one `u32`. Each step adds a fixed odd
//! increment (a Weyl sequence) and scrambles the result with shift/xor/multiply
//! rounds:
//!
//! ```text
//! s = s + 0x6D2B79F5
//! t = (s ^ (s >> 15)) * (s | 1)
//! t = t ^ (t + (t ^ (t >> 7)) * (t | 1))
//! out = t ^ (t >> 14)
//! ```
//!
//! All arithmetic is modulo 2^32, so output is identical on every platform.
//! Every seeded result in this crate depends on this exact sequence; changing
//! any constant changes all of them.
//!
//! Notes:
//! - Not suitable for anything security-sensitive.
//! - Implements [`RngCore`] and [`SeedableRng`], so it works anywhere a `rand` RNG does.

use rand_core::{impls, RngCore, SeedableRng};

const INCREMENT: u32 = 0x6D2B79F5;

/// 2^32 as `f64`; dividing a `u32` by it maps onto `[0, 1)`.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mulberry32 generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    #[inline]
    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 1));
        t ^ (t >> 14)
    }

    /// Next value uniformly distributed in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.step()) / TWO_POW_32
    }
}

impl RngCore for Mulberry32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Reduces `state` modulo 2^32 instead of expanding it, so
    /// `seed_from_u64(s)` and `new(s as u32)` produce the same stream.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}
