// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Small, seedable pseudo-random generators.
//!
//! Neither generator is cryptographically secure. Both are deterministic for a
//! given seed, so matching seeds yield identical sequences on every platform.

use crate::time::Nanos;

/// Uniform bit source plus the derived sampling helpers.
///
/// Implementors provide [`RandomSource::next_u32`]; generators with a wider
/// native output should also override [`RandomSource::next_u64`].
pub trait RandomSource {
    /// Next 32 uniformly distributed bits.
    fn next_u32(&mut self) -> u32;

    /// Next 64 uniformly distributed bits (two draws by default, high word
    /// first).
    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_u32());
        let lo = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    /// Uniform integer in `[0, n)`.
    ///
    /// Uses rejection sampling to avoid modulo bias.
    ///
    /// # Panics
    /// Panics when `n == 0`.
    fn below(&mut self, n: u32) -> u32 {
        assert!(n > 0, "empty range: below(0)");
        if n.is_power_of_two() {
            return self.next_u32() & (n - 1);
        }
        let bound = u32::MAX - u32::MAX % n;
        loop {
            let candidate = self.next_u32();
            if candidate < bound {
                break candidate % n;
            }
        }
    }

    /// Uniform integer in the inclusive range `[min, max]`.
    ///
    /// Uses rejection sampling over 64-bit draws, ensuring every value in the
    /// range is produced with equal probability.
    ///
    /// # Panics
    /// Panics when `min > max`.
    #[allow(
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation
    )]
    fn int_in(&mut self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "invalid range: {min}..={max}");
        let span = (i64::from(max) - i64::from(min)) as u64 + 1;
        if span == 1 {
            return min;
        }

        let value = if span.is_power_of_two() {
            self.next_u64() & (span - 1)
        } else {
            let bound = u64::MAX - u64::MAX % span;
            loop {
                let candidate = self.next_u64();
                if candidate < bound {
                    break candidate % span;
                }
            }
        };

        (value as i64 + i64::from(min)) as i32
    }

    /// Uniform `f32` in `[0, 1)`.
    ///
    /// Fills the mantissa from the top 23 bits of a draw, so the result can
    /// never round up to `1.0`.
    fn unit_f32(&mut self) -> f32 {
        let bits = (self.next_u32() >> 9) | 0x3f80_0000;
        f32::from_bits(bits) - 1.0
    }

    /// Uniform `f64` in `[0, 1)` with 32-bit resolution.
    fn unit_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// PCG32 "fast" variant: a 64-bit multiplicative congruential state with an
/// xorshift/random-shift output permutation.
///
/// Cheapest generator here; the low state bits have short periods so only
/// the permuted high bits are ever returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pcg32Fast {
    state: u64,
}

impl Pcg32Fast {
    const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

    /// Constructs a generator from `seed`.
    ///
    /// The MCG state must be odd, so the seed is mapped to `seed * 2 + 1`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_mul(2).wrapping_add(1),
        }
    }

    /// Seeds from the wall clock (nanoseconds since the Unix epoch).
    #[allow(clippy::cast_sign_loss)]
    pub fn from_time() -> Self {
        Self::from_seed(Nanos::now().0 as u64)
    }
}

impl RandomSource for Pcg32Fast {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        let x = self.state;
        let shift = (x >> 61) as u32;
        self.state = x.wrapping_mul(Self::MULTIPLIER);
        ((x ^ (x >> 22)) >> (22 + shift)) as u32
    }
}

/// Stateful `xoroshiro128+` generator.
///
/// * Not cryptographically secure; use only for simulation and tests.
/// * Seeding controls reproducibility within a single process/run and matching
///   seeds yield identical sequences across supported platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xoroshiro128Plus {
    state: [u64; 2],
}

impl Xoroshiro128Plus {
    // All-zero is a fixed point of the transition; remap it.
    const ZERO_STATE_SUBSTITUTE: u64 = 0x9e37_79b9_7f4a_7c15;

    /// Constructs a generator from two 64-bit seeds.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        Self::from_state([seed0, seed1])
    }

    /// Constructs a generator from a single 64-bit seed via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        Self::from_state([splitmix64(&mut sm_state), splitmix64(&mut sm_state)])
    }

    fn from_state(mut state: [u64; 2]) -> Self {
        if state == [0, 0] {
            state[0] = Self::ZERO_STATE_SUBSTITUTE;
        }
        Self { state }
    }
}

impl RandomSource for Xoroshiro128Plus {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_in_returns_single_value_for_equal_bounds() {
        let mut prng = Xoroshiro128Plus::from_seed(42, 99);
        assert_eq!(prng.int_in(7, 7), 7);
    }

    #[test]
    fn int_in_handles_full_i32_range() {
        let mut prng = Xoroshiro128Plus::from_seed(0xDEADBEEF, 0xFACEFEED);
        let values: Vec<i32> = (0..3).map(|_| prng.int_in(i32::MIN, i32::MAX)).collect();
        assert_eq!(values, vec![1501347292, 1946982111, -117316573]);
    }

    #[test]
    fn int_in_handles_negative_ranges() {
        let mut prng = Xoroshiro128Plus::from_seed(123, 456);
        let values: Vec<i32> = (0..3).map(|_| prng.int_in(-10, -3)).collect();
        assert_eq!(values, vec![-7, -7, -7]);
    }

    #[test]
    fn zero_seed_does_not_stall() {
        let mut prng = Xoroshiro128Plus::from_seed(0, 0);
        assert_ne!(prng.next_u64(), prng.next_u64());
    }

    #[test]
    fn pcg_state_advances() {
        let mut prng = Pcg32Fast::from_seed(1);
        let a = prng.next_u32();
        let b = prng.next_u32();
        let c = prng.next_u32();
        assert!(a != b || b != c);
    }

    #[test]
    fn pcg_matches_for_equal_seeds() {
        let mut a = Pcg32Fast::from_seed(0x5EED);
        let mut b = Pcg32Fast::from_seed(0x5EED);
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn clock_seeded_pcg_produces_values() {
        let mut prng = Pcg32Fast::from_time();
        let draws: Vec<u32> = (0..8).map(|_| prng.next_u32()).collect();
        assert!(draws.windows(2).any(|w| w[0] != w[1]));
        assert!(prng.below(10) < 10);
    }

    #[test]
    fn below_stays_in_range() {
        let mut prng = Pcg32Fast::from_seed(7);
        for n in [1, 2, 3, 10, 1000] {
            for _ in 0..64 {
                assert!(prng.below(n) < n);
            }
        }
    }

    #[test]
    fn unit_floats_stay_below_one() {
        let mut prng = Xoroshiro128Plus::from_seed_u64(99);
        for _ in 0..256 {
            let f = prng.unit_f32();
            assert!((0.0..1.0).contains(&f));
            let d = prng.unit_f64();
            assert!((0.0..1.0).contains(&d));
        }
    }
}
