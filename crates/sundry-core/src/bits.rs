// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Bit masking and rotation on unsigned integers.

/// Bit helpers shared by `u8`, `u16`, `u32` and `u64`.
///
/// Counts of `n >= Self::BITS` select the whole word rather than overflowing
/// the shift.
pub trait UnsignedBits: Copy {
    /// Width of the type in bits.
    const WIDTH: u32;

    /// Keeps only the lowest `n` bits.
    fn lowest_bits(self, n: u32) -> Self;

    /// Zeroes the lowest `n` bits.
    fn clear_lowest_bits(self, n: u32) -> Self;

    /// The highest `n` bits, shifted down to the bottom of the word.
    fn highest_bits(self, n: u32) -> Self;

    /// Rotates left by `n` places (modulo the width).
    fn rotate_bits(self, n: u32) -> Self;
}

macro_rules! impl_unsigned_bits {
    ($($t:ty),* $(,)?) => {$(
        impl UnsignedBits for $t {
            const WIDTH: u32 = <$t>::BITS;

            fn lowest_bits(self, n: u32) -> Self {
                if n >= Self::WIDTH {
                    self
                } else {
                    self & ((1 << n) - 1)
                }
            }

            fn clear_lowest_bits(self, n: u32) -> Self {
                self & !self.lowest_bits(n)
            }

            fn highest_bits(self, n: u32) -> Self {
                match n {
                    0 => 0,
                    n if n >= Self::WIDTH => self,
                    n => self >> (Self::WIDTH - n),
                }
            }

            fn rotate_bits(self, n: u32) -> Self {
                self.rotate_left(n)
            }
        }
    )*};
}

impl_unsigned_bits!(u8, u16, u32, u64);

/// Lowest `n` bits of `value`.
pub fn lowest_bits<T: UnsignedBits>(value: T, n: u32) -> T {
    value.lowest_bits(n)
}

/// `value` with its lowest `n` bits cleared.
pub fn clear_lowest_bits<T: UnsignedBits>(value: T, n: u32) -> T {
    value.clear_lowest_bits(n)
}

/// Highest `n` bits of `value`.
pub fn highest_bits<T: UnsignedBits>(value: T, n: u32) -> T {
    value.highest_bits(n)
}

/// `value` rotated left by `n` places.
pub fn rotate_bits<T: UnsignedBits>(value: T, n: u32) -> T {
    value.rotate_bits(n)
}
