// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Float constants, IEEE-754 decomposition, rounding and easing curves.

use crate::bits::UnsignedBits;
use crate::scalar::Float;

/// Euler's number.
pub const E: f64 = core::f64::consts::E;
/// Golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;
/// Archimedes' constant.
pub const PI: f64 = core::f64::consts::PI;
/// Full turn in radians.
pub const TAU: f64 = core::f64::consts::TAU;
/// √2.
pub const SQRT_2: f64 = core::f64::consts::SQRT_2;
/// √e.
pub const SQRT_E: f64 = 1.648_721_270_700_128;
/// √π.
pub const SQRT_PI: f64 = 1.772_453_850_905_516;
/// √φ.
pub const SQRT_PHI: f64 = 1.272_019_649_514_069;
/// ln 2.
pub const LN_2: f64 = core::f64::consts::LN_2;
/// log₂ e.
pub const LOG2_E: f64 = core::f64::consts::LOG2_E;
/// ln 10.
pub const LN_10: f64 = core::f64::consts::LN_10;
/// log₁₀ e.
pub const LOG10_E: f64 = core::f64::consts::LOG10_E;
/// Degrees per radian.
pub const RAD_TO_DEG: f64 = 180.0 / PI;
/// Radians per degree.
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Sign bits in an `f32`.
pub const F32_SIGN_BITS: u32 = 1;
/// Exponent bits in an `f32`.
pub const F32_EXPONENT_BITS: u32 = 8;
/// Fraction (mantissa) bits in an `f32`.
pub const F32_FRACTION_BITS: u32 = 23;
/// Sign bits in an `f64`.
pub const F64_SIGN_BITS: u32 = 1;
/// Exponent bits in an `f64`.
pub const F64_EXPONENT_BITS: u32 = 11;
/// Fraction (mantissa) bits in an `f64`.
pub const F64_FRACTION_BITS: u32 = 52;

/// Raw fields of an `f32`: 1 sign bit, 8 exponent bits, 23 fraction bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct F32Parts {
    /// Set for negative values (including `-0.0`).
    pub sign: bool,
    /// Biased exponent.
    pub exponent: u8,
    /// Fraction bits; only the low 23 are meaningful.
    pub fraction: u32,
}

/// Raw fields of an `f64`: 1 sign bit, 11 exponent bits, 52 fraction bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct F64Parts {
    /// Set for negative values (including `-0.0`).
    pub sign: bool,
    /// Biased exponent; only the low 11 bits are meaningful.
    pub exponent: u16,
    /// Fraction bits; only the low 52 are meaningful.
    pub fraction: u64,
}

/// Splits `value` into sign, exponent and fraction.
#[allow(clippy::cast_possible_truncation)]
pub fn f32_to_parts(value: f32) -> F32Parts {
    let bits = value.to_bits();
    F32Parts {
        sign: bits >> (F32_EXPONENT_BITS + F32_FRACTION_BITS) != 0,
        exponent: (bits >> F32_FRACTION_BITS) as u8,
        fraction: bits.lowest_bits(F32_FRACTION_BITS),
    }
}

/// Splits `value` into sign, exponent and fraction.
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_parts(value: f64) -> F64Parts {
    let bits = value.to_bits();
    F64Parts {
        sign: bits >> (F64_EXPONENT_BITS + F64_FRACTION_BITS) != 0,
        exponent: (bits >> F64_FRACTION_BITS).lowest_bits(F64_EXPONENT_BITS) as u16,
        fraction: bits.lowest_bits(F64_FRACTION_BITS),
    }
}

impl F32Parts {
    /// Reassembles the float; excess fraction bits are dropped.
    pub fn to_f32(self) -> f32 {
        f32::from_bits(
            u32::from(self.sign) << (F32_EXPONENT_BITS + F32_FRACTION_BITS)
                | u32::from(self.exponent) << F32_FRACTION_BITS
                | self.fraction.lowest_bits(F32_FRACTION_BITS),
        )
    }
}

impl F64Parts {
    /// Reassembles the float; excess exponent and fraction bits are dropped.
    pub fn to_f64(self) -> f64 {
        f64::from_bits(
            u64::from(self.sign) << (F64_EXPONENT_BITS + F64_FRACTION_BITS)
                | u64::from(self.exponent.lowest_bits(F64_EXPONENT_BITS)) << F64_FRACTION_BITS
                | self.fraction.lowest_bits(F64_FRACTION_BITS),
        )
    }
}

/// Rounds toward negative infinity.
pub fn floor(value: f64) -> f64 {
    value.floor()
}

/// [`floor`] as an integer, saturating at the `i64` bounds (NaN maps to 0).
#[allow(clippy::cast_possible_truncation)]
pub fn floor_i(value: f64) -> i64 {
    value.floor() as i64
}

/// Rounds to nearest, halves away from zero.
pub fn round(value: f64) -> f64 {
    value.round()
}

/// [`round`] as an integer, saturating at the `i64` bounds (NaN maps to 0).
#[allow(clippy::cast_possible_truncation)]
pub fn round_i(value: f64) -> i64 {
    value.round() as i64
}

/// Linear interpolation from `a` (t = 0) to `b` (t = 1).
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Smoothstep: `3t² - 2t³`.
pub fn fade_cubic<T: Float>(t: T) -> T {
    let two = T::from_f64(2.0);
    let three = T::from_f64(3.0);
    t * t * (three - two * t)
}

/// Perlin's smootherstep: `6t⁵ - 15t⁴ + 10t³`.
pub fn fade_quintic<T: Float>(t: T) -> T {
    let six = T::from_f64(6.0);
    let ten = T::from_f64(10.0);
    let fifteen = T::from_f64(15.0);
    t * t * t * (t * (t * six - fifteen) + ten)
}
