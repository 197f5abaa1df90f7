// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Generic scalar helpers over every primitive integer and float.
//!
//! [`Number`] is the minimal numeric surface the helpers need: ordering, the
//! four arithmetic operators, identities, and a lossy bridge through `f64`
//! for operations (like [`pow`]) that only exist on floats. [`Signed`] adds
//! negation and [`Float`] adds the transcendental bits.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Primitive numeric type usable by the helpers in this module.
pub trait Number:
    Copy
    + fmt::Debug
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Widens (or rounds) to `f64`.
    fn to_f64(self) -> f64;

    /// Narrows from `f64`; integer targets truncate toward zero and saturate.
    fn from_f64(value: f64) -> Self;

    /// Euclidean remainder: the result is in `[0, |rhs|)`.
    ///
    /// Integer implementations panic when `rhs` is zero, like the primitive
    /// `rem_euclid`.
    fn rem_euclid(self, rhs: Self) -> Self;
}

/// A [`Number`] with unary negation.
pub trait Signed: Number + Neg<Output = Self> {}

/// IEEE-754 binary floats.
pub trait Float: Signed {
    /// Largest integer value not greater than `self`.
    fn floor(self) -> Self;

    /// Square root (NaN for negative input).
    fn sqrt(self) -> Self;

    /// `self` raised to a float power.
    fn powf(self, exp: Self) -> Self;
}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {$(
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_precision_loss,
            clippy::cast_sign_loss,
            clippy::cast_lossless
        )]
        impl Number for $t {
            const ZERO: Self = 0 as $t;
            const ONE: Self = 1 as $t;

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn rem_euclid(self, rhs: Self) -> Self {
                <$t>::rem_euclid(self, rhs)
            }
        }
    )*};
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Signed for i8 {}
impl Signed for i16 {}
impl Signed for i32 {}
impl Signed for i64 {}
impl Signed for i128 {}
impl Signed for isize {}
impl Signed for f32 {}
impl Signed for f64 {}

impl Float for f32 {
    fn floor(self) -> Self {
        Self::floor(self)
    }

    fn sqrt(self) -> Self {
        Self::sqrt(self)
    }

    fn powf(self, exp: Self) -> Self {
        Self::powf(self, exp)
    }
}

impl Float for f64 {
    fn floor(self) -> Self {
        Self::floor(self)
    }

    fn sqrt(self) -> Self {
        Self::sqrt(self)
    }

    fn powf(self, exp: Self) -> Self {
        Self::powf(self, exp)
    }
}

/// Absolute value.
pub fn abs<T: Signed>(value: T) -> T {
    if value < T::ZERO {
        -value
    } else {
        value
    }
}

/// Wraps `value` into `[0, len)`, handling both negatives and values past
/// `len`. `len` must be positive.
pub fn wrap<T: Number>(value: T, len: T) -> T {
    value.rem_euclid(len)
}

/// Confines `value` to the inclusive `[min, max]` range.
///
/// # Panics
/// Panics when `min > max`.
pub fn clamp<T: Number>(value: T, min: T, max: T) -> T {
    assert!(min <= max, "invalid clamp range: {min:?} > {max:?}");
    if value >= max {
        max
    } else if value <= min {
        min
    } else {
        value
    }
}

/// Returns the value clamped to `[min, max]` and whether it was outside.
pub fn is_outside<T: Number>(value: T, min: T, max: T) -> (T, bool) {
    if value > max {
        (max, true)
    } else if value < min {
        (min, true)
    } else {
        (value, false)
    }
}

/// Lowest of `values`, `None` when empty.
pub fn min_of<T: Number>(values: &[T]) -> Option<T> {
    values
        .iter()
        .copied()
        .reduce(|a, b| if a > b { b } else { a })
}

/// Highest of `values`, `None` when empty.
pub fn max_of<T: Number>(values: &[T]) -> Option<T> {
    values
        .iter()
        .copied()
        .reduce(|a, b| if a < b { b } else { a })
}

/// Sum of `values`; zero when empty.
pub fn sum_of<T: Number>(values: &[T]) -> T {
    values.iter().copied().fold(T::ZERO, |acc, v| acc + v)
}

/// `base` raised to `exp`, computed in `f64`.
pub fn pow<T: Number>(base: T, exp: T) -> T {
    T::from_f64(base.to_f64().powf(exp.to_f64()))
}

/// Sign of `sign_from` with the magnitude of `mag_from`.
pub fn with_sign<T: Signed>(sign_from: T, mag_from: T) -> T {
    if sign_from < T::ZERO {
        -abs(mag_from)
    } else {
        abs(mag_from)
    }
}

/// `-1`, `0` or `1` according to the sign of `value`. NaN passes through.
pub fn sign<T: Signed>(value: T) -> T {
    if value > T::ZERO {
        T::ONE
    } else if value < T::ZERO {
        -T::ONE
    } else {
        value
    }
}

/// Splits `value` into a negative flag and its magnitude.
pub fn sign_bit_and_mag<T: Signed>(value: T) -> (bool, T) {
    if value < T::ZERO {
        (true, -value)
    } else {
        (false, value)
    }
}
