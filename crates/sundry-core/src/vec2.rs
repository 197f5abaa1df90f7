// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! 2D vectors and point-set transforms.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::angle::Rad;
use crate::{float, scalar};

/// Lengths at or below this are treated as zero by the length-setting helpers.
pub const EPSILON: f64 = 1e-12;

/// 2D vector of `f64` components.
///
/// * Used both for points and directions; the helpers do not distinguish.
/// * Length-setting helpers ([`Vec2::with_length`], [`Vec2::normalize`])
///   return the zero vector for degenerate input instead of NaN.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec2 {
    data: [f64; 2],
}

/// 2D vector of `i64` components, produced by [`Vec2::floor_i`] and
/// [`Vec2::round_i`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Vec2I {
    data: [i64; 2],
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.data[1]
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f64; 2] {
        self.data
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x()), f(self.y()))
    }

    fn zip(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(f(self.x(), other.x()), f(self.y(), other.y()))
    }

    /// Pairwise product.
    pub fn mul_elem(&self, other: &Self) -> Self {
        self.zip(*other, |a, b| a * b)
    }

    /// Pairwise quotient.
    pub fn div_elem(&self, other: &Self) -> Self {
        self.zip(*other, |a, b| a / b)
    }

    /// Reciprocal of each component.
    pub fn recip(&self) -> Self {
        self.map(f64::recip)
    }

    /// Adds `value` to both components.
    pub fn add_scalar(&self, value: f64) -> Self {
        self.map(|c| c + value)
    }

    /// Subtracts `value` from both components.
    pub fn sub_scalar(&self, value: f64) -> Self {
        self.map(|c| c - value)
    }

    /// Wraps each component into `[0, lens[i])`.
    pub fn wrap(&self, lens: &Self) -> Self {
        self.zip(*lens, scalar::wrap)
    }

    /// Wraps both components into `[0, len)`.
    pub fn wrap_scalar(&self, len: f64) -> Self {
        self.map(|c| scalar::wrap(c, len))
    }

    /// Absolute value of each component.
    pub fn abs(&self) -> Self {
        self.map(f64::abs)
    }

    /// Sign (`-1`, `0`, `1`) of each component.
    pub fn sign(&self) -> Self {
        self.map(scalar::sign)
    }

    /// Componentwise floor.
    pub fn floor(&self) -> Self {
        self.map(float::floor)
    }

    /// Componentwise round (halves away from zero).
    pub fn round(&self) -> Self {
        self.map(float::round)
    }

    /// Componentwise floor into integers.
    pub fn floor_i(&self) -> Vec2I {
        Vec2I::new(float::floor_i(self.x()), float::floor_i(self.y()))
    }

    /// Componentwise round into integers.
    pub fn round_i(&self) -> Vec2I {
        Vec2I::new(float::round_i(self.x()), float::round_i(self.y()))
    }

    /// Smaller component.
    pub fn min_element(&self) -> f64 {
        self.x().min(self.y())
    }

    /// Larger component.
    pub fn max_element(&self) -> f64 {
        self.x().max(self.y())
    }

    /// Sum of components.
    pub fn sum(&self) -> f64 {
        self.x() + self.y()
    }

    /// Swaps X and Y.
    pub fn swap(&self) -> Self {
        Self::new(self.y(), self.x())
    }

    /// Linear interpolation toward `other`.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        (*other - *self) * t + *self
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.mul_elem(other).sum()
    }

    /// Squared magnitude.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Magnitude.
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Same direction with magnitude `length`; degenerate input stays zero.
    pub fn with_length(&self, length: f64) -> Self {
        let current = self.length();
        if current <= EPSILON {
            return Self::ZERO;
        }
        *self * (length / current)
    }

    /// Unit vector in the same direction; degenerate input stays zero.
    pub fn normalize(&self) -> Self {
        self.with_length(1.0)
    }

    /// Caps the magnitude at `max`.
    pub fn clamp_length(&self, max: f64) -> Self {
        if self.length() > max {
            self.with_length(max)
        } else {
            *self
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).length()
    }

    /// Steps toward `target` by at most `delta`, never overshooting.
    pub fn move_towards(&self, target: &Self, delta: f64) -> Self {
        let step = delta.min(self.distance(target));
        (*target - *self).with_length(step) + *self
    }

    /// Component of `other` along `self`.
    pub fn project(&self, other: &Self) -> Self {
        let len_sq = self.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::ZERO;
        }
        *self * (self.dot(other) / len_sq)
    }

    /// Mirrors `self` across the line with unit normal `normal`.
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * (2.0 * self.dot(normal))
    }

    /// Rotates a quarter turn counter-clockwise.
    pub fn rot90(&self) -> Self {
        Self::new(-self.y(), self.x())
    }

    /// Rotates counter-clockwise by `angle`.
    pub fn rotate(&self, angle: Rad) -> Self {
        let basis_x = angle.to_vec2();
        let basis_y = basis_x.rot90();
        basis_x * self.x() + basis_y * self.y()
    }

    /// Direction angle measured from +X.
    pub fn angle(&self) -> Rad {
        Rad::atan2(self.y(), self.x())
    }

    /// Angle of the direction from `self` to `other`.
    pub fn angle_to(&self, other: &Self) -> Rad {
        (*other - *self).angle()
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Self { data: value }
    }
}

impl From<Vec2I> for Vec2 {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: Vec2I) -> Self {
        Self::new(value.x() as f64, value.y() as f64)
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.map(|c| c * rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        self.map(|c| c / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Vec2 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl Vec2I {
    /// Creates a vector from components.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub fn x(&self) -> i64 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> i64 {
        self.data[1]
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [i64; 2] {
        self.data
    }
}

impl From<[i64; 2]> for Vec2I {
    fn from(value: [i64; 2]) -> Self {
        Self { data: value }
    }
}

impl Add for Vec2I {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl Sub for Vec2I {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

/// Offsets every point by `amount`.
pub fn translate_points(points: &[Vec2], amount: Vec2) -> Vec<Vec2> {
    points.iter().map(|p| *p + amount).collect()
}

/// Rotates every point about the origin by `angle`.
pub fn rotate_points(points: &[Vec2], angle: Rad) -> Vec<Vec2> {
    let basis_x = angle.to_vec2();
    let basis_y = basis_x.rot90();
    points
        .iter()
        .map(|p| basis_x * p.x() + basis_y * p.y())
        .collect()
}

/// Scales every point componentwise by `amount`.
pub fn scale_points(points: &[Vec2], amount: Vec2) -> Vec<Vec2> {
    points.iter().map(|p| p.mul_elem(&amount)).collect()
}
