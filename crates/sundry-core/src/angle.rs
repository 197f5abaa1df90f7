// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Radian and degree newtypes.

use core::ops::{Add, Neg, Sub};

use crate::float::{DEG_TO_RAD, RAD_TO_DEG};
use crate::vec2::Vec2;

/// Angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rad(pub f64);

/// Angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Deg(pub f64);

/// Converts degrees to radians.
pub fn deg_to_rad(value: f64) -> f64 {
    value * DEG_TO_RAD
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f64) -> f64 {
    value * RAD_TO_DEG
}

impl Rad {
    /// Angle of the point `(x, y)` measured from the positive X axis.
    pub fn atan2(y: f64, x: f64) -> Self {
        Self(y.atan2(x))
    }

    /// Same angle in degrees.
    pub fn to_deg(self) -> Deg {
        Deg(rad_to_deg(self.0))
    }

    /// Sine.
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    /// Cosine.
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    /// Unit direction `(cos, sin)`.
    pub fn to_vec2(self) -> Vec2 {
        let (sin, cos) = self.0.sin_cos();
        Vec2::new(cos, sin)
    }
}

impl Deg {
    /// Same angle in radians.
    pub fn to_rad(self) -> Rad {
        Rad(deg_to_rad(self.0))
    }

    /// Sine.
    pub fn sin(self) -> f64 {
        self.to_rad().sin()
    }

    /// Cosine.
    pub fn cos(self) -> f64 {
        self.to_rad().cos()
    }

    /// Unit direction `(cos, sin)`.
    pub fn to_vec2(self) -> Vec2 {
        self.to_rad().to_vec2()
    }
}

impl From<Deg> for Rad {
    fn from(value: Deg) -> Self {
        value.to_rad()
    }
}

impl From<Rad> for Deg {
    fn from(value: Rad) -> Self {
        value.to_deg()
    }
}

macro_rules! impl_angle_ops {
    ($($t:ident),*) => {$(
        impl Add for $t {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $t {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $t {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }
    )*};
}

impl_angle_ops!(Rad, Deg);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float::PI;

    #[test]
    fn converts_both_ways() {
        assert!((Deg(180.0).to_rad().0 - PI).abs() < 1e-12);
        assert!((Rad(PI / 2.0).to_deg().0 - 90.0).abs() < 1e-12);
        assert!((Rad::from(Deg(-90.0)).0 + PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn quarter_turn_points_up() {
        let v = Deg(90.0).to_vec2();
        assert!(v.x().abs() < 1e-12);
        assert!((v.y() - 1.0).abs() < 1e-12);
        assert!((Rad::atan2(1.0, 0.0).0 - PI / 2.0).abs() < 1e-12);
    }
}
