// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use sundry_core::vec2::{rotate_points, scale_points, translate_points};
use sundry_core::{Deg, Rad, Vec2, Vec2I};

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn add_sub_mul_ops_work() {
    let a = Vec2::new(1.0, -2.0);
    let b = Vec2::new(-3.0, 4.0);
    assert_eq!((a + b).to_array(), [-2.0, 2.0]);
    assert_eq!((a - b).to_array(), [4.0, -6.0]);
    assert_eq!((a * 2.0).to_array(), [2.0, -4.0]);
    assert_eq!((2.0 * a).to_array(), [2.0, -4.0]);
    assert_eq!((a / 2.0).to_array(), [0.5, -1.0]);
    assert_eq!((-a).to_array(), [-1.0, 2.0]);
}

#[test]
fn add_assign_sub_assign_mul_assign_work() {
    let mut v = Vec2::new(1.0, 2.0);
    v += Vec2::new(-1.0, 1.0);
    assert_eq!(v.to_array(), [0.0, 3.0]);
    v -= Vec2::new(0.0, 1.0);
    assert_eq!(v.to_array(), [0.0, 2.0]);
    v *= 0.5;
    assert_eq!(v.to_array(), [0.0, 1.0]);
    v /= 0.25;
    assert_eq!(v.to_array(), [0.0, 4.0]);
}

#[test]
fn length_helpers_keep_zero_degenerate() {
    let v = Vec2::new(3.0, 4.0);
    assert_eq!(v.length(), 5.0);
    assert_eq!(v.length_squared(), 25.0);
    assert!(approx(v.normalize(), Vec2::new(0.6, 0.8)));
    assert!(approx(v.with_length(10.0), Vec2::new(6.0, 8.0)));
    assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    assert!(approx(v.clamp_length(1.0), Vec2::new(0.6, 0.8)));
    assert_eq!(v.clamp_length(9.0), v);
}

#[test]
fn move_towards_never_overshoots() {
    let from = Vec2::ZERO;
    let to = Vec2::new(10.0, 0.0);
    assert!(approx(from.move_towards(&to, 3.0), Vec2::new(3.0, 0.0)));
    assert_eq!(from.move_towards(&to, 30.0), to);
    assert_eq!(to.move_towards(&to, 1.0), to);
}

#[test]
fn project_and_reflect() {
    let axis = Vec2::new(2.0, 0.0);
    assert!(approx(axis.project(&Vec2::new(3.0, 5.0)), Vec2::new(3.0, 0.0)));
    let incoming = Vec2::new(1.0, -1.0);
    assert!(approx(incoming.reflect(&Vec2::UNIT_Y), Vec2::new(1.0, 1.0)));
}

#[test]
fn rotation_and_angles() {
    let v = Vec2::UNIT_X;
    assert!(approx(v.rot90(), Vec2::UNIT_Y));
    assert!(approx(v.rotate(Deg(180.0).to_rad()), Vec2::new(-1.0, 0.0)));
    assert!((Vec2::UNIT_Y.angle().to_deg().0 - 90.0).abs() < 1e-9);
    let a = Vec2::new(1.0, 1.0);
    let b = Vec2::new(1.0, 3.0);
    assert!((a.angle_to(&b).0 - Rad(std::f64::consts::FRAC_PI_2).0).abs() < 1e-12);
}

#[test]
fn componentwise_helpers() {
    let v = Vec2::new(-1.5, 2.5);
    assert_eq!(v.abs().to_array(), [1.5, 2.5]);
    assert_eq!(v.sign().to_array(), [-1.0, 1.0]);
    assert_eq!(v.floor().to_array(), [-2.0, 2.0]);
    assert_eq!(v.round().to_array(), [-2.0, 3.0]);
    assert_eq!(v.floor_i(), Vec2I::new(-2, 2));
    assert_eq!(v.round_i(), Vec2I::new(-2, 3));
    assert_eq!(v.swap().to_array(), [2.5, -1.5]);
    assert_eq!(v.min_element(), -1.5);
    assert_eq!(v.max_element(), 2.5);
    assert_eq!(v.sum(), 1.0);
    assert_eq!(v.wrap_scalar(2.0).to_array(), [0.5, 0.5]);
    assert_eq!(
        v.wrap(&Vec2::new(4.0, 2.0)).to_array(),
        [2.5, 0.5]
    );
    assert_eq!(Vec2::new(2.0, 4.0).recip().to_array(), [0.5, 0.25]);
    assert_eq!(v.lerp(&Vec2::new(0.5, 4.5), 0.5).to_array(), [-0.5, 3.5]);
    assert_eq!(Vec2::from(Vec2I::new(3, -4)).to_array(), [3.0, -4.0]);
}

#[test]
fn point_set_transforms() {
    let square = [Vec2::ZERO, Vec2::UNIT_X, Vec2::new(1.0, 1.0)];
    let moved = translate_points(&square, Vec2::new(2.0, -1.0));
    assert_eq!(moved[2].to_array(), [3.0, 0.0]);

    let scaled = scale_points(&square, Vec2::new(2.0, 3.0));
    assert_eq!(scaled[2].to_array(), [2.0, 3.0]);

    let turned = rotate_points(&square, Deg(90.0).to_rad());
    assert!(approx(turned[1], Vec2::UNIT_Y));
    assert!(approx(turned[2], Vec2::new(-1.0, 1.0)));
}
