// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Lie group functions for 3D rotations, stored as unit quaternions.
//!
//! The tangent space is the axis-angle vector of so3.
//! All the maps below take a small positive `epsilon` regularizing
//! the removable singularities at zero angle and at antipodal quaternions,
//! instead of branching on Taylor series.
//! Unit norm of input quaternions is a precondition, it is never checked.
//!
//! Interesting reads:
//! - Sophus c++ library: <https://github.com/strasdat/Sophus>
//! - Ethan Eade course on Lie Groups for 2D and 3D transformations:
//!     - details: <http://ethaneade.com/lie.pdf>
//!     - summary: <http://ethaneade.com/lie_groups.pdf>

use nalgebra::{self as na, Quaternion};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::misc::type_aliases::{Float, Mat3, Rot3, Vec3};

/// Hat operator.
/// Goes from so3 parameterization to so3 element (skew-symmetric matrix).
#[rustfmt::skip]
pub fn hat<T: Float>(w: &Vec3<T>) -> Mat3<T> {
    let zero = T::zero();
    Mat3::new(
         zero,  -w.z,   w.y,
         w.z,   zero,  -w.x,
        -w.y,   w.x,   zero,
    )
}

/// The identity rotation.
#[inline]
pub fn identity<T: Float>() -> Rot3<T> {
    Rot3::identity()
}

/// Inverse rotation (quaternion conjugate).
#[inline]
pub fn inverse<T: Float>(r: &Rot3<T>) -> Rot3<T> {
    r.conjugate()
}

/// Quaternion product `a * b`, without renormalization.
#[inline]
pub fn compose<T: Float>(a: &Rot3<T>, b: &Rot3<T>) -> Rot3<T> {
    Rot3::new_unchecked(a.quaternion() * b.quaternion())
}

/// Relative rotation `a^-1 * b`.
#[inline]
pub fn between<T: Float>(a: &Rot3<T>, b: &Rot3<T>) -> Rot3<T> {
    Rot3::new_unchecked(a.quaternion().conjugate() * b.quaternion())
}

/// Apply the rotation to a vector.
#[inline]
pub fn rotate<T: Float>(r: &Rot3<T>, v: &Vec3<T>) -> Vec3<T> {
    r * v
}

/// Exponential map from so3 to SO3.
///
/// The angle is computed as `sqrt(|t|^2 + epsilon^2)`, which keeps
/// `sin(angle / 2) / angle` smooth at `t = 0` at the cost of an `O(epsilon^2)` bias.
pub fn from_tangent<T: Float>(t: &Vec3<T>, epsilon: T) -> Rot3<T> {
    let angle = (t.norm_squared() + epsilon * epsilon).sqrt();
    let (sin_half, cos_half) = (angle * na::convert::<f64, T>(0.5)).sin_cos();
    Rot3::new_unchecked(Quaternion::from_parts(cos_half, t * (sin_half / angle)))
}

/// Logarithm map from SO3 to so3.
///
/// The tangent representative is the one of the shorter rotation,
/// so `r` and `-r` map to the same vector.
pub fn to_tangent<T: Float>(r: &Rot3<T>, epsilon: T) -> Vec3<T> {
    r.vector() * log_factor(r.scalar(), epsilon)
}

/// Scale to apply to the imaginary part of a quaternion with real part `w`
/// to obtain its axis-angle vector.
#[inline]
fn log_factor<T: Float>(w: T, epsilon: T) -> T {
    let one = T::one();
    // Clamped away from 1 so that acos and the division stay finite.
    let s = w.abs().min(one - epsilon);
    let two = na::convert::<f64, T>(2.0);
    two * one.copysign(w) * s.acos() / ((one - s) * (one + s)).sqrt()
}

/// Apply a tangent increment on the right: `r * exp(t)`.
pub fn retract<T: Float>(r: &Rot3<T>, t: &Vec3<T>, epsilon: T) -> Rot3<T> {
    compose(r, &from_tangent(t, epsilon))
}

/// Tangent vector `t` such that `retract(a, t) == b`, up to the quaternion sign.
///
/// Equal to `to_tangent(a^-1 * b)`.
pub fn local_coordinates<T: Float>(a: &Rot3<T>, b: &Rot3<T>, epsilon: T) -> Vec3<T> {
    to_tangent(&between(a, b), epsilon)
}

/// Geodesic interpolation between `a` (alpha = 0) and `b` (alpha = 1),
/// at constant angular velocity.
pub fn interpolate<T: Float>(a: &Rot3<T>, b: &Rot3<T>, alpha: T, epsilon: T) -> Rot3<T> {
    let rel = between(a, b);
    let step = rel.vector() * (alpha * log_factor(rel.scalar(), epsilon));
    retract(a, &step, epsilon)
}

/// Uniformly distributed random rotation (Shoemake's method).
pub fn random<T, R>(rng: &mut R) -> Rot3<T>
where
    T: Float,
    R: Rng,
    Standard: Distribution<T>,
{
    let u1: T = rng.gen();
    let u2: T = rng.gen();
    let u3: T = rng.gen();
    let (sin_2, cos_2) = (T::two_pi() * u2).sin_cos();
    let (sin_3, cos_3) = (T::two_pi() * u3).sin_cos();
    let a = (T::one() - u1).sqrt();
    let b = u1.sqrt();
    Rot3::new_unchecked(Quaternion::new(b * cos_3, a * sin_2, a * cos_2, b * sin_3))
}

// TESTS #############################################################
