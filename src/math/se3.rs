// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Lie group functions for 3D rigid body motion.
//!
//! A pose is a unit quaternion and a translation.
//! Its tangent is `[rotation (3), translation (3)]`, where the translation
//! part is decoupled from the rotation: it is simply added to the pose translation.
//! This is not the se3 exponential map of Sophus, it is cheaper
//! and behaves the same for the small increments of an optimizer.

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::math::so3;
use crate::misc::type_aliases::{Float, Pose3, Rot3, Vec3, Vec6};

/// Retrieve the rotation part of the tangent parameterization.
#[inline]
pub fn rotation_part<T: Float>(t: &Vec6<T>) -> Vec3<T> {
    t.fixed_rows::<3>(0).into_owned()
}

/// Retrieve the translation part of the tangent parameterization.
#[inline]
pub fn translation_part<T: Float>(t: &Vec6<T>) -> Vec3<T> {
    t.fixed_rows::<3>(3).into_owned()
}

/// Build a tangent vector from its rotation and translation parts.
#[inline]
pub fn tangent<T: Float>(rotation: &Vec3<T>, translation: &Vec3<T>) -> Vec6<T> {
    Vec6::new(
        rotation.x,
        rotation.y,
        rotation.z,
        translation.x,
        translation.y,
        translation.z,
    )
}

#[inline]
fn from_parts<T: Float>(rotation: Rot3<T>, translation: Vec3<T>) -> Pose3<T> {
    Pose3::from_parts(translation.into(), rotation)
}

/// The identity pose.
#[inline]
pub fn identity<T: Float>() -> Pose3<T> {
    Pose3::identity()
}

/// Inverse pose `(q^-1, -(q^-1 t))`.
pub fn inverse<T: Float>(p: &Pose3<T>) -> Pose3<T> {
    let rotation = so3::inverse(&p.rotation);
    let translation = -so3::rotate(&rotation, &p.translation.vector);
    from_parts(rotation, translation)
}

/// Group composition `a * b`.
pub fn compose<T: Float>(a: &Pose3<T>, b: &Pose3<T>) -> Pose3<T> {
    from_parts(
        so3::compose(&a.rotation, &b.rotation),
        a.translation.vector + so3::rotate(&a.rotation, &b.translation.vector),
    )
}

/// Relative pose `a^-1 * b`.
pub fn between<T: Float>(a: &Pose3<T>, b: &Pose3<T>) -> Pose3<T> {
    compose(&inverse(a), b)
}

/// Transform a point: `R x + t`.
#[inline]
pub fn transform_point<T: Float>(p: &Pose3<T>, x: &Vec3<T>) -> Vec3<T> {
    so3::rotate(&p.rotation, x) + p.translation.vector
}

/// Pose from a tangent vector.
/// The translation part is copied as-is.
pub fn from_tangent<T: Float>(t: &Vec6<T>, epsilon: T) -> Pose3<T> {
    from_parts(
        so3::from_tangent(&rotation_part(t), epsilon),
        translation_part(t),
    )
}

/// Tangent vector of a pose.
/// The translation part is the raw translation.
pub fn to_tangent<T: Float>(p: &Pose3<T>, epsilon: T) -> Vec6<T> {
    tangent(
        &so3::to_tangent(&p.rotation, epsilon),
        &p.translation.vector,
    )
}

/// Apply a tangent increment: the rotation is updated on the right,
/// the translation by plain addition.
pub fn retract<T: Float>(p: &Pose3<T>, t: &Vec6<T>, epsilon: T) -> Pose3<T> {
    from_parts(
        so3::retract(&p.rotation, &rotation_part(t), epsilon),
        p.translation.vector + translation_part(t),
    )
}

/// Tangent vector `t` such that `retract(a, t) == b`.
pub fn local_coordinates<T: Float>(a: &Pose3<T>, b: &Pose3<T>, epsilon: T) -> Vec6<T> {
    tangent(
        &so3::local_coordinates(&a.rotation, &b.rotation, epsilon),
        &(b.translation.vector - a.translation.vector),
    )
}

/// Interpolation between `a` (alpha = 0) and `b` (alpha = 1).
/// Geodesic for the rotation, linear for the translation.
pub fn interpolate<T: Float>(a: &Pose3<T>, b: &Pose3<T>, alpha: T, epsilon: T) -> Pose3<T> {
    let ta = a.translation.vector;
    from_parts(
        so3::interpolate(&a.rotation, &b.rotation, alpha, epsilon),
        ta + (b.translation.vector - ta) * alpha,
    )
}

/// Random pose, with a uniformly distributed rotation
/// and a translation uniformly distributed in `[-1, 1)^3`.
pub fn random<T, R>(rng: &mut R) -> Pose3<T>
where
    T: Float,
    R: Rng,
    Standard: Distribution<T>,
{
    let rotation = so3::random(rng);
    let one = T::one();
    let two = one + one;
    let mut coordinate = || two * rng.gen::<T>() - one;
    let translation = Vec3::new(coordinate(), coordinate(), coordinate());
    from_parts(rotation, translation)
}

// TESTS #############################################################
