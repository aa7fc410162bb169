// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Group composition with analytic Jacobians in tangent space.
//!
//! Jacobians are expressed in the minimal tangent coordinates of the operands
//! and of the result (3 for a rotation, 6 for a pose), not in quaternion storage:
//! the sensitivity to an operand `x` is measured by perturbing it with
//! `retract(x, d)` and reading the result change with `local_coordinates(c, .)`.
//!
//! Rotation blocks are the quaternion product partials,
//! projected through the storage charts of the `chart` module.
//! Translation blocks are the rotation actions of the first operand.
//!
//! Each Jacobian has its own entry point, so that callers
//! never pay for a derivative they do not need.

use crate::math::{chart, se3, so3};
use crate::misc::type_aliases::{Float, Mat3, Mat3x4, Mat4, Mat6, Pose3, Rot3};

/// Matrix of the left quaternion product: `storage(q * p) == left_product_matrix(q) * storage(p)`.
#[rustfmt::skip]
fn left_product_matrix<T: Float>(q: &Rot3<T>) -> Mat4<T> {
    let (x, y, z, w) = (q.i, q.j, q.k, q.w);
    Mat4::new(
         w, -z,  y,  x,
         z,  w, -x,  y,
        -y,  x,  w,  z,
        -x, -y, -z,  w,
    )
}

/// Matrix of the right quaternion product: `storage(q * p) == right_product_matrix(p) * storage(q)`.
#[rustfmt::skip]
fn right_product_matrix<T: Float>(p: &Rot3<T>) -> Mat4<T> {
    let (x, y, z, w) = (p.i, p.j, p.k, p.w);
    Mat4::new(
         w,  z, -y,  x,
        -z,  w,  x,  y,
         y, -x,  w,  z,
        -x, -y, -z,  w,
    )
}

/// Rotation block of the Jacobian with respect to the first operand.
#[inline]
fn rot3_jacobian_a<T: Float>(c_tangent_d_storage: &Mat3x4<T>, a: &Rot3<T>, b: &Rot3<T>) -> Mat3<T> {
    c_tangent_d_storage * right_product_matrix(b) * chart::rot3_storage_d_tangent(a, T::zero())
}

/// Rotation block of the Jacobian with respect to the second operand.
#[inline]
fn rot3_jacobian_b<T: Float>(c_tangent_d_storage: &Mat3x4<T>, a: &Rot3<T>, b: &Rot3<T>) -> Mat3<T> {
    c_tangent_d_storage * left_product_matrix(a) * chart::rot3_storage_d_tangent(b, T::zero())
}

/// Rotation composition `a * b`.
#[inline]
pub fn rot3<T: Float>(a: &Rot3<T>, b: &Rot3<T>) -> Rot3<T> {
    so3::compose(a, b)
}

/// Rotation composition `c = a * b`, with the Jacobian `dc/da` (3x3).
pub fn rot3_with_jacobian_a<T: Float>(a: &Rot3<T>, b: &Rot3<T>) -> (Rot3<T>, Mat3<T>) {
    let c = so3::compose(a, b);
    let c_tangent_d_storage = chart::rot3_tangent_d_storage(&c, T::zero());
    let jacobian = rot3_jacobian_a(&c_tangent_d_storage, a, b);
    (c, jacobian)
}

/// Rotation composition `c = a * b`, with the Jacobian `dc/db` (3x3).
pub fn rot3_with_jacobian_b<T: Float>(a: &Rot3<T>, b: &Rot3<T>) -> (Rot3<T>, Mat3<T>) {
    let c = so3::compose(a, b);
    let c_tangent_d_storage = chart::rot3_tangent_d_storage(&c, T::zero());
    let jacobian = rot3_jacobian_b(&c_tangent_d_storage, a, b);
    (c, jacobian)
}

/// Rotation composition `c = a * b`, with the Jacobians `dc/da` and `dc/db`.
pub fn rot3_with_jacobians<T: Float>(a: &Rot3<T>, b: &Rot3<T>) -> (Rot3<T>, Mat3<T>, Mat3<T>) {
    let c = so3::compose(a, b);
    let c_tangent_d_storage = chart::rot3_tangent_d_storage(&c, T::zero());
    let jacobian_a = rot3_jacobian_a(&c_tangent_d_storage, a, b);
    let jacobian_b = rot3_jacobian_b(&c_tangent_d_storage, a, b);
    (c, jacobian_a, jacobian_b)
}

/// Pose composition `a * b`.
#[inline]
pub fn pose3<T: Float>(a: &Pose3<T>, b: &Pose3<T>) -> Pose3<T> {
    se3::compose(a, b)
}

/// Pose composition `c = a * b`, with the Jacobian `dc/da` (6x6).
pub fn pose3_with_jacobian_a<T: Float>(a: &Pose3<T>, b: &Pose3<T>) -> (Pose3<T>, Mat6<T>) {
    let c = se3::compose(a, b);
    let c_tangent_d_storage = chart::rot3_tangent_d_storage(&c.rotation, T::zero());
    let jacobian = pose3_jacobian_a(&c_tangent_d_storage, a, b);
    (c, jacobian)
}

/// Pose composition `c = a * b`, with the Jacobian `dc/db` (6x6).
pub fn pose3_with_jacobian_b<T: Float>(a: &Pose3<T>, b: &Pose3<T>) -> (Pose3<T>, Mat6<T>) {
    let c = se3::compose(a, b);
    let c_tangent_d_storage = chart::rot3_tangent_d_storage(&c.rotation, T::zero());
    let jacobian = pose3_jacobian_b(&c_tangent_d_storage, a, b);
    (c, jacobian)
}

/// Pose composition `c = a * b`, with both Jacobians `dc/da` and `dc/db` (6x6).
pub fn pose3_with_jacobians<T: Float>(
    a: &Pose3<T>,
    b: &Pose3<T>,
) -> (Pose3<T>, Mat6<T>, Mat6<T>) {
    let c = se3::compose(a, b);
    let c_tangent_d_storage = chart::rot3_tangent_d_storage(&c.rotation, T::zero());
    let jacobian_a = pose3_jacobian_a(&c_tangent_d_storage, a, b);
    let jacobian_b = pose3_jacobian_b(&c_tangent_d_storage, a, b);
    (c, jacobian_a, jacobian_b)
}

/// ```text
/// [ rot_a              0 ]
/// [ -R(a) hat(t_b)     I ]
/// ```
fn pose3_jacobian_a<T: Float>(
    c_tangent_d_storage: &Mat3x4<T>,
    a: &Pose3<T>,
    b: &Pose3<T>,
) -> Mat6<T> {
    let rotation_a = a.rotation.to_rotation_matrix().into_inner();
    let mut jacobian = Mat6::identity();
    jacobian
        .fixed_view_mut::<3, 3>(0, 0)
        .copy_from(&rot3_jacobian_a(c_tangent_d_storage, &a.rotation, &b.rotation));
    jacobian
        .fixed_view_mut::<3, 3>(3, 0)
        .copy_from(&(-rotation_a * so3::hat(&b.translation.vector)));
    jacobian
}

/// ```text
/// [ rot_b    0    ]
/// [ 0        R(a) ]
/// ```
fn pose3_jacobian_b<T: Float>(
    c_tangent_d_storage: &Mat3x4<T>,
    a: &Pose3<T>,
    b: &Pose3<T>,
) -> Mat6<T> {
    let mut jacobian = Mat6::zeros();
    jacobian
        .fixed_view_mut::<3, 3>(0, 0)
        .copy_from(&rot3_jacobian_b(c_tangent_d_storage, &a.rotation, &b.rotation));
    jacobian
        .fixed_view_mut::<3, 3>(3, 3)
        .copy_from(&a.rotation.to_rotation_matrix().into_inner());
    jacobian
}

// TESTS #############################################################
