// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Derivatives between the minimal tangent parameterization
//! and the redundant storage of rotations and poses.
//!
//! Storage is `[x, y, z, w]` for a rotation and `[x, y, z, w, tx, ty, tz]` for a pose.
//! Derivatives are taken at zero perturbation, with perturbations applied on the right
//! (see `so3::retract` and `se3::retract`).
//! They hold for unit quaternions only.
//! The `epsilon` arguments are unused, they keep the same signature
//! as the other tangent-space functions.

use nalgebra as na;

use crate::misc::type_aliases::{Float, Mat3, Mat3x4, Mat4x3, Mat6x7, Mat7x6, Pose3, Rot3};

/// Jacobian of the rotation tangent with respect to the quaternion storage (3x4).
///
/// Converts a gradient or Jacobian expressed in raw quaternion components
/// into one expressed in the tangent basis.
#[rustfmt::skip]
pub fn rot3_tangent_d_storage<T: Float>(r: &Rot3<T>, _epsilon: T) -> Mat3x4<T> {
    let two = na::convert::<f64, T>(2.0);
    let (x, y, z, w) = (two * r.i, two * r.j, two * r.k, two * r.w);
    Mat3x4::new(
         w,  z, -y, -x,
        -z,  w,  x, -y,
         y, -x,  w, -z,
    )
}

/// Jacobian of the quaternion storage of `retract(r, t)` with respect to `t` (4x3).
#[rustfmt::skip]
pub fn rot3_storage_d_tangent<T: Float>(r: &Rot3<T>, _epsilon: T) -> Mat4x3<T> {
    let half = na::convert::<f64, T>(0.5);
    let (x, y, z, w) = (half * r.i, half * r.j, half * r.k, half * r.w);
    Mat4x3::new(
         w, -z,  y,
         z,  w, -x,
        -y,  x,  w,
        -x, -y, -z,
    )
}

/// Jacobian of the pose tangent with respect to the pose storage (6x7).
pub fn pose3_tangent_d_storage<T: Float>(p: &Pose3<T>, epsilon: T) -> Mat6x7<T> {
    let mut jacobian = Mat6x7::zeros();
    jacobian
        .fixed_view_mut::<3, 4>(0, 0)
        .copy_from(&rot3_tangent_d_storage(&p.rotation, epsilon));
    jacobian
        .fixed_view_mut::<3, 3>(3, 4)
        .copy_from(&Mat3::identity());
    jacobian
}

/// Jacobian of the storage of `retract(p, t)` with respect to `t` (7x6).
pub fn pose3_storage_d_tangent<T: Float>(p: &Pose3<T>, epsilon: T) -> Mat7x6<T> {
    let mut jacobian = Mat7x6::zeros();
    jacobian
        .fixed_view_mut::<4, 3>(0, 0)
        .copy_from(&rot3_storage_d_tangent(&p.rotation, epsilon));
    jacobian
        .fixed_view_mut::<3, 3>(4, 3)
        .copy_from(&Mat3::identity());
    jacobian
}

// TESTS #############################################################
