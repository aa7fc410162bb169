// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Type aliases for common types used all over the code base.

use nalgebra as na;

/// Floating point types the kernels are instantiated for (`f32` and `f64`).
pub trait Float: na::RealField + Copy {
    /// Default stability epsilon, ten times the machine epsilon.
    fn numeric_epsilon() -> Self;
}

impl Float for f32 {
    #[inline]
    fn numeric_epsilon() -> Self {
        10.0 * std::f32::EPSILON
    }
}

impl Float for f64 {
    #[inline]
    fn numeric_epsilon() -> Self {
        10.0 * std::f64::EPSILON
    }
}

/// A vector with three coordinates.
pub type Vec3<T> = na::Vector3<T>;
/// A vector with four coordinates.
pub type Vec4<T> = na::Vector4<T>;
/// A vector with six coordinates.
pub type Vec6<T> = na::Vector6<T>;
/// A vector with seven coordinates, the flat storage of a pose.
pub type Vec7<T> = na::SVector<T, 7>;

/// A 3x3 matrix.
pub type Mat3<T> = na::Matrix3<T>;
/// A 4x4 matrix.
pub type Mat4<T> = na::Matrix4<T>;
/// A 6x6 matrix.
pub type Mat6<T> = na::Matrix6<T>;
/// A 3x4 matrix.
pub type Mat3x4<T> = na::SMatrix<T, 3, 4>;
/// A 4x3 matrix.
pub type Mat4x3<T> = na::SMatrix<T, 4, 3>;
/// A 6x7 matrix.
pub type Mat6x7<T> = na::SMatrix<T, 6, 7>;
/// A 7x6 matrix.
pub type Mat7x6<T> = na::SMatrix<T, 7, 6>;

/// A 3D rotation, stored as a unit quaternion `[x, y, z, w]`.
pub type Rot3<T> = na::UnitQuaternion<T>;
/// A direct 3D isometry, also known as rigid body motion.
pub type Pose3<T> = na::Isometry3<T>;
