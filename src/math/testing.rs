// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Shared helpers for the tests of the math module.

use nalgebra::SMatrix;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::misc::type_aliases::{Float, Pose3, Rot3, Vec3};

/// Deterministic random number generator.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Chordal distance between two rotations, blind to the quaternion sign.
pub fn rotation_distance<T: Float>(a: &Rot3<T>, b: &Rot3<T>) -> T {
    let diff = (a.coords - b.coords).norm();
    let sum = (a.coords + b.coords).norm();
    diff.min(sum)
}

/// Distance between two poses, blind to the quaternion sign.
pub fn pose_distance<T: Float>(a: &Pose3<T>, b: &Pose3<T>) -> T {
    rotation_distance(&a.rotation, &b.rotation)
        + (a.translation.vector - b.translation.vector).norm()
}

/// Rotation from Euler angles, or `None` for non-finite inputs.
pub fn gen_rotation(roll: f64, pitch: f64, yaw: f64) -> Option<Rot3<f64>> {
    if roll.is_finite() && pitch.is_finite() && yaw.is_finite() {
        Some(Rot3::from_euler_angles(roll, pitch, yaw))
    } else {
        None
    }
}

/// Vector with coordinates wrapped in `(-bound, bound)`, or `None` for non-finite inputs.
pub fn bounded_vec3(x: f64, y: f64, z: f64, bound: f64) -> Option<Vec3<f64>> {
    if x.is_finite() && y.is_finite() && z.is_finite() {
        Some(Vec3::new(x % bound, y % bound, z % bound))
    } else {
        None
    }
}

/// Rigid body motion from Euler angles and a translation, or `None` for non-finite inputs.
pub fn gen_pose(a1: f64, a2: f64, a3: f64, t1: f64, t2: f64, t3: f64) -> Option<Pose3<f64>> {
    let rotation = gen_rotation(a1, a2, a3)?;
    let translation = bounded_vec3(t1, t2, t3, 100.0)?;
    Some(Pose3::from_parts(translation.into(), rotation))
}

/// Central finite difference Jacobian in tangent space.
///
/// `f` is evaluated at `retract(x, h * e_i)` and `retract(x, -h * e_i)` for each axis,
/// and its outputs are compared with `local(f(x), .)`.
pub fn numerical_jacobian<X, Y, F, Retract, Local, const N: usize, const M: usize>(
    x: &X,
    f: F,
    retract: Retract,
    local: Local,
    h: f64,
) -> SMatrix<f64, M, N>
where
    F: Fn(&X) -> Y,
    Retract: Fn(&X, &SMatrix<f64, N, 1>) -> X,
    Local: Fn(&Y, &Y) -> SMatrix<f64, M, 1>,
{
    let y = f(x);
    let mut jacobian = SMatrix::<f64, M, N>::zeros();
    for i in 0..N {
        let mut delta = SMatrix::<f64, N, 1>::zeros();
        delta[i] = h;
        let forward = local(&y, &f(&retract(x, &delta)));
        let backward = local(&y, &f(&retract(x, &(-delta))));
        jacobian.set_column(i, &((forward - backward) / (2.0 * h)));
    }
    jacobian
}
