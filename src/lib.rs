// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Closed-form SO(3) and SE(3) kernels for nonlinear least squares.
//!
//! Rotations are unit quaternions and poses are a rotation with a translation.
//! Every map between a group element and its tangent vector takes
//! a small positive `epsilon` keeping it smooth and finite at the identity
//! and at the cut locus, in both `f32` and `f64`.
//! A good default is `Float::numeric_epsilon()`.
//!
//! - [`math::so3`] and [`math::se3`]: tangent maps, retraction, interpolation.
//! - [`math::composition`]: group composition with 6x6 tangent-space Jacobians.
//! - [`math::chart`]: derivatives between tangent and quaternion storage.
//! - [`math::storage`]: flat `[x, y, z, w, tx, ty, tz]` views.

#![warn(missing_docs)]

pub mod math;
pub mod misc;
