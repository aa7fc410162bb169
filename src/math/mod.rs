// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Lie group kernels for 3D rotations and rigid body motions.

pub mod chart;
pub mod composition;
pub mod se3;
pub mod so3;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;
