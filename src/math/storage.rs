// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Flat numeric views of rotations and poses.
//!
//! A rotation is stored as `[x, y, z, w]`,
//! a pose as `[x, y, z, w, tx, ty, tz]`.
//! Quaternions are taken as-is, without renormalization.

use log::debug;
use nalgebra::{Quaternion, Translation3};
use thiserror::Error;

use crate::misc::type_aliases::{Float, Pose3, Rot3, Vec3, Vec4, Vec7};

/// Storage dimension of a rotation.
pub const ROT3_STORAGE_DIM: usize = 4;
/// Storage dimension of a pose.
pub const POSE3_STORAGE_DIM: usize = 7;

/// Error while reading a group element from an untyped slice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The slice does not have the storage dimension of the element.
    #[error("wrong storage length: expected {expected}, got {actual}")]
    WrongLength {
        /// Storage dimension of the element.
        expected: usize,
        /// Length of the given slice.
        actual: usize,
    },
}

/// Flat storage of a rotation.
#[inline]
pub fn rot3_to_storage<T: Float>(r: &Rot3<T>) -> Vec4<T> {
    r.coords
}

/// Rotation from its flat storage.
#[inline]
pub fn rot3_from_storage<T: Float>(data: &Vec4<T>) -> Rot3<T> {
    Rot3::new_unchecked(Quaternion::from(*data))
}

/// Flat storage of a pose.
pub fn pose3_to_storage<T: Float>(p: &Pose3<T>) -> Vec7<T> {
    let mut data = Vec7::zeros();
    data.fixed_rows_mut::<4>(0).copy_from(&p.rotation.coords);
    data.fixed_rows_mut::<3>(4).copy_from(&p.translation.vector);
    data
}

/// Pose from its flat storage.
pub fn pose3_from_storage<T: Float>(data: &Vec7<T>) -> Pose3<T> {
    let rotation = rot3_from_storage(&data.fixed_rows::<4>(0).into_owned());
    let translation = Translation3::from(data.fixed_rows::<3>(4).into_owned());
    Pose3::from_parts(translation, rotation)
}

fn check_length(expected: usize, actual: usize) -> Result<(), StorageError> {
    if expected == actual {
        Ok(())
    } else {
        debug!("rejected storage slice of length {} (expected {})", actual, expected);
        Err(StorageError::WrongLength { expected, actual })
    }
}

/// Rotation from a slice `[x, y, z, w]`.
pub fn rot3_from_slice<T: Float>(data: &[T]) -> Result<Rot3<T>, StorageError> {
    check_length(ROT3_STORAGE_DIM, data.len())?;
    Ok(rot3_from_storage(&Vec4::from_column_slice(data)))
}

/// Pose from a slice `[x, y, z, w, tx, ty, tz]`.
pub fn pose3_from_slice<T: Float>(data: &[T]) -> Result<Pose3<T>, StorageError> {
    check_length(POSE3_STORAGE_DIM, data.len())?;
    let rotation = rot3_from_storage(&Vec4::from_column_slice(&data[..ROT3_STORAGE_DIM]));
    let translation = Vec3::from_column_slice(&data[ROT3_STORAGE_DIM..]);
    Ok(Pose3::from_parts(translation.into(), rotation))
}

// TESTS #############################################################
