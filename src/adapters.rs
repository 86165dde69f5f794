//! Wrappers composing a native shape with a scale, a rigid transform, a center of mass or a
//! user identifier.
//!
//! Each function leaves its input untouched and returns a new native shape wrapping it. Any
//! rejection from the native engine is logged at the error level before being returned.

use crate::host::{basis_to_rotation, Basis, Transform3D, Vec3};
use crate::math::Vector;
use crate::native::{NativeShape, NativeShapeSettings};
use crate::shape::error::reported;
use crate::shape::ShapeError;

/// Scales `shape` along each of its local axes.
pub fn with_scale(shape: &NativeShape, scale: Vec3) -> Result<NativeShape, ShapeError> {
    NativeShapeSettings::Scaled {
        inner: shape.clone(),
        scale: Vector::from(scale),
    }
    .create()
    .map_err(|source| reported(ShapeError::Scale { scale, source }))
}

/// Rotates `shape` by `basis`, then translates it by `origin`.
///
/// Any scaling in `basis` is discarded, see [`with_transform`] to apply it.
pub fn with_basis_origin(
    shape: &NativeShape,
    basis: Basis,
    origin: Vec3,
) -> Result<NativeShape, ShapeError> {
    NativeShapeSettings::RotatedTranslated {
        inner: shape.clone(),
        translation: Vector::from(origin),
        rotation: basis_to_rotation(&basis),
    }
    .create()
    .map_err(|source| {
        reported(ShapeError::Offset {
            basis,
            origin,
            source,
        })
    })
}

/// Scales `shape` by `scale`, then moves it by `transform`.
///
/// Each step is skipped when it would leave the shape unchanged.
pub fn with_transform(
    shape: &NativeShape,
    transform: &Transform3D,
    scale: Vec3,
) -> Result<NativeShape, ShapeError> {
    let mut result = shape.clone();

    if scale != Vec3::ONE {
        result = with_scale(&result, scale)?;
    }

    if *transform != Transform3D::IDENTITY {
        result = with_basis_origin(&result, transform.basis, transform.origin)?;
    }

    Ok(result)
}

/// Moves the center of mass of `shape` by `offset`.
pub fn with_center_of_mass_offset(
    shape: &NativeShape,
    offset: Vec3,
) -> Result<NativeShape, ShapeError> {
    NativeShapeSettings::OffsetCenterOfMass {
        inner: shape.clone(),
        offset: Vector::from(offset),
    }
    .create()
    .map_err(|source| reported(ShapeError::CenterOfMassOffset { offset, source }))
}

/// Moves the center of mass of `shape` to `center_of_mass`.
///
/// Returns `shape` itself if its center of mass is already there.
pub fn with_center_of_mass(
    shape: &NativeShape,
    center_of_mass: Vec3,
) -> Result<NativeShape, ShapeError> {
    let offset = center_of_mass - Vec3::from(shape.center_of_mass());

    if offset == Vec3::ZERO {
        return Ok(shape.clone());
    }

    with_center_of_mass_offset(shape, offset)
}

/// Tags `shape` with `user_data`, retrievable through [`NativeShape::user_data`].
pub fn with_user_data(shape: &NativeShape, user_data: u64) -> Result<NativeShape, ShapeError> {
    NativeShapeSettings::OverrideUserData {
        inner: shape.clone(),
        user_data,
    }
    .create()
    .map_err(|source| reported(ShapeError::UserData { source }))
}
