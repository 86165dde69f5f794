//! Conversions between the host value types and the native math types.

use super::{Basis, Transform3D, Vec3};
use crate::math::{Isometry, Matrix, Point, Real, Rotation, Translation, Vector};

impl From<Vec3> for Vector<Real> {
    #[inline]
    fn from(v: Vec3) -> Self {
        Vector::new(v.x, v.y, v.z)
    }
}

impl From<Vector<Real>> for Vec3 {
    #[inline]
    fn from(v: Vector<Real>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Point<Real> {
    #[inline]
    fn from(v: Vec3) -> Self {
        Point::new(v.x, v.y, v.z)
    }
}

impl From<Point<Real>> for Vec3 {
    #[inline]
    fn from(p: Point<Real>) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

impl From<Basis> for Matrix<Real> {
    fn from(b: Basis) -> Self {
        let [x, y, z] = b.rows;
        Matrix::new(x.x, x.y, x.z, y.x, y.y, y.z, z.x, z.y, z.z)
    }
}

impl From<Matrix<Real>> for Basis {
    fn from(m: Matrix<Real>) -> Self {
        Basis::from_rows(
            Vec3::new(m[(0, 0)], m[(0, 1)], m[(0, 2)]),
            Vec3::new(m[(1, 0)], m[(1, 1)], m[(1, 2)]),
            Vec3::new(m[(2, 0)], m[(2, 1)], m[(2, 2)]),
        )
    }
}

/// The rotation closest to the linear part `basis`.
///
/// Any scaling or shearing in `basis` is discarded.
pub fn basis_to_rotation(basis: &Basis) -> Rotation<Real> {
    Rotation::from_matrix(&Matrix::from(*basis))
}

/// The orthonormal basis equivalent to `rotation`.
pub fn rotation_to_basis(rotation: &Rotation<Real>) -> Basis {
    Basis::from(rotation.to_rotation_matrix().into_inner())
}

impl From<Transform3D> for Isometry<Real> {
    fn from(t: Transform3D) -> Self {
        Isometry::from_parts(
            Translation::from(Vector::<Real>::from(t.origin)),
            basis_to_rotation(&t.basis),
        )
    }
}

impl From<Isometry<Real>> for Transform3D {
    fn from(iso: Isometry<Real>) -> Self {
        Transform3D::new(
            rotation_to_basis(&iso.rotation),
            Vec3::from(iso.translation.vector),
        )
    }
}
