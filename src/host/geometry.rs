use crate::math::Real;
use core::fmt;
use core::ops::{Add, Index, Sub};

/// A 3D vector as seen by the host simulation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone, Default)]
#[repr(C)]
pub struct Vec3 {
    /// The x component.
    pub x: Real,
    /// The y component.
    pub y: Real,
    /// The z component.
    pub z: Real,
}

impl Vec3 {
    /// The vector with all components set to zero.
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    /// The vector with all components set to one.
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    /// Creates a new vector from its components.
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Vec3 { x, y, z }
    }

    /// Creates a vector with all its components set to `value`.
    #[inline]
    pub const fn splat(value: Real) -> Self {
        Vec3::new(value, value, value)
    }

    /// The index of the smallest component (the first one in case of a tie).
    pub fn min_axis_index(&self) -> usize {
        if self.x <= self.y {
            if self.x <= self.z {
                0
            } else {
                2
            }
        } else if self.y <= self.z {
            1
        } else {
            2
        }
    }

    /// The value of the smallest component.
    #[inline]
    pub fn min_element(&self) -> Real {
        self[self.min_axis_index()]
    }
}

impl Index<usize> for Vec3 {
    type Output = Real;

    fn index(&self, axis: usize) -> &Real {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 axis index out of bounds: {axis}"),
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A 3x3 matrix stored row by row, as used by the host for orientations.
///
/// The columns of the matrix are the images of the x, y and z axes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Basis {
    /// The rows of this matrix.
    pub rows: [Vec3; 3],
}

impl Basis {
    /// The identity basis.
    pub const IDENTITY: Basis = Basis {
        rows: [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ],
    };

    /// Creates a basis from its rows.
    #[inline]
    pub const fn from_rows(x: Vec3, y: Vec3, z: Vec3) -> Self {
        Basis { rows: [x, y, z] }
    }

    /// The `i`-th column of this basis.
    #[inline]
    pub fn column(&self, i: usize) -> Vec3 {
        Vec3::new(self.rows[0][i], self.rows[1][i], self.rows[2][i])
    }
}

impl Default for Basis {
    fn default() -> Self {
        Basis::IDENTITY
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[X: {}, Y: {}, Z: {}]",
            self.column(0),
            self.column(1),
            self.column(2)
        )
    }
}

/// A rigid transform (possibly with a skewed or scaled basis) as used by the host.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone, Default)]
#[repr(C)]
pub struct Transform3D {
    /// The linear part of the transform.
    pub basis: Basis,
    /// The translation part of the transform.
    pub origin: Vec3,
}

impl Transform3D {
    /// The identity transform.
    pub const IDENTITY: Transform3D = Transform3D {
        basis: Basis::IDENTITY,
        origin: Vec3::ZERO,
    };

    /// Creates a transform from its basis and origin.
    #[inline]
    pub const fn new(basis: Basis, origin: Vec3) -> Self {
        Transform3D { basis, origin }
    }

    /// A pure translation.
    #[inline]
    pub const fn from_origin(origin: Vec3) -> Self {
        Transform3D::new(Basis::IDENTITY, origin)
    }
}

/// A plane described by its normal and its signed distance from the origin.
///
/// The default plane has a zero normal and is not a meaningful plane.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone, Default)]
#[repr(C)]
pub struct Plane {
    /// The plane normal.
    pub normal: Vec3,
    /// The distance from the origin along `normal`.
    pub d: Real,
}

impl Plane {
    /// Creates a plane from its normal and its distance to the origin.
    #[inline]
    pub const fn new(normal: Vec3, d: Real) -> Self {
        Plane { normal, d }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[N: {}, D: {}]", self.normal, self.d)
    }
}
