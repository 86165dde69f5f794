/*!
shapebridge3d
=============

**shapebridge3d** turns host-level collision shape descriptions (a radius, some
half-extents, a vertex list, a grid of height samples) into immutable
[`parry3d`] geometry.

Each [`shape::CollisionShape`] validates its description, lazily builds and
caches a [`native::NativeShape`] out of it, and tells every body referencing it
when that cached geometry became stale.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;
pub extern crate parry3d;

pub mod adapters;
pub mod host;
pub mod native;
pub mod shape;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitQuaternion, Vector3};

    /// The scalar type used throughout this crate.
    pub use f32 as Real;

    /// Tolerance below which two lengths are considered equal.
    ///
    /// This is also the smallest half-height handed to the native engine for the cylindrical
    /// part of a capsule.
    pub const CMP_EPSILON: Real = 0.00001;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
