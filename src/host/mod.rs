//! Value types exchanged with the host simulation, and their conversion to the native math
//! types.

pub use self::convert::{basis_to_rotation, rotation_to_basis};
pub use self::geometry::{Basis, Plane, Transform3D, Vec3};
pub use self::value::{Dictionary, Value, ValueType};

mod convert;
mod geometry;
mod value;
