//! The native shapes handed to the physics engine.
//!
//! Leaf geometry is provided by `parry3d`. On top of it, this module adds the wrapper nodes
//! (scaling, rigid transform, center of mass offset, user data) needed to compose a shape
//! description with the transform and mass properties of the body using it.

pub use self::error::NativeShapeError;
pub use self::native_shape::{NativeShape, NativeShapeNode};
pub use self::settings::NativeShapeSettings;

mod error;
mod native_shape;
mod settings;
