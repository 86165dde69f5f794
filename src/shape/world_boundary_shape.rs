use crate::host::{Plane, Value};
use crate::math::Real;
use crate::native::NativeShape;
use crate::shape::data::expect_plane;
use crate::shape::{Shape, ShapeError, ShapeType};

/// An infinite plane splitting the world in two.
///
/// The native engine has no infinite geometry: this shape stores its plane but can never be
/// built.
#[derive(Clone, Debug, Default)]
pub struct WorldBoundaryShape {
    plane: Plane,
}

impl WorldBoundaryShape {
    /// The plane bounding the world.
    pub fn plane(&self) -> Plane {
        self.plane
    }
}

impl Shape for WorldBoundaryShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::WorldBoundary
    }

    fn data(&self) -> Value {
        Value::Plane(self.plane)
    }

    fn set_data(&mut self, data: &Value) -> Result<(), ShapeError> {
        self.plane = Plane::default();
        self.plane = expect_plane(ShapeType::WorldBoundary, data)?;
        Ok(())
    }

    fn is_valid(&self) -> bool {
        self.plane != Plane::default()
    }

    fn is_convex(&self) -> bool {
        false
    }

    fn build(&self, _extra_margin: Real) -> Result<NativeShape, ShapeError> {
        Err(ShapeError::Unsupported(
            "World boundary shapes are not supported. Consider using one or more reasonably sized box shapes instead.",
        ))
    }
}
