use crate::host::Value;
use crate::math::Real;
use crate::native::{NativeShape, NativeShapeSettings};
use crate::shape::data::expect_float;
use crate::shape::{Shape, ShapeError, ShapeType};
use alloc::format;

/// A sphere centered at the origin.
#[derive(Clone, Debug, Default)]
pub struct SphereShape {
    radius: Real,
}

impl SphereShape {
    /// The radius of this sphere, or zero if the shape is invalid.
    pub fn radius(&self) -> Real {
        self.radius
    }
}

impl Shape for SphereShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Sphere
    }

    fn data(&self) -> Value {
        Value::from(self.radius)
    }

    fn set_data(&mut self, data: &Value) -> Result<(), ShapeError> {
        self.radius = 0.0;

        let radius = expect_float(ShapeType::Sphere, data)? as Real;

        if radius > 0.0 {
            self.radius = radius;
        }

        Ok(())
    }

    fn is_valid(&self) -> bool {
        self.radius > 0.0
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn build(&self, extra_margin: Real) -> Result<NativeShape, ShapeError> {
        NativeShapeSettings::Sphere {
            radius: self.radius + extra_margin,
        }
        .create()
        .map_err(|source| ShapeError::Build {
            shape: ShapeType::Sphere,
            parameters: format!("radius '{}'", self.radius),
            source,
        })
    }
}
