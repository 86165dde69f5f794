use crate::host::Value;
use crate::math::Real;
use crate::native::{NativeShape, NativeShapeSettings};
use crate::shape::data::Fields;
use crate::shape::{Shape, ShapeError, ShapeType};
use alloc::format;

/// A ray along the local `+z` axis, used to keep a body at a distance from the ground.
#[derive(Clone, Debug, Default)]
pub struct SeparationRayShape {
    length: Real,
    slide_on_slope: bool,
}

impl SeparationRayShape {
    /// The length of the ray, or zero if the shape is invalid.
    pub fn length(&self) -> Real {
        self.length
    }

    /// Whether contacts push along the surface normal instead of the ray.
    pub fn slide_on_slope(&self) -> bool {
        self.slide_on_slope
    }
}

impl Shape for SeparationRayShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::SeparationRay
    }

    fn data(&self) -> Value {
        Value::dictionary([
            ("length", Value::from(self.length)),
            ("slide_on_slope", Value::from(self.slide_on_slope)),
        ])
    }

    fn set_data(&mut self, data: &Value) -> Result<(), ShapeError> {
        *self = SeparationRayShape::default();

        let fields = Fields::new(ShapeType::SeparationRay, data)?;
        let length = fields.float("length")? as Real;
        let slide_on_slope = fields.bool("slide_on_slope")?;

        // Zero-length rays are tolerated, they just stay invalid.
        if length != 0.0 {
            self.length = length;
            self.slide_on_slope = slide_on_slope;
        }

        Ok(())
    }

    fn is_valid(&self) -> bool {
        self.length != 0.0
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn build(&self, extra_margin: Real) -> Result<NativeShape, ShapeError> {
        NativeShapeSettings::SeparationRay {
            length: self.length + extra_margin,
            slide_on_slope: self.slide_on_slope,
        }
        .create()
        .map_err(|source| ShapeError::Build {
            shape: ShapeType::SeparationRay,
            parameters: format!("length '{}'", self.length),
            source,
        })
    }
}
