use crate::host::Value;
use crate::math::{Real, CMP_EPSILON};
use crate::native::{NativeShape, NativeShapeSettings};
use crate::shape::data::Fields;
use crate::shape::{Shape, ShapeError, ShapeType};
use alloc::format;

/// A capsule aligned with the `y` axis.
///
/// The height includes both hemispherical caps, so it can't be smaller than twice the radius.
#[derive(Clone, Debug, Default)]
pub struct CapsuleShape {
    height: Real,
    radius: Real,
}

impl CapsuleShape {
    /// The total height of this capsule, caps included.
    pub fn height(&self) -> Real {
        self.height
    }

    /// The radius of this capsule.
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Half the height of the cylindrical part, as handed to the native engine.
    ///
    /// A capsule made only of its two caps still gets a tiny cylindrical part.
    pub fn clamped_half_height(&self) -> Real {
        (self.height / 2.0 - self.radius).max(CMP_EPSILON)
    }
}

impl Shape for CapsuleShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Capsule
    }

    fn data(&self) -> Value {
        Value::dictionary([
            ("height", Value::from(self.height)),
            ("radius", Value::from(self.radius)),
        ])
    }

    fn set_data(&mut self, data: &Value) -> Result<(), ShapeError> {
        *self = CapsuleShape::default();

        let fields = Fields::new(ShapeType::Capsule, data)?;
        let height = fields.float("height")? as Real;
        let radius = fields.float("radius")? as Real;

        if height <= 0.0 || radius <= 0.0 {
            return Ok(());
        }

        if height / 2.0 < radius {
            return Err(ShapeError::CapsuleTooShort { height, radius });
        }

        self.height = height;
        self.radius = radius;
        Ok(())
    }

    fn is_valid(&self) -> bool {
        self.height > 0.0 && self.radius > 0.0
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn build(&self, extra_margin: Real) -> Result<NativeShape, ShapeError> {
        NativeShapeSettings::Capsule {
            half_height_of_cylinder: self.clamped_half_height() + extra_margin,
            radius: self.radius,
        }
        .create()
        .map_err(|source| ShapeError::Build {
            shape: ShapeType::Capsule,
            parameters: format!("height '{}' and radius '{}'", self.height, self.radius),
            source,
        })
    }
}
