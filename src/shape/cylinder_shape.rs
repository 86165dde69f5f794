use crate::host::Value;
use crate::math::Real;
use crate::native::{NativeShape, NativeShapeSettings};
use crate::shape::data::Fields;
use crate::shape::{Shape, ShapeError, ShapeType, DEFAULT_MARGIN};
use alloc::format;

/// A cylinder aligned with the `y` axis, with rounded edges.
#[derive(Clone, Debug)]
pub struct CylinderShape {
    height: Real,
    radius: Real,
    margin: Real,
}

impl Default for CylinderShape {
    fn default() -> Self {
        CylinderShape {
            height: 0.0,
            radius: 0.0,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl CylinderShape {
    /// The total height of this cylinder.
    pub fn height(&self) -> Real {
        self.height
    }

    /// The radius of this cylinder.
    pub fn radius(&self) -> Real {
        self.radius
    }
}

impl Shape for CylinderShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Cylinder
    }

    fn data(&self) -> Value {
        Value::dictionary([
            ("height", Value::from(self.height)),
            ("radius", Value::from(self.radius)),
        ])
    }

    fn set_data(&mut self, data: &Value) -> Result<(), ShapeError> {
        self.height = 0.0;
        self.radius = 0.0;

        let fields = Fields::new(ShapeType::Cylinder, data)?;
        let height = fields.float("height")? as Real;
        let radius = fields.float("radius")? as Real;

        self.height = height;
        self.radius = radius;
        Ok(())
    }

    fn margin(&self) -> Real {
        self.margin
    }

    fn set_margin(&mut self, margin: Real) {
        self.margin = margin;
    }

    fn is_valid(&self) -> bool {
        self.height > 0.0
            && self.radius > 0.0
            && self.height >= self.margin
            && self.radius >= self.margin
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn build(&self, extra_margin: Real) -> Result<NativeShape, ShapeError> {
        NativeShapeSettings::Cylinder {
            half_height: self.height / 2.0 + extra_margin,
            radius: self.radius + extra_margin,
            convex_radius: self.margin,
        }
        .create()
        .map_err(|source| ShapeError::Build {
            shape: ShapeType::Cylinder,
            parameters: format!("height '{}' and radius '{}'", self.height, self.radius),
            source,
        })
    }
}
