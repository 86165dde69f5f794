use crate::host::{Value, Vec3};
use crate::math::{Real, Vector};
use crate::native::{NativeShape, NativeShapeSettings};
use crate::shape::data::expect_vector3;
use crate::shape::{Shape, ShapeError, ShapeType, DEFAULT_MARGIN};
use alloc::format;

/// A box centered at the origin, with rounded edges.
///
/// A box whose shortest half extent doesn't exceed its margin is left invalid.
#[derive(Clone, Debug)]
pub struct BoxShape {
    half_extents: Vec3,
    margin: Real,
}

impl Default for BoxShape {
    fn default() -> Self {
        BoxShape {
            half_extents: Vec3::ZERO,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl BoxShape {
    /// The half extents of this box, rounded edges included.
    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }
}

impl Shape for BoxShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Box
    }

    fn data(&self) -> Value {
        Value::Vector3(self.half_extents)
    }

    fn set_data(&mut self, data: &Value) -> Result<(), ShapeError> {
        self.half_extents = Vec3::ZERO;
        self.half_extents = expect_vector3(ShapeType::Box, data)?;
        Ok(())
    }

    fn margin(&self) -> Real {
        self.margin
    }

    fn set_margin(&mut self, margin: Real) {
        self.margin = margin;
    }

    fn is_valid(&self) -> bool {
        let shortest = self.half_extents.min_element();
        shortest > 0.0 && shortest > self.margin
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn build(&self, extra_margin: Real) -> Result<NativeShape, ShapeError> {
        let padded = self.half_extents + Vec3::splat(extra_margin);

        NativeShapeSettings::Box {
            half_extents: Vector::from(padded),
            convex_radius: self.margin,
        }
        .create()
        .map_err(|source| ShapeError::Build {
            shape: ShapeType::Box,
            parameters: format!("half extents '{}'", self.half_extents),
            source,
        })
    }
}
