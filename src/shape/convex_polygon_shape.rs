use crate::host::{Value, Vec3};
use crate::math::{Point, Real, Vector};
use crate::native::{NativeShape, NativeShapeSettings};
use crate::shape::data::expect_vector3_array;
use crate::shape::{Shape, ShapeError, ShapeType, DEFAULT_MARGIN};
use alloc::format;
use alloc::vec::Vec;

/// The convex hull of a set of vertices.
#[derive(Clone, Debug)]
pub struct ConvexPolygonShape {
    vertices: Vec<Vec3>,
    margin: Real,
}

impl Default for ConvexPolygonShape {
    fn default() -> Self {
        ConvexPolygonShape {
            vertices: Vec::new(),
            margin: DEFAULT_MARGIN,
        }
    }
}

impl ConvexPolygonShape {
    /// The vertices this hull is computed from.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }
}

impl Shape for ConvexPolygonShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::ConvexPolygon
    }

    fn data(&self) -> Value {
        Value::Vector3Array(self.vertices.clone())
    }

    fn set_data(&mut self, data: &Value) -> Result<(), ShapeError> {
        self.vertices.clear();
        self.vertices
            .extend_from_slice(expect_vector3_array(ShapeType::ConvexPolygon, data)?);
        Ok(())
    }

    fn margin(&self) -> Real {
        self.margin
    }

    fn set_margin(&mut self, margin: Real) {
        self.margin = margin;
    }

    fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn build(&self, extra_margin: Real) -> Result<NativeShape, ShapeError> {
        let points = self
            .vertices
            .iter()
            .map(|vertex| {
                let v = Vector::<Real>::from(*vertex);

                if extra_margin > 0.0 {
                    let dir = v.try_normalize(0.0).unwrap_or_else(Vector::zeros);
                    Point::from(v + dir * extra_margin)
                } else {
                    Point::from(v)
                }
            })
            .collect();

        NativeShapeSettings::ConvexHull {
            points,
            max_convex_radius: self.margin,
        }
        .create()
        .map_err(|source| ShapeError::Build {
            shape: ShapeType::ConvexPolygon,
            parameters: format!("vertex count '{}'", self.vertices.len()),
            source,
        })
    }
}
