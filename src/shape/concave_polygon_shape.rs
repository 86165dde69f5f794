use crate::host::{Value, Vec3};
use crate::math::{Point, Real};
use crate::native::{NativeShape, NativeShapeSettings};
use crate::shape::data::Fields;
use crate::shape::{Shape, ShapeError, ShapeType};
use alloc::format;
use alloc::vec::Vec;

/// A static triangle soup.
///
/// Every three consecutive vertices form one triangle, front-facing when clockwise.
#[derive(Clone, Debug, Default)]
pub struct ConcavePolygonShape {
    faces: Vec<Vec3>,
    backface_collision: bool,
}

impl ConcavePolygonShape {
    /// The vertices of the triangles, three by three.
    pub fn faces(&self) -> &[Vec3] {
        &self.faces
    }

    /// Whether the triangles collide from both sides.
    pub fn backface_collision(&self) -> bool {
        self.backface_collision
    }

    /// The triangles handed to the native engine.
    ///
    /// The winding is flipped to match the counter-clockwise convention of the engine. With
    /// backface collision, every triangle is followed by its mirror image.
    pub fn triangles(&self) -> Vec<[Point<Real>; 3]> {
        let per_face = if self.backface_collision { 2 } else { 1 };
        let mut triangles = Vec::with_capacity(self.faces.len() / 3 * per_face);

        for face in self.faces.chunks_exact(3) {
            let [v0, v1, v2] = [face[0], face[1], face[2]].map(Point::<Real>::from);
            triangles.push([v2, v1, v0]);

            if self.backface_collision {
                triangles.push([v0, v1, v2]);
            }
        }

        triangles
    }
}

impl Shape for ConcavePolygonShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::ConcavePolygon
    }

    fn data(&self) -> Value {
        Value::dictionary([
            ("faces", Value::Vector3Array(self.faces.clone())),
            ("backface_collision", Value::from(self.backface_collision)),
        ])
    }

    fn set_data(&mut self, data: &Value) -> Result<(), ShapeError> {
        *self = ConcavePolygonShape::default();

        let fields = Fields::new(ShapeType::ConcavePolygon, data)?;
        let faces = fields.vector3_array("faces")?;
        let backface_collision = fields.bool("backface_collision")?;

        if faces.is_empty() {
            return Ok(());
        }

        if faces.len() % 3 != 0 {
            return Err(ShapeError::InvalidFaceVertexCount {
                vertex_count: faces.len(),
            });
        }

        self.faces = faces.to_vec();
        self.backface_collision = backface_collision;
        Ok(())
    }

    fn is_valid(&self) -> bool {
        !self.faces.is_empty()
    }

    fn is_convex(&self) -> bool {
        false
    }

    fn build(&self, extra_margin: Real) -> Result<NativeShape, ShapeError> {
        if extra_margin > 0.0 {
            log::warn!(
                "Concave polygon shapes with extra margin are not supported. Any such value will be ignored."
            );
        }

        NativeShapeSettings::Mesh {
            triangles: self.triangles(),
        }
        .create()
        .map_err(|source| ShapeError::Build {
            shape: ShapeType::ConcavePolygon,
            parameters: format!("vertex count '{}'", self.faces.len()),
            source,
        })
    }
}
