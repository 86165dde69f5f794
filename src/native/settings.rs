use super::{NativeShape, NativeShapeError, NativeShapeNode};
use crate::math::{Isometry, Point, Real, Rotation, Translation, Vector};
use alloc::vec::Vec;
use na::DMatrix;
use parry3d::shape::{HeightField, Segment, SharedShape, TriMesh};

/// The parameters of a native shape to construct.
///
/// This is the single entry point through which native shapes are built: every variant is
/// validated by [`NativeShapeSettings::create`], which either returns a brand-new
/// [`NativeShape`] or the reason why the engine rejected the parameters.
#[derive(Clone, Debug)]
pub enum NativeShapeSettings {
    /// A sphere centered at the origin.
    Sphere {
        /// The sphere radius.
        radius: Real,
    },
    /// A box centered at the origin.
    Box {
        /// The half extents of the box, rounded border included.
        half_extents: Vector<Real>,
        /// The radius of the rounded border. Doesn't change the size of the box.
        convex_radius: Real,
    },
    /// A capsule aligned with the `y` axis.
    Capsule {
        /// Half the height of the cylindrical part, caps excluded.
        half_height_of_cylinder: Real,
        /// The radius of the cylindrical part and of the caps.
        radius: Real,
    },
    /// A cylinder aligned with the `y` axis.
    Cylinder {
        /// Half the height of the cylinder, rounded border included.
        half_height: Real,
        /// The radius of the cylinder, rounded border included.
        radius: Real,
        /// The radius of the rounded border.
        convex_radius: Real,
    },
    /// The convex hull of a point cloud.
    ConvexHull {
        /// The points to compute the hull of.
        points: Vec<Point<Real>>,
        /// The largest radius of the rounded border the hull may use.
        max_convex_radius: Real,
    },
    /// A triangle soup.
    ///
    /// Triangles are front-facing when their vertices are counter-clockwise.
    Mesh {
        /// The triangles of the mesh.
        triangles: Vec<[Point<Real>; 3]>,
    },
    /// A square grid of height samples, in the `xz` plane.
    HeightField {
        /// The heights, row by row along `z`, each row along `x`.
        samples: Vec<Real>,
        /// The position of the first sample.
        offset: Vector<Real>,
        /// The distance between two consecutive samples along `x` and `z`, and the scale
        /// applied to every height along `y`.
        scale: Vector<Real>,
        /// The number of samples along each side of the grid.
        sample_count: u32,
    },
    /// A ray from the origin along the `+z` axis.
    SeparationRay {
        /// The length of the ray.
        length: Real,
        /// See [`NativeShapeNode::SeparationRay::slide_on_slope`].
        slide_on_slope: bool,
    },
    /// See [`NativeShapeNode::Scaled`].
    Scaled {
        /// The shape to scale.
        inner: NativeShape,
        /// The scaling factor along each axis.
        scale: Vector<Real>,
    },
    /// See [`NativeShapeNode::RotatedTranslated`].
    RotatedTranslated {
        /// The shape to move.
        inner: NativeShape,
        /// Applied after `rotation`.
        translation: Vector<Real>,
        /// Applied first.
        rotation: Rotation<Real>,
    },
    /// See [`NativeShapeNode::OffsetCenterOfMass`].
    OffsetCenterOfMass {
        /// The shape whose center of mass is moved.
        inner: NativeShape,
        /// The displacement of the center of mass.
        offset: Vector<Real>,
    },
    /// See [`NativeShapeNode::UserData`].
    OverrideUserData {
        /// The shape to tag.
        inner: NativeShape,
        /// The tag.
        user_data: u64,
    },
}

impl NativeShapeSettings {
    /// Builds the native shape described by these settings.
    pub fn create(self) -> Result<NativeShape, NativeShapeError> {
        match self {
            NativeShapeSettings::Sphere { radius } => {
                if !(radius > 0.0) || !radius.is_finite() {
                    return Err(NativeShapeError::InvalidRadius(radius));
                }

                Ok(convex_geometry(SharedShape::ball(radius), 0.0))
            }
            NativeShapeSettings::Box {
                half_extents,
                convex_radius,
            } => {
                check_convex_radius(convex_radius)?;

                if half_extents.iter().any(|e| !(*e >= convex_radius) || !e.is_finite()) {
                    return Err(NativeShapeError::InvalidHalfExtents {
                        half_extents,
                        convex_radius,
                    });
                }

                let shape = if convex_radius > 0.0 {
                    let inner = half_extents.add_scalar(-convex_radius);
                    SharedShape::round_cuboid(inner.x, inner.y, inner.z, convex_radius)
                } else {
                    SharedShape::cuboid(half_extents.x, half_extents.y, half_extents.z)
                };

                Ok(convex_geometry(shape, convex_radius))
            }
            NativeShapeSettings::Capsule {
                half_height_of_cylinder,
                radius,
            } => {
                if !(radius > 0.0) || !radius.is_finite() {
                    return Err(NativeShapeError::InvalidRadius(radius));
                }

                if !(half_height_of_cylinder > 0.0) || !half_height_of_cylinder.is_finite() {
                    return Err(NativeShapeError::InvalidHalfHeight(half_height_of_cylinder));
                }

                let shape = SharedShape::capsule_y(half_height_of_cylinder, radius);
                Ok(convex_geometry(shape, radius))
            }
            NativeShapeSettings::Cylinder {
                half_height,
                radius,
                convex_radius,
            } => {
                check_convex_radius(convex_radius)?;

                if !(half_height >= convex_radius) || !half_height.is_finite() {
                    return Err(NativeShapeError::InvalidHalfHeight(half_height));
                }

                if !(radius >= convex_radius) || !radius.is_finite() {
                    return Err(NativeShapeError::InvalidRadius(radius));
                }

                let shape = if convex_radius > 0.0 {
                    SharedShape::round_cylinder(
                        half_height - convex_radius,
                        radius - convex_radius,
                        convex_radius,
                    )
                } else {
                    SharedShape::cylinder(half_height, radius)
                };

                Ok(convex_geometry(shape, convex_radius))
            }
            NativeShapeSettings::ConvexHull {
                points,
                max_convex_radius,
            } => {
                check_convex_radius(max_convex_radius)?;

                if points.len() < 3 {
                    return Err(NativeShapeError::TooFewPoints(points.len()));
                }

                let shape = SharedShape::convex_hull(&points)
                    .ok_or(NativeShapeError::DegenerateHull(points.len()))?;

                Ok(convex_geometry(shape, max_convex_radius))
            }
            NativeShapeSettings::Mesh { triangles } => {
                let mut vertices = Vec::with_capacity(triangles.len() * 3);
                let mut indices = Vec::with_capacity(triangles.len());

                for [a, b, c] in triangles {
                    let base = vertices.len() as u32;
                    vertices.extend_from_slice(&[a, b, c]);
                    indices.push([base, base + 1, base + 2]);
                }

                let mesh = TriMesh::new(vertices, indices)?;
                Ok(static_geometry(SharedShape::new(mesh)))
            }
            NativeShapeSettings::HeightField {
                samples,
                offset,
                scale,
                sample_count,
            } => {
                if sample_count < 2 {
                    return Err(NativeShapeError::HeightFieldTooSmall(sample_count));
                }

                let side = sample_count as usize;
                let expected = side * side;

                if samples.len() != expected {
                    return Err(NativeShapeError::HeightFieldSampleCount {
                        sample_count,
                        expected,
                        actual: samples.len(),
                    });
                }

                if scale.iter().any(|s| !(*s > 0.0) || !s.is_finite()) {
                    return Err(NativeShapeError::InvalidSampleSpacing(scale));
                }

                let tiles = (side - 1) as Real;
                let heights = DMatrix::from_row_slice(side, side, &samples);
                let field_scale = Vector::new(scale.x * tiles, scale.y, scale.z * tiles);
                let field = static_geometry(SharedShape::new(HeightField::new(heights, field_scale)));

                // The field is centered on the origin, move it so its first sample lands on `offset`.
                let centered_offset = Vector::new(-field_scale.x / 2.0, 0.0, -field_scale.z / 2.0);
                let shift = offset - centered_offset;

                if shift == Vector::zeros() {
                    Ok(field)
                } else {
                    NativeShapeSettings::RotatedTranslated {
                        inner: field,
                        translation: shift,
                        rotation: Rotation::identity(),
                    }
                    .create()
                }
            }
            NativeShapeSettings::SeparationRay {
                length,
                slide_on_slope,
            } => {
                if length == 0.0 || !length.is_finite() {
                    return Err(NativeShapeError::InvalidLength(length));
                }

                let segment = Segment::new(Point::origin(), Point::new(0.0, 0.0, length));
                Ok(NativeShape::new(NativeShapeNode::SeparationRay {
                    segment,
                    slide_on_slope,
                }))
            }
            NativeShapeSettings::Scaled { inner, scale } => {
                inner
                    .check_scale(&scale)
                    .map_err(|reason| NativeShapeError::InvalidScale { scale, reason })?;

                Ok(NativeShape::new(NativeShapeNode::Scaled { inner, scale }))
            }
            NativeShapeSettings::RotatedTranslated {
                inner,
                translation,
                rotation,
            } => {
                if translation.iter().chain(rotation.coords.iter()).any(|x| !x.is_finite()) {
                    return Err(NativeShapeError::NonFiniteTransform);
                }

                let position = Isometry::from_parts(Translation::from(translation), rotation);
                Ok(NativeShape::new(NativeShapeNode::RotatedTranslated {
                    inner,
                    position,
                }))
            }
            NativeShapeSettings::OffsetCenterOfMass { inner, offset } => {
                if offset.iter().any(|x| !x.is_finite()) {
                    return Err(NativeShapeError::NonFiniteOffset(offset));
                }

                Ok(NativeShape::new(NativeShapeNode::OffsetCenterOfMass {
                    inner,
                    offset,
                }))
            }
            NativeShapeSettings::OverrideUserData { inner, user_data } => {
                Ok(NativeShape::new(NativeShapeNode::UserData { inner, user_data }))
            }
        }
    }
}

fn check_convex_radius(convex_radius: Real) -> Result<(), NativeShapeError> {
    if !(convex_radius >= 0.0) || !convex_radius.is_finite() {
        Err(NativeShapeError::InvalidConvexRadius(convex_radius))
    } else {
        Ok(())
    }
}

fn convex_geometry(shape: SharedShape, convex_radius: Real) -> NativeShape {
    let center_of_mass = shape.mass_properties(1.0).local_com;
    NativeShape::new(NativeShapeNode::Geometry {
        shape,
        convex_radius,
        center_of_mass,
    })
}

// Meshes and height fields are only ever static: their center of mass is the origin.
fn static_geometry(shape: SharedShape) -> NativeShape {
    NativeShape::new(NativeShapeNode::Geometry {
        shape,
        convex_radius: 0.0,
        center_of_mass: Point::origin(),
    })
}
