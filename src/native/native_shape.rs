use crate::math::{Isometry, Point, Real, Vector, CMP_EPSILON};
use alloc::sync::Arc;
use parry3d::bounding_volume::{Aabb, BoundingSphere};
use parry3d::shape::{Segment, Shape, SharedShape, TypedShape};

/// An immutable, reference-counted shape built by the native engine.
///
/// Cloning a `NativeShape` only increments a reference count. Two handles refer to the same
/// native object iff [`NativeShape::ptr_eq`] returns `true`.
#[derive(Clone, Debug)]
pub struct NativeShape(pub(crate) Arc<NativeShapeNode>);

/// The node of a native shape tree.
///
/// Leaves hold actual geometry, all the other variants wrap another native shape.
#[derive(Debug)]
pub enum NativeShapeNode {
    /// A geometric primitive.
    Geometry {
        /// The geometry.
        shape: SharedShape,
        /// The radius of the rounded border used for contact generation.
        convex_radius: Real,
        /// The center of mass, in the local frame of `shape`.
        center_of_mass: Point<Real>,
    },
    /// A ray pointing along the local `+z` axis, used to keep bodies apart.
    SeparationRay {
        /// The ray, from the origin to its tip.
        segment: Segment,
        /// Whether contacts should push along the surface normal rather than the ray axis.
        slide_on_slope: bool,
    },
    /// A shape scaled non-uniformly, in its own local frame.
    Scaled {
        /// The shape being scaled.
        inner: NativeShape,
        /// The scaling factor along each axis.
        scale: Vector<Real>,
    },
    /// A shape rotated, then translated.
    RotatedTranslated {
        /// The shape being moved.
        inner: NativeShape,
        /// The rigid transform applied to `inner`.
        position: Isometry<Real>,
    },
    /// A shape with a relocated center of mass.
    OffsetCenterOfMass {
        /// The wrapped shape.
        inner: NativeShape,
        /// Added to the center of mass of `inner`.
        offset: Vector<Real>,
    },
    /// A shape tagged with a user-defined identifier.
    UserData {
        /// The wrapped shape.
        inner: NativeShape,
        /// The identifier returned by [`NativeShape::user_data`].
        user_data: u64,
    },
}

impl NativeShape {
    pub(crate) fn new(node: NativeShapeNode) -> Self {
        NativeShape(Arc::new(node))
    }

    /// Does `a` and `b` refer to the same native object?
    #[inline]
    pub fn ptr_eq(a: &NativeShape, b: &NativeShape) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// The node at the root of this shape.
    #[inline]
    pub fn node(&self) -> &NativeShapeNode {
        &self.0
    }

    /// The shape wrapped by this one, if this is not a leaf.
    pub fn inner(&self) -> Option<&NativeShape> {
        match self.node() {
            NativeShapeNode::Geometry { .. } | NativeShapeNode::SeparationRay { .. } => None,
            NativeShapeNode::Scaled { inner, .. }
            | NativeShapeNode::RotatedTranslated { inner, .. }
            | NativeShapeNode::OffsetCenterOfMass { inner, .. }
            | NativeShapeNode::UserData { inner, .. } => Some(inner),
        }
    }

    /// The leaf at the bottom of the chain of wrappers.
    pub fn leaf(&self) -> &NativeShape {
        let mut curr = self;
        while let Some(inner) = curr.inner() {
            curr = inner;
        }
        curr
    }

    /// The geometry of this shape, if its root is a [`NativeShapeNode::Geometry`].
    pub fn geometry(&self) -> Option<&SharedShape> {
        match self.node() {
            NativeShapeNode::Geometry { shape, .. } => Some(shape),
            _ => None,
        }
    }

    /// The radius of the rounded border of the leaf geometry.
    pub fn convex_radius(&self) -> Real {
        match self.leaf().node() {
            NativeShapeNode::Geometry { convex_radius, .. } => *convex_radius,
            _ => 0.0,
        }
    }

    /// The identifier attached by the outermost [`NativeShapeNode::UserData`] wrapper, or zero.
    pub fn user_data(&self) -> u64 {
        match self.node() {
            NativeShapeNode::UserData { user_data, .. } => *user_data,
            _ => self.inner().map(|inner| inner.user_data()).unwrap_or(0),
        }
    }

    /// Is this shape convex?
    pub fn is_convex(&self) -> bool {
        match self.node() {
            NativeShapeNode::Geometry { shape, .. } => shape.is_convex(),
            NativeShapeNode::SeparationRay { .. } => true,
            _ => self.inner().is_some_and(|inner| inner.is_convex()),
        }
    }

    /// The center of mass of this shape, in its local frame.
    pub fn center_of_mass(&self) -> Point<Real> {
        match self.node() {
            NativeShapeNode::Geometry { center_of_mass, .. } => *center_of_mass,
            NativeShapeNode::SeparationRay { .. } => Point::origin(),
            NativeShapeNode::Scaled { inner, scale } => {
                inner.center_of_mass().coords.component_mul(scale).into()
            }
            NativeShapeNode::RotatedTranslated { inner, position } => {
                position * inner.center_of_mass()
            }
            NativeShapeNode::OffsetCenterOfMass { inner, offset } => {
                inner.center_of_mass() + offset
            }
            NativeShapeNode::UserData { inner, .. } => inner.center_of_mass(),
        }
    }

    /// The axis-aligned bounding box of this shape, in its local frame.
    pub fn local_aabb(&self) -> Aabb {
        match self.node() {
            NativeShapeNode::Geometry { shape, .. } => shape.compute_local_aabb(),
            NativeShapeNode::SeparationRay { segment, .. } => segment.compute_local_aabb(),
            NativeShapeNode::Scaled { inner, scale } => inner.local_aabb().scaled(scale),
            NativeShapeNode::RotatedTranslated { inner, position } => {
                inner.local_aabb().transform_by(position)
            }
            NativeShapeNode::OffsetCenterOfMass { inner, .. }
            | NativeShapeNode::UserData { inner, .. } => inner.local_aabb(),
        }
    }

    /// A bounding sphere of this shape, in its local frame.
    pub fn local_bounding_sphere(&self) -> BoundingSphere {
        match self.node() {
            NativeShapeNode::Geometry { shape, .. } => shape.compute_local_bounding_sphere(),
            NativeShapeNode::SeparationRay { segment, .. } => segment.compute_local_bounding_sphere(),
            NativeShapeNode::Scaled { inner, scale } => {
                let sphere = inner.local_bounding_sphere();
                let center = sphere.center().coords.component_mul(scale);
                BoundingSphere::new(center.into(), sphere.radius() * scale.abs().max())
            }
            NativeShapeNode::RotatedTranslated { inner, position } => {
                let sphere = inner.local_bounding_sphere();
                BoundingSphere::new(position * sphere.center(), sphere.radius())
            }
            NativeShapeNode::OffsetCenterOfMass { inner, .. }
            | NativeShapeNode::UserData { inner, .. } => inner.local_bounding_sphere(),
        }
    }

    /// Checks whether this shape can be wrapped into a [`NativeShapeNode::Scaled`] with the
    /// given `scale`.
    ///
    /// Returns the reason of the rejection otherwise.
    pub fn check_scale(&self, scale: &Vector<Real>) -> Result<(), &'static str> {
        if scale.iter().any(|s| !s.is_finite()) {
            return Err("scale must be finite");
        }

        if scale.iter().any(|s| s.abs() <= CMP_EPSILON) {
            return Err("scale cannot be zero");
        }

        match self.node() {
            NativeShapeNode::Geometry { shape, .. } => match shape.as_typed_shape() {
                TypedShape::Ball(_) | TypedShape::Capsule(_) if !is_uniform(scale) => {
                    Err("spheres and capsules only support uniform scaling")
                }
                TypedShape::Cylinder(_) | TypedShape::RoundCylinder(_)
                    if (scale.x.abs() - scale.z.abs()).abs() > CMP_EPSILON =>
                {
                    Err("cylinders require the same scale along their x and z axes")
                }
                _ => Ok(()),
            },
            NativeShapeNode::SeparationRay { .. } => Ok(()),
            NativeShapeNode::Scaled {
                inner,
                scale: inner_scale,
            } => inner.check_scale(&scale.component_mul(inner_scale)),
            NativeShapeNode::RotatedTranslated { inner, position } => {
                if position.rotation.angle() <= CMP_EPSILON || is_uniform(scale) {
                    inner.check_scale(scale)
                } else {
                    Err("rotated shapes only support uniform scaling")
                }
            }
            NativeShapeNode::OffsetCenterOfMass { inner, .. }
            | NativeShapeNode::UserData { inner, .. } => inner.check_scale(scale),
        }
    }
}

fn is_uniform(scale: &Vector<Real>) -> bool {
    let abs = scale.abs();
    (abs.x - abs.y).abs() <= CMP_EPSILON && (abs.x - abs.z).abs() <= CMP_EPSILON
}
