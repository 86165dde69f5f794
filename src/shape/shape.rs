use crate::host::Value;
use crate::math::Real;
use crate::native::NativeShape;
use crate::shape::ShapeError;
use core::fmt;

/// Enum representing the type of a shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// An infinite plane bounding the world.
    WorldBoundary,
    /// A ray keeping bodies apart along its axis.
    SeparationRay,
    /// A sphere shape.
    Sphere,
    /// A box shape.
    Box,
    /// A capsule shape.
    Capsule,
    /// A cylinder shape.
    Cylinder,
    /// A convex hull of a vertex list.
    ConvexPolygon,
    /// A triangle soup.
    ConcavePolygon,
    /// A square grid of height samples.
    HeightMap,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeType::WorldBoundary => "world boundary",
            ShapeType::SeparationRay => "separation ray",
            ShapeType::Sphere => "sphere",
            ShapeType::Box => "box",
            ShapeType::Capsule => "capsule",
            ShapeType::Cylinder => "cylinder",
            ShapeType::ConvexPolygon => "convex polygon",
            ShapeType::ConcavePolygon => "concave polygon",
            ShapeType::HeightMap => "height map",
        };
        f.pad(name)
    }
}

/// Trait implemented by all the kinds of shape descriptions.
///
/// A shape description owns a set of validated parameters and knows how to turn them into a
/// [`NativeShape`]. Caching, ownership and change notification are handled by
/// [`CollisionShape`](crate::shape::CollisionShape), which wraps a `Box<dyn Shape>`.
pub trait Shape: fmt::Debug + Send + Sync {
    /// The type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Serializes the current parameters of this shape.
    fn data(&self) -> Value;

    /// Replaces the parameters of this shape.
    ///
    /// The previous parameters are always cleared first. Degenerate parameters leave the shape
    /// invalid and return `Ok(())`. Malformed or inconsistent parameters leave the shape invalid
    /// and return an error.
    fn set_data(&mut self, data: &Value) -> Result<(), ShapeError>;

    /// The convex radius used by this shape for contact generation.
    fn margin(&self) -> Real {
        0.0
    }

    /// Sets the convex radius of this shape and validates the current parameters against it.
    ///
    /// Shapes without a margin ignore it.
    fn set_margin(&mut self, _margin: Real) {}

    /// Can this shape be built?
    fn is_valid(&self) -> bool;

    /// Is this shape convex?
    fn is_convex(&self) -> bool;

    /// Constructs a new native shape out of the current parameters, inflated by `extra_margin`.
    ///
    /// Must only be called on a valid shape.
    fn build(&self, extra_margin: Real) -> Result<NativeShape, ShapeError>;
}
