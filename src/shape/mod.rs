//! Shape descriptions, and the shared collision shapes wrapping them.

pub use self::box_shape::BoxShape;
pub use self::capsule_shape::CapsuleShape;
pub use self::collision_shape::CollisionShape;
pub use self::concave_polygon_shape::ConcavePolygonShape;
pub use self::convex_polygon_shape::ConvexPolygonShape;
pub use self::cylinder_shape::CylinderShape;
pub use self::error::ShapeError;
pub use self::height_map_shape::HeightMapShape;
pub use self::owner::ShapeOwner;
pub use self::separation_ray_shape::SeparationRayShape;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};
pub use self::sphere_shape::SphereShape;
pub use self::world_boundary_shape::WorldBoundaryShape;

/// The margin of newly created boxes, cylinders and convex polygons.
pub const DEFAULT_MARGIN: crate::math::Real = 0.04;

mod box_shape;
mod capsule_shape;
mod collision_shape;
mod concave_polygon_shape;
mod convex_polygon_shape;
mod cylinder_shape;
mod data;
pub(crate) mod error;
mod height_map_shape;
mod owner;
mod separation_ray_shape;
mod shape;
mod sphere_shape;
mod world_boundary_shape;
