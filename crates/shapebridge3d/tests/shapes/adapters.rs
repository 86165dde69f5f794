use crate::{capsule, shape_with};
use approx::assert_relative_eq;
use shapebridge3d::adapters::{
    with_center_of_mass, with_center_of_mass_offset, with_scale, with_transform, with_user_data,
};
use shapebridge3d::host::{rotation_to_basis, Transform3D, Value, Vec3};
use shapebridge3d::math::{Point, Rotation, Vector};
use shapebridge3d::native::{NativeShape, NativeShapeError};
use shapebridge3d::shape::{ShapeError, ShapeType};

#[test]
fn spheres_and_capsules_only_scale_uniformly() {
    let sphere = shape_with(ShapeType::Sphere, &Value::Float(1.0))
        .try_build(0.0)
        .unwrap();
    let scaled = with_scale(&sphere, Vec3::splat(3.0)).unwrap();
    assert_relative_eq!(scaled.local_bounding_sphere().radius(), 3.0);

    let err = with_scale(&sphere, Vec3::new(1.0, 2.0, 1.0)).unwrap_err();
    assert!(matches!(
        err,
        ShapeError::Scale {
            source: NativeShapeError::InvalidScale { .. },
            ..
        }
    ));
    assert!(err.to_string().starts_with("Failed to scale shape with scale '(1, 2, 1)'"));

    let capsule = shape_with(ShapeType::Capsule, &capsule(4.0, 1.0))
        .try_build(0.0)
        .unwrap();
    assert!(with_scale(&capsule, Vec3::new(2.0, 1.0, 2.0)).is_err());
}

#[test]
fn rotated_shapes_only_scale_uniformly() {
    let cuboid = shape_with(ShapeType::Box, &Value::Vector3(Vec3::ONE))
        .try_build(0.0)
        .unwrap();
    let rotation = Rotation::from_axis_angle(&Vector::z_axis(), 0.5);
    let transform = Transform3D::new(rotation_to_basis(&rotation), Vec3::ZERO);
    let rotated = with_transform(&cuboid, &transform, Vec3::ONE).unwrap();

    assert!(with_scale(&rotated, Vec3::new(1.0, 2.0, 1.0)).is_err());
    assert!(with_scale(&rotated, Vec3::splat(2.0)).is_ok());
}

#[test]
fn wrapped_shapes_keep_their_geometry() {
    let cuboid = shape_with(ShapeType::Box, &Value::Vector3(Vec3::new(1.0, 2.0, 3.0)))
        .try_build(0.0)
        .unwrap();

    let transform = Transform3D::from_origin(Vec3::new(0.0, 5.0, 0.0));
    let moved = with_transform(&cuboid, &transform, Vec3::new(1.0, 1.0, -1.0)).unwrap();
    let offset = with_center_of_mass_offset(&moved, Vec3::new(0.0, 0.0, 1.0)).unwrap();
    let tagged = with_user_data(&offset, 7).unwrap();

    assert!(NativeShape::ptr_eq(tagged.leaf(), &cuboid));
    assert_eq!(tagged.user_data(), 7);
    assert_relative_eq!(tagged.center_of_mass(), Point::new(0.0, 5.0, 1.0));
    assert_relative_eq!(
        tagged.local_aabb().maxs,
        Point::new(1.0, 7.0, 3.0),
        epsilon = 1.0e-5
    );
    assert!(tagged.is_convex());

    let recentered = with_center_of_mass(&tagged, Vec3::new(0.0, 5.0, 1.0)).unwrap();
    assert!(NativeShape::ptr_eq(&recentered, &tagged));
}
