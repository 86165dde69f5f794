use crate::{capsule, faces, height_map, shape_with};
use approx::assert_relative_eq;
use shapebridge3d::host::{Value, Vec3};
use shapebridge3d::native::NativeShape;
use shapebridge3d::shape::{CollisionShape, ShapeError, ShapeType};

#[test]
fn zero_extra_margin_is_cached() {
    let shape = shape_with(ShapeType::Sphere, &Value::Float(5.0));

    let a = shape.try_build(0.0).unwrap();
    let b = shape.try_build(0.0).unwrap();
    assert!(NativeShape::ptr_eq(&a, &b));

    let c = shape.try_build(0.1).unwrap();
    let d = shape.try_build(0.1).unwrap();
    assert!(!NativeShape::ptr_eq(&c, &d));
    assert!(!NativeShape::ptr_eq(&a, &c));

    // Building with an extra margin leaves the cache alone.
    assert!(NativeShape::ptr_eq(&a, &shape.try_build(0.0).unwrap()));
}

#[test]
fn sphere_radius() {
    for radius in [0.0, -1.0] {
        let shape = shape_with(ShapeType::Sphere, &Value::Float(radius));
        assert!(!shape.is_valid());
        assert!(shape.try_build(0.0).is_none());
    }

    let shape = shape_with(ShapeType::Sphere, &Value::Float(5.0));
    let native = shape.try_build(0.0).unwrap();
    assert_relative_eq!(native.local_bounding_sphere().radius(), 5.0);

    let inflated = shape.try_build(0.5).unwrap();
    assert_relative_eq!(inflated.local_bounding_sphere().radius(), 5.5);
}

#[test]
fn capsule_height_and_radius() {
    let shape = CollisionShape::from_type(ShapeType::Capsule);
    assert_eq!(
        shape.set_data(&capsule(4.0, 3.0)),
        Err(ShapeError::CapsuleTooShort {
            height: 4.0,
            radius: 3.0
        })
    );
    assert!(!shape.is_valid());
    assert!(shape.try_build(0.0).is_none());

    shape.set_data(&capsule(10.0, 3.0)).unwrap();
    let native = shape.try_build(0.0).unwrap();
    let capsule = native.geometry().and_then(|s| s.as_capsule()).unwrap();
    assert_relative_eq!(capsule.half_height(), 2.0);
    assert_relative_eq!(capsule.radius, 3.0);
}

#[test]
fn concave_polygon_triangles() {
    let shape = shape_with(ShapeType::ConcavePolygon, &faces(3, false));
    let native = shape.try_build(0.0).unwrap();
    let mesh = native.geometry().and_then(|s| s.as_trimesh()).unwrap();
    assert_eq!(mesh.num_triangles(), 3);
    assert_eq!(mesh.triangle(0).a.x, 0.0);
    assert_eq!(mesh.triangle(0).a.z, 1.0);
    assert!(!shape.is_convex());

    let shape = shape_with(ShapeType::ConcavePolygon, &faces(3, true));
    let native = shape.try_build(0.0).unwrap();
    let mesh = native.geometry().and_then(|s| s.as_trimesh()).unwrap();
    assert_eq!(mesh.num_triangles(), 6);
}

#[test]
fn height_map_dimensions() {
    let shape = shape_with(ShapeType::HeightMap, &height_map(4, 4, 16));
    let native = shape.try_build(0.0).unwrap();
    let field = native.geometry().and_then(|s| s.as_heightfield()).unwrap();
    assert_eq!(field.nrows(), 3);
    assert_eq!(field.ncols(), 3);
    assert_relative_eq!(native.local_aabb().mins.x, -1.5);
    assert_relative_eq!(native.local_aabb().mins.z, -1.5);
    assert_eq!(shape.center_of_mass(), Ok(Vec3::ZERO));

    let shape = CollisionShape::from_type(ShapeType::HeightMap);
    assert!(shape.set_data(&height_map(4, 8, 32)).is_err());
    assert!(!shape.is_valid());
    assert!(shape.set_data(&height_map(3, 3, 9)).is_err());
    assert!(!shape.is_valid());
}

#[test]
fn world_boundary_never_builds() {
    let shape = shape_with(
        ShapeType::WorldBoundary,
        &Value::Plane(shapebridge3d::host::Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0)),
    );
    assert!(shape.is_valid());
    assert!(shape.try_build(0.0).is_none());
    assert!(matches!(shape.build(0.0), Err(ShapeError::Unsupported(_))));
}

#[test]
fn margin_changes_clear_the_cache() {
    let shape = shape_with(ShapeType::Box, &Value::Vector3(Vec3::splat(0.5)));
    let before = shape.try_build(0.0).unwrap();
    assert_relative_eq!(before.convex_radius(), 0.04);

    shape.set_margin(0.1);
    assert_relative_eq!(shape.margin(), 0.1);
    let after = shape.try_build(0.0).unwrap();
    assert!(!NativeShape::ptr_eq(&before, &after));
    assert_relative_eq!(after.convex_radius(), 0.1);

    shape.set_margin(0.5);
    assert!(!shape.is_valid());
    assert!(shape.try_build(0.0).is_none());

    // The half extents were kept, a smaller margin makes the box valid again.
    shape.set_margin(0.2);
    assert!(shape.is_valid());
}
