use crate::{capsule, faces, height_map};
use oorandom::Rand32;
use shapebridge3d::host::{Plane, Value, Vec3};
use shapebridge3d::shape::{CollisionShape, ShapeType};

fn random_vec3(rng: &mut Rand32, range: f32) -> Vec3 {
    Vec3::new(
        (rng.rand_float() * 2.0 - 1.0) * range,
        (rng.rand_float() * 2.0 - 1.0) * range,
        (rng.rand_float() * 2.0 - 1.0) * range,
    )
}

// Values within and around the validity bounds of each kind.
fn random_data(rng: &mut Rand32, shape_type: ShapeType) -> Value {
    let float = |rng: &mut Rand32| (rng.rand_float() * 12.0 - 2.0) as f64;

    match shape_type {
        ShapeType::WorldBoundary => Value::Plane(Plane::new(random_vec3(rng, 1.0), 0.0)),
        ShapeType::SeparationRay => Value::dictionary([
            ("length", Value::Float(float(rng))),
            ("slide_on_slope", Value::Bool(rng.rand_u32() % 2 == 0)),
        ]),
        ShapeType::Sphere => Value::Float(float(rng)),
        ShapeType::Box => Value::Vector3(random_vec3(rng, 2.0)),
        ShapeType::Capsule => {
            let radius = rng.rand_float() as f64 * 2.0;
            capsule(radius * 2.0 + float(rng).abs(), radius)
        }
        ShapeType::Cylinder => Value::dictionary([
            ("height", Value::Float(float(rng))),
            ("radius", Value::Float(float(rng))),
        ]),
        ShapeType::ConvexPolygon => {
            let count = [0, 2, 6, 10][rng.rand_range(0..4) as usize];
            Value::Vector3Array((0..count).map(|_| random_vec3(rng, 3.0)).collect())
        }
        ShapeType::ConcavePolygon => {
            faces(rng.rand_range(0..5) as usize, rng.rand_u32() % 2 == 0)
        }
        ShapeType::HeightMap => {
            let side = [2, 4, 8, 16][rng.rand_range(0..4) as usize];
            height_map(side, side, (side * side) as usize)
        }
    }
}

const SHAPE_TYPES: [ShapeType; 9] = [
    ShapeType::WorldBoundary,
    ShapeType::SeparationRay,
    ShapeType::Sphere,
    ShapeType::Box,
    ShapeType::Capsule,
    ShapeType::Cylinder,
    ShapeType::ConvexPolygon,
    ShapeType::ConcavePolygon,
    ShapeType::HeightMap,
];

#[test]
fn set_data_of_data_is_idempotent() {
    let mut rng = Rand32::new(42);

    for _ in 0..50 {
        for shape_type in SHAPE_TYPES {
            let original = CollisionShape::from_type(shape_type);
            assert_eq!(original.shape_type(), shape_type);
            assert!(original.set_data(&random_data(&mut rng, shape_type)).is_ok());

            let copy = CollisionShape::from_type(shape_type);
            copy.set_data(&original.data()).unwrap();

            assert_eq!(copy.data(), original.data());
            assert_eq!(copy.is_valid(), original.is_valid());
            assert_eq!(copy.is_convex(), original.is_convex());

            let built = original.try_build(0.0);
            let rebuilt = copy.try_build(0.0);
            assert_eq!(built.is_some(), rebuilt.is_some());

            if let (Some(built), Some(rebuilt)) = (built, rebuilt) {
                assert_eq!(built.local_aabb(), rebuilt.local_aabb());
                assert_eq!(built.center_of_mass(), rebuilt.center_of_mass());
            }
        }
    }
}
