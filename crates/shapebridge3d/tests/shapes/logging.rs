use crate::{capsule, faces, height_map, shape_with};
use log::{Level, LevelFilter, Log, Metadata, Record};
use shapebridge3d::host::{Plane, Value, Vec3};
use shapebridge3d::shape::{CollisionShape, ShapeType};
use core::cell::RefCell;
use std::sync::Once;

// Tests run on parallel threads, so each thread only sees its own records.
thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct RecordingLogger;

impl Log for RecordingLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: RecordingLogger = RecordingLogger;

/// Runs `f` and returns the log records it emitted on the current thread.
fn records_of(f: impl FnOnce()) -> Vec<(Level, String)> {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });

    RECORDS.with(|records| records.borrow_mut().clear());
    f();
    RECORDS.with(|records| records.take())
}

fn levels(records: &[(Level, String)]) -> Vec<Level> {
    records.iter().map(|(level, _)| *level).collect()
}

#[test]
fn degenerate_parameters_are_not_logged() {
    let inputs = [
        (ShapeType::Sphere, Value::Float(0.0)),
        (ShapeType::Sphere, Value::Float(-1.0)),
        (ShapeType::Capsule, capsule(0.0, 1.0)),
        (ShapeType::ConcavePolygon, faces(0, false)),
        (ShapeType::HeightMap, height_map(2, 2, 4)),
        (ShapeType::HeightMap, height_map(4, 4, 0)),
    ];

    for (shape_type, data) in inputs {
        let records = records_of(|| {
            let shape = shape_with(shape_type, &data);
            assert!(!shape.is_valid());
            assert!(shape.try_build(0.0).is_none());
        });
        assert!(records.is_empty(), "{shape_type}: {records:?}");
    }
}

#[test]
fn rejected_parameters_are_logged_once_as_errors() {
    let inputs = [
        (ShapeType::Sphere, Value::Bool(true)),
        (ShapeType::Capsule, capsule(2.0, 3.0)),
        (ShapeType::ConcavePolygon, Value::Float(1.0)),
        (ShapeType::HeightMap, height_map(4, 8, 32)),
        (ShapeType::HeightMap, height_map(3, 3, 9)),
    ];

    for (shape_type, data) in inputs {
        let shape = CollisionShape::from_type(shape_type);
        let records = records_of(|| assert!(shape.set_data(&data).is_err()));
        assert_eq!(levels(&records), [Level::Error], "{shape_type}");
    }
}

#[test]
fn build_failures_are_logged_by_try_build_only() {
    let shape = shape_with(
        ShapeType::WorldBoundary,
        &Value::Plane(Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0)),
    );
    assert!(shape.is_valid());

    let records = records_of(|| assert!(shape.build(0.0).is_err()));
    assert!(records.is_empty());

    let records = records_of(|| assert!(shape.try_build(0.0).is_none()));
    assert_eq!(levels(&records), [Level::Error]);
    assert!(records[0].1.contains("box shapes"));
}

#[test]
fn extra_margin_on_static_shapes_is_warned_about() {
    let inputs = [
        (ShapeType::ConcavePolygon, faces(2, true)),
        (ShapeType::HeightMap, height_map(4, 4, 16)),
    ];

    for (shape_type, data) in inputs {
        let shape = shape_with(shape_type, &data);

        let records = records_of(|| assert!(shape.try_build(0.0).is_some()));
        assert!(records.is_empty(), "{shape_type}: {records:?}");

        let records = records_of(|| assert!(shape.try_build(0.5).is_some()));
        assert_eq!(levels(&records), [Level::Warn], "{shape_type}");
        assert!(records[0].1.contains("extra margin"));
    }
}

#[test]
fn missing_center_of_mass_is_logged() {
    let shape = shape_with(ShapeType::Sphere, &Value::Float(1.0));

    let records = records_of(|| assert!(shape.center_of_mass().is_err()));
    assert_eq!(levels(&records), [Level::Error]);

    let _ = shape.try_build(0.0).unwrap();
    let records = records_of(|| assert!(shape.center_of_mass().is_ok()));
    assert!(records.is_empty());
}
