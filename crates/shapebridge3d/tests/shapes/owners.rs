use crate::shape_with;
use shapebridge3d::host::Value;
use shapebridge3d::native::NativeShape;
use shapebridge3d::shape::{CollisionShape, ShapeOwner, ShapeType};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Body {
    removals: AtomicUsize,
    rebuilds: AtomicUsize,
    // Detached from the notifying shape when this body is told to remove it.
    peer: Mutex<Option<Arc<Body>>>,
}

impl ShapeOwner for Body {
    fn remove_shape(&self, shape: &CollisionShape, lock: bool) {
        assert!(lock);
        let _ = self.removals.fetch_add(1, Ordering::SeqCst);

        while shape.owner_ref_count(self) > 0 {
            shape.remove_owner(self);
        }

        if let Some(peer) = self.peer.lock().unwrap().take() {
            while shape.owner_ref_count(&*peer) > 0 {
                shape.remove_owner(&*peer);
            }
        }
    }

    fn rebuild_shape(&self, _lock: bool) {
        let _ = self.rebuilds.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn each_add_needs_a_remove() {
    let shape = CollisionShape::from_type(ShapeType::Sphere);
    let a = Arc::new(Body::default());

    shape.add_owner(&a);
    shape.add_owner(&a);
    assert_eq!(shape.owner_ref_count(&*a), 2);

    shape.remove_owner(&*a);
    assert_eq!(shape.owner_ref_count(&*a), 1);
    assert_eq!(shape.owner_count(), 1);

    shape.remove_owner(&*a);
    assert_eq!(shape.owner_ref_count(&*a), 0);
    assert_eq!(shape.owner_count(), 0);

    // Unknown owners are ignored.
    shape.remove_owner(&*a);
    assert_eq!(shape.owner_count(), 0);
}

#[test]
fn remove_self_notifies_every_owner_once() {
    let shape = CollisionShape::from_type(ShapeType::Sphere);
    let a = Arc::new(Body::default());
    let b = Arc::new(Body::default());
    *a.peer.lock().unwrap() = Some(b.clone());
    *b.peer.lock().unwrap() = Some(a.clone());

    shape.add_owner(&a);
    shape.add_owner(&b);
    shape.add_owner(&b);

    shape.remove_self(true);

    assert_eq!(a.removals.load(Ordering::SeqCst), 1);
    assert_eq!(b.removals.load(Ordering::SeqCst), 1);
    assert_eq!(shape.owner_count(), 0);
}

#[test]
fn every_change_is_propagated() {
    let shape = CollisionShape::from_type(ShapeType::Sphere);
    let a = Arc::new(Body::default());
    let b = Arc::new(Body::default());
    shape.add_owner(&a);
    shape.add_owner(&b);

    shape.set_data(&Value::Float(1.0)).unwrap();
    shape.set_data(&Value::Float(-1.0)).unwrap();
    assert!(shape.set_data(&Value::Nil).is_err());

    assert_eq!(a.rebuilds.load(Ordering::SeqCst), 3);
    assert_eq!(b.rebuilds.load(Ordering::SeqCst), 3);
}

#[test]
fn dropping_the_shape_detaches_its_owners() {
    let a = Arc::new(Body::default());
    let shape = shape_with(ShapeType::Sphere, &Value::Float(1.0));
    shape.add_owner(&a);
    drop(shape);

    assert_eq!(a.removals.load(Ordering::SeqCst), 1);
}

#[test]
fn dropped_owners_are_skipped() {
    let shape = CollisionShape::from_type(ShapeType::Sphere);
    let a = Arc::new(Body::default());
    shape.add_owner(&a);
    drop(a);

    shape.set_data(&Value::Float(1.0)).unwrap();
    shape.remove_self(true);
    assert_eq!(shape.owner_count(), 1);
}

#[test]
fn concurrent_first_builds_share_one_native_shape() {
    let shape = shape_with(ShapeType::Sphere, &Value::Float(2.0));

    let built: Vec<NativeShape> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| shape.try_build(0.0).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for native in &built[1..] {
        assert!(NativeShape::ptr_eq(&built[0], native));
    }
}
