use crate::host::{Value, Vec3};
use crate::math::Real;
use crate::native::NativeShape;
use crate::shape::error::reported;
use crate::shape::owner::{owner_key, OwnerRefCounts};
use crate::shape::{
    BoxShape, CapsuleShape, ConcavePolygonShape, ConvexPolygonShape, CylinderShape,
    HeightMapShape, SeparationRayShape, Shape, ShapeError, ShapeOwner, ShapeType, SphereShape,
    WorldBoundaryShape,
};
use alloc::boxed::Box;
use alloc::sync::{Arc, Weak};
use parking_lot::Mutex;

#[derive(Debug)]
struct ShapeState {
    shape: Box<dyn Shape>,
    // Only ever built with a zero extra margin.
    native: Option<NativeShape>,
}

/// A shape description shared by any number of owners.
///
/// The native shape is built lazily by [`CollisionShape::try_build`] and cached until the
/// parameters of the shape change. Every change is propagated to the owners through
/// [`ShapeOwner::rebuild_shape`].
///
/// Two collision shapes are the same shape iff they are the same object: there is no value
/// equality.
#[derive(Debug)]
pub struct CollisionShape {
    state: Mutex<ShapeState>,
    owners: Mutex<OwnerRefCounts>,
}

/// Notifies the owners of a shape once it goes out of scope, whatever the exit path.
struct NotifyOwnersOnDrop<'a> {
    shape: &'a CollisionShape,
    lock: bool,
}

impl Drop for NotifyOwnersOnDrop<'_> {
    fn drop(&mut self) {
        self.shape.shape_changed(self.lock);
    }
}

impl CollisionShape {
    /// Wraps a shape description into a new collision shape without any owner.
    pub fn new(shape: impl Shape + 'static) -> Self {
        CollisionShape {
            state: Mutex::new(ShapeState {
                shape: Box::new(shape),
                native: None,
            }),
            owners: Mutex::new(OwnerRefCounts::default()),
        }
    }

    /// Creates an empty, invalid, shape of the given type.
    pub fn from_type(shape_type: ShapeType) -> Self {
        match shape_type {
            ShapeType::WorldBoundary => Self::new(WorldBoundaryShape::default()),
            ShapeType::SeparationRay => Self::new(SeparationRayShape::default()),
            ShapeType::Sphere => Self::new(SphereShape::default()),
            ShapeType::Box => Self::new(BoxShape::default()),
            ShapeType::Capsule => Self::new(CapsuleShape::default()),
            ShapeType::Cylinder => Self::new(CylinderShape::default()),
            ShapeType::ConvexPolygon => Self::new(ConvexPolygonShape::default()),
            ShapeType::ConcavePolygon => Self::new(ConcavePolygonShape::default()),
            ShapeType::HeightMap => Self::new(HeightMapShape::default()),
        }
    }

    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        self.state.lock().shape.shape_type()
    }

    /// The current parameters of this shape.
    pub fn data(&self) -> Value {
        self.state.lock().shape.data()
    }

    /// Replaces the parameters of this shape.
    ///
    /// The cached native shape is discarded and the owners are notified, even if `data` is
    /// rejected. Degenerate parameters leave the shape invalid and still return `Ok(())`.
    pub fn set_data(&self, data: &Value) -> Result<(), ShapeError> {
        let _notify = NotifyOwnersOnDrop {
            shape: self,
            lock: true,
        };

        let mut state = self.state.lock();
        state.native = None;
        state.shape.set_data(data).map_err(reported)
    }

    /// The convex radius of this shape.
    pub fn margin(&self) -> Real {
        self.state.lock().shape.margin()
    }

    /// Changes the convex radius of this shape.
    ///
    /// The cached native shape is discarded and the owners are notified. Kinds without a
    /// margin ignore the value.
    pub fn set_margin(&self, margin: Real) {
        let _notify = NotifyOwnersOnDrop {
            shape: self,
            lock: true,
        };

        let mut state = self.state.lock();
        state.native = None;
        state.shape.set_margin(margin);
    }

    /// Can a native shape be built out of the current parameters?
    pub fn is_valid(&self) -> bool {
        self.state.lock().shape.is_valid()
    }

    /// Is this shape convex?
    pub fn is_convex(&self) -> bool {
        self.state.lock().shape.is_convex()
    }

    /// Builds a brand-new native shape, bypassing the cache.
    ///
    /// The failure is returned without being logged.
    pub fn build(&self, extra_margin: Real) -> Result<NativeShape, ShapeError> {
        let state = self.state.lock();

        if !state.shape.is_valid() {
            return Err(ShapeError::Invalid(state.shape.shape_type()));
        }

        state.shape.build(extra_margin)
    }

    /// Returns the native shape for the current parameters, or `None` if the shape is invalid
    /// or could not be built.
    ///
    /// With a zero `extra_margin` the result is cached, and subsequent calls return the same
    /// native shape until the parameters change. A positive `extra_margin` always builds a new,
    /// uncached, native shape.
    pub fn try_build(&self, extra_margin: Real) -> Option<NativeShape> {
        let mut state = self.state.lock();

        if !state.shape.is_valid() {
            return None;
        }

        if extra_margin > 0.0 {
            return state.shape.build(extra_margin).map_err(reported).ok();
        }

        if let Some(native) = &state.native {
            return Some(native.clone());
        }

        let native = state.shape.build(0.0).map_err(reported).ok()?;
        state.native = Some(native.clone());
        Some(native)
    }

    /// The center of mass of the cached native shape.
    pub fn center_of_mass(&self) -> Result<Vec3, ShapeError> {
        self.state.lock()
            .native
            .as_ref()
            .map(|native| Vec3::from(native.center_of_mass()))
            .ok_or(ShapeError::NotBuilt)
            .map_err(reported)
    }

    /// Registers one more reference from `owner` to this shape.
    pub fn add_owner<O: ShapeOwner + 'static>(&self, owner: &Arc<O>) {
        let key = owner_key(&**owner);
        let weak: Weak<O> = Arc::downgrade(owner);
        let weak: Weak<dyn ShapeOwner> = weak;
        self.owners.lock().add(key, weak);
    }

    /// Releases one reference from `owner` to this shape.
    ///
    /// Does nothing if `owner` doesn't reference this shape.
    pub fn remove_owner(&self, owner: &dyn ShapeOwner) {
        self.owners.lock().remove(owner_key(owner));
    }

    /// The number of distinct owners referencing this shape.
    pub fn owner_count(&self) -> usize {
        self.owners.lock().len()
    }

    /// The number of references from `owner` to this shape.
    pub fn owner_ref_count(&self, owner: &dyn ShapeOwner) -> u32 {
        self.owners.lock().ref_count(owner_key(owner))
    }

    /// Asks every owner to stop using this shape.
    pub fn remove_self(&self, lock: bool) {
        let owners = self.owners.lock().snapshot();

        for owner in owners {
            owner.remove_shape(self, lock);
        }
    }

    /// Asks every owner to rebuild the geometry derived from this shape.
    pub fn shape_changed(&self, lock: bool) {
        let owners = self.owners.lock().snapshot();

        for owner in owners {
            owner.rebuild_shape(lock);
        }
    }
}

impl Drop for CollisionShape {
    fn drop(&mut self) {
        if !self.owners.lock().is_empty() {
            self.remove_self(true);
        }
    }
}
