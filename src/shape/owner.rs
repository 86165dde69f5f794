use crate::shape::CollisionShape;
use alloc::sync::{Arc, Weak};
use smallvec::SmallVec;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// A body, or any other object, referencing one or more [`CollisionShape`].
///
/// Implementors must not call back into [`CollisionShape::remove_self`] or
/// [`CollisionShape::shape_changed`] of the shape notifying them.
pub trait ShapeOwner: Send + Sync {
    /// Called when `shape` is being destroyed. The owner is expected to stop using it, and to
    /// call [`CollisionShape::remove_owner`] once for every reference it holds.
    fn remove_shape(&self, shape: &CollisionShape, lock: bool);

    /// Called when the parameters of one of the shapes used by this owner changed, making any
    /// geometry derived from it stale.
    fn rebuild_shape(&self, lock: bool);
}

/// The identity of an owner: the address of the object.
pub(crate) type OwnerKey = usize;

pub(crate) fn owner_key(owner: &dyn ShapeOwner) -> OwnerKey {
    owner as *const dyn ShapeOwner as *const () as usize
}

#[derive(Debug)]
struct OwnerEntry {
    owner: Weak<dyn ShapeOwner>,
    ref_count: u32,
}

/// The number of references held by each owner of a shape.
///
/// An owner is present iff its reference count is strictly positive.
#[derive(Debug, Default)]
pub(crate) struct OwnerRefCounts {
    entries: HashMap<OwnerKey, OwnerEntry>,
}

impl OwnerRefCounts {
    pub fn add(&mut self, key: OwnerKey, owner: Weak<dyn ShapeOwner>) {
        match self.entries.entry(key) {
            Entry::Occupied(mut entry) => {
                let entry = entry.get_mut();

                // The previous owner at this address was dropped without detaching itself.
                if entry.owner.strong_count() == 0 {
                    log::debug!("Replacing a dropped shape owner that was never removed.");
                    *entry = OwnerEntry {
                        owner,
                        ref_count: 0,
                    };
                }

                entry.ref_count += 1;
            }
            Entry::Vacant(entry) => {
                let _ = entry.insert(OwnerEntry {
                    owner,
                    ref_count: 1,
                });
            }
        }
    }

    pub fn remove(&mut self, key: OwnerKey) {
        if let Entry::Occupied(mut entry) = self.entries.entry(key) {
            entry.get_mut().ref_count -= 1;

            if entry.get().ref_count == 0 {
                let _ = entry.remove();
            }
        }
    }

    pub fn ref_count(&self, key: OwnerKey) -> u32 {
        self.entries.get(&key).map_or(0, |entry| entry.ref_count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The owners that are still alive, copied out so the map can be modified while they are
    /// notified.
    pub fn snapshot(&self) -> SmallVec<[Arc<dyn ShapeOwner>; 4]> {
        self.entries
            .values()
            .filter_map(|entry| {
                let owner = entry.owner.upgrade();
                if owner.is_none() {
                    log::debug!("Skipping a dropped shape owner that was never removed.");
                }
                owner
            })
            .collect()
    }
}
