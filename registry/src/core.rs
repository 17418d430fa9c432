//! Crate-private building blocks: service keys, providers, cycle detection.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;

use once_cell::sync::OnceCell;

thread_local! {
  // The set of keys currently being resolved on this thread. A key
  // re-entering this set means the dependency chain has looped back on
  // itself.
  static IN_PROGRESS: RefCell<HashSet<ServiceKey>> = RefCell::new(HashSet::new());
}

/// An RAII marker for an in-flight resolution.
///
/// Entering pushes the key onto the thread-local in-progress set and panics
/// if it is already present; dropping removes it again, so the set stays
/// accurate even when a build closure panics.
pub(crate) struct CycleGuard {
  key: ServiceKey,
}

impl CycleGuard {
  pub(crate) fn enter(key: ServiceKey) -> Self {
    IN_PROGRESS.with(|set| {
      // `insert` returns `false` if the key was already present.
      if !set.borrow_mut().insert(key.clone()) {
        panic!("circular dependency detected while resolving {:?}", key);
      }
    });
    Self { key }
  }
}

impl Drop for CycleGuard {
  fn drop(&mut self) {
    IN_PROGRESS.with(|set| {
      set.borrow_mut().remove(&self.key);
    });
  }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct ServiceKey {
  type_id: TypeId,
  name: Option<String>,
}

impl ServiceKey {
  pub(crate) fn of<T: ?Sized + Any>(name: Option<&str>) -> Self {
    Self {
      type_id: TypeId::of::<T>(),
      name: name.map(str::to_owned),
    }
  }
}

impl fmt::Debug for ServiceKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.name {
      Some(name) => write!(f, "ServiceKey({:?}, {})", self.type_id, name),
      None => write!(f, "ServiceKey({:?})", self.type_id),
    }
  }
}

pub(crate) type BuildFn = Box<dyn Fn() -> Box<dyn Any + Send + Sync> + Send + Sync>;

pub(crate) enum Provider {
  /// A value that existed before registration; served as-is.
  Instance(Box<dyn Any + Send + Sync>),
  /// Built on first resolution, shared afterwards.
  Singleton {
    cell: OnceCell<Box<dyn Any + Send + Sync>>,
    build: BuildFn,
  },
  /// Built anew on every resolution.
  Transient { build: BuildFn },
}
