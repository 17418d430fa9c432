//! The `Registry` struct and its registration/resolution methods.

use crate::core::{CycleGuard, Provider, ServiceKey};
use crate::error::ResolveError;
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use std::any::{type_name, Any};
use std::sync::Arc;

/// A thread-safe service registry.
///
/// The registry holds one provider per service key. Registration uses
/// interior mutability, so both registration and resolution take `&self`,
/// and the same key may be registered again at any point: the last
/// registration wins.
#[derive(Default)]
pub struct Registry {
  providers: DashMap<ServiceKey, Provider>,
}

impl Registry {
  /// Creates a new, empty `Registry`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a new, empty `Registry` behind an `Arc`.
  ///
  /// This is the form extension layers attach to when they need a handle
  /// they can hold weakly.
  pub fn shared() -> Arc<Self> {
    Arc::new(Self::default())
  }

  fn insert(&self, key: ServiceKey, provider: Provider) {
    self.providers.insert(key, provider);
  }

  // --- Registration ---

  /// Registers an already-built value, served as-is on every resolution.
  pub fn add_instance<T: Any + Send + Sync>(&self, name: Option<&str>, value: T) {
    self.insert(
      ServiceKey::of::<T>(name),
      Provider::Instance(Box::new(Arc::new(value))),
    );
  }

  /// Registers a lazily-built shared instance.
  ///
  /// `build` runs at most once, on the first resolution, even when several
  /// threads race to resolve the service.
  pub fn add_singleton<T: Any + Send + Sync>(
    &self,
    name: Option<&str>,
    build: impl Fn() -> T + Send + Sync + 'static,
  ) {
    self.insert(
      ServiceKey::of::<T>(name),
      Provider::Singleton {
        cell: OnceCell::new(),
        build: Box::new(move || Box::new(Arc::new(build()))),
      },
    );
  }

  /// Registers a per-resolution builder: every `resolve` produces a new
  /// value.
  pub fn add_transient<T: Any + Send + Sync>(
    &self,
    name: Option<&str>,
    build: impl Fn() -> T + Send + Sync + 'static,
  ) {
    self.insert(
      ServiceKey::of::<T>(name),
      Provider::Transient {
        build: Box::new(move || Box::new(Arc::new(build()))),
      },
    );
  }

  /// Registers a shared trait-object binding.
  ///
  /// The build closure returns the finished `Arc<I>`, so the
  /// `Arc<Impl> -> Arc<I>` coercion happens at the caller's concrete call
  /// site.
  pub fn add_singleton_trait<I: ?Sized + Any + Send + Sync>(
    &self,
    name: Option<&str>,
    build: impl Fn() -> Arc<I> + Send + Sync + 'static,
  ) {
    self.insert(
      ServiceKey::of::<I>(name),
      Provider::Singleton {
        cell: OnceCell::new(),
        build: Box::new(move || Box::new(build())),
      },
    );
  }

  /// Registers a per-resolution trait-object binding.
  pub fn add_transient_trait<I: ?Sized + Any + Send + Sync>(
    &self,
    name: Option<&str>,
    build: impl Fn() -> Arc<I> + Send + Sync + 'static,
  ) {
    self.insert(
      ServiceKey::of::<I>(name),
      Provider::Transient {
        build: Box::new(move || Box::new(build())),
      },
    );
  }

  // --- Inspection ---

  /// Returns `true` if a provider is registered for `T` under `name`.
  pub fn contains<T: ?Sized + Any>(&self, name: Option<&str>) -> bool {
    self.providers.contains_key(&ServiceKey::of::<T>(name))
  }

  /// Number of registered providers.
  pub fn len(&self) -> usize {
    self.providers.len()
  }

  /// Returns `true` if nothing has been registered.
  pub fn is_empty(&self) -> bool {
    self.providers.is_empty()
  }

  // --- Resolution ---

  /// Resolves a service from the registry.
  ///
  /// Build closures may themselves resolve other services, so dependency
  /// chains resolve depth-first.
  ///
  /// # Panics
  ///
  /// Panics if the dependency chain loops back on itself.
  pub fn resolve<T: ?Sized + Any + Send + Sync>(
    &self,
    name: Option<&str>,
  ) -> Result<Arc<T>, ResolveError> {
    let key = ServiceKey::of::<T>(name);
    let _guard = CycleGuard::enter(key.clone());

    let entry = self
      .providers
      .get(&key)
      .ok_or_else(|| ResolveError::NotRegistered {
        service: type_name::<T>(),
        name: name.map(str::to_owned),
      })?;

    let mismatch = || ResolveError::ProviderMismatch {
      service: type_name::<T>(),
    };

    match entry.value() {
      Provider::Instance(value) => value.downcast_ref::<Arc<T>>().cloned().ok_or_else(mismatch),
      Provider::Singleton { cell, build } => cell
        .get_or_init(build)
        .downcast_ref::<Arc<T>>()
        .cloned()
        .ok_or_else(mismatch),
      Provider::Transient { build } => build()
        .downcast::<Arc<T>>()
        .map(|boxed| *boxed)
        .map_err(|_| mismatch()),
    }
  }
}
