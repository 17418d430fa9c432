//! Factory registration: resolvable handles that hand out fresh instances.

use crate::error::WiringError;
use std::any::{type_name, Any};
use std::sync::{Arc, Weak};
use tracing::{debug, trace};
use weft_registry::Registry;

enum Source<T: ?Sized + 'static> {
  /// Resolve `T` from the registry on every call.
  Lookup { registry: Weak<Registry> },
  /// Invoke the caller's delegate directly.
  Direct {
    make: Box<dyn Fn() -> Arc<T> + Send + Sync>,
  },
  /// Re-invoke the caller's delegate with the live registry on every call.
  Bound {
    registry: Weak<Registry>,
    make: Box<dyn Fn(&Registry) -> Arc<T> + Send + Sync>,
  },
}

/// A zero-argument factory for `T`, itself registered as a shared instance.
///
/// Resolving `Factory<T>` twice yields the same handle; what
/// [`Factory::create`] returns is a fresh `Arc<T>` per call whenever the
/// underlying target is transient or delegate-built. The handle holds the
/// registry weakly, so depending on "a way to get a new `T`" never extends
/// the registry's lifetime.
pub struct Factory<T: ?Sized + 'static> {
  source: Source<T>,
}

impl<T: ?Sized + Any + Send + Sync> Factory<T> {
  pub(crate) fn lookup(registry: Weak<Registry>) -> Self {
    Self {
      source: Source::Lookup { registry },
    }
  }

  pub(crate) fn direct(make: Box<dyn Fn() -> Arc<T> + Send + Sync>) -> Self {
    Self {
      source: Source::Direct { make },
    }
  }

  pub(crate) fn bound(
    registry: Weak<Registry>,
    make: Box<dyn Fn(&Registry) -> Arc<T> + Send + Sync>,
  ) -> Self {
    Self {
      source: Source::Bound { registry, make },
    }
  }

  /// Produces an instance of `T`.
  ///
  /// Fails with [`WiringError::RegistryDropped`] when the registry behind
  /// the handle has already been dropped; resolution errors from the
  /// registry itself pass through unchanged.
  pub fn create(&self) -> Result<Arc<T>, WiringError> {
    trace!(service = type_name::<T>(), "factory create");
    match &self.source {
      Source::Lookup { registry } => {
        let registry = registry.upgrade().ok_or(WiringError::RegistryDropped)?;
        Ok(registry.resolve::<T>(None)?)
      }
      Source::Direct { make } => Ok(make()),
      Source::Bound { registry, make } => {
        let registry = registry.upgrade().ok_or(WiringError::RegistryDropped)?;
        Ok(make(&registry))
      }
    }
  }
}

/// Factory registration on a shared [`Registry`].
///
/// Implemented for `Arc<Registry>`. Every operation mutates the registry in
/// place and returns the handle it was called on, so registrations chain.
pub trait FactoryRegistrar {
  /// Registers `T` as a transient service built by `T::default`, plus a
  /// shared [`Factory<T>`] that resolves a fresh `T` on every
  /// [`create`](Factory::create) call.
  fn register_factory<T>(&self) -> &Self
  where
    T: Default + Any + Send + Sync;

  /// Registers the trait object `I` as a transient service produced by
  /// `make`, plus a shared [`Factory<I>`].
  ///
  /// The concrete implementation type is named inside `make`, where the
  /// `Arc<Impl> -> Arc<I>` coercion applies:
  ///
  /// ```ignore
  /// registry.register_trait_factory::<dyn Greeter, _>(|| Arc::new(EnglishGreeter));
  /// ```
  fn register_trait_factory<I, F>(&self, make: F) -> &Self
  where
    I: ?Sized + Any + Send + Sync,
    F: Fn() -> Arc<I> + Send + Sync + 'static;

  /// Registers only a shared [`Factory<T>`] wrapping `make`; `T` itself is
  /// not registered.
  fn register_delegate_factory<T, F>(&self, make: F) -> &Self
  where
    T: Any + Send + Sync,
    F: Fn() -> T + Send + Sync + 'static;

  /// Registers only a shared [`Factory<T>`] that re-invokes `make` with the
  /// registry on every call.
  ///
  /// Dependencies the delegate resolves are looked up per call, not
  /// captured once, so each created instance sees the registry's current
  /// registrations.
  fn register_resolving_factory<T, F>(&self, make: F) -> &Self
  where
    T: Any + Send + Sync,
    F: Fn(&Registry) -> T + Send + Sync + 'static;
}

impl FactoryRegistrar for Arc<Registry> {
  fn register_factory<T>(&self) -> &Self
  where
    T: Default + Any + Send + Sync,
  {
    self.add_transient(None, T::default);
    self.add_instance(None, Factory::<T>::lookup(Arc::downgrade(self)));
    debug!(service = type_name::<T>(), "registered default-built factory");
    self
  }

  fn register_trait_factory<I, F>(&self, make: F) -> &Self
  where
    I: ?Sized + Any + Send + Sync,
    F: Fn() -> Arc<I> + Send + Sync + 'static,
  {
    self.add_transient_trait(None, make);
    self.add_instance(None, Factory::<I>::lookup(Arc::downgrade(self)));
    debug!(service = type_name::<I>(), "registered trait factory");
    self
  }

  fn register_delegate_factory<T, F>(&self, make: F) -> &Self
  where
    T: Any + Send + Sync,
    F: Fn() -> T + Send + Sync + 'static,
  {
    self.add_instance(
      None,
      Factory::<T>::direct(Box::new(move || Arc::new(make()))),
    );
    debug!(service = type_name::<T>(), "registered delegate factory");
    self
  }

  fn register_resolving_factory<T, F>(&self, make: F) -> &Self
  where
    T: Any + Send + Sync,
    F: Fn(&Registry) -> T + Send + Sync + 'static,
  {
    self.add_instance(
      None,
      Factory::<T>::bound(
        Arc::downgrade(self),
        Box::new(move |registry| Arc::new(make(registry))),
      ),
    );
    debug!(service = type_name::<T>(), "registered resolving factory");
    self
  }
}
