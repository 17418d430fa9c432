//! Bundles: reusable groups of registrations applied in one call.

use std::any::type_name;
use std::sync::Arc;
use tracing::debug;
use weft_registry::Registry;

/// A named grouping of related registrations.
///
/// Implementors populate the registry however they like; the loader's only
/// obligation is to invoke [`Bundle::build`] with the shared handle. The
/// handle form (rather than `&Registry`) keeps the
/// [`FactoryRegistrar`](crate::FactoryRegistrar) usable from inside bundle
/// bodies.
pub trait Bundle {
  /// Applies this bundle's registrations to `registry`.
  fn build(&self, registry: &Arc<Registry>);
}

/// Bundle application on a shared [`Registry`].
///
/// Implemented for `Arc<Registry>`. Every operation mutates the registry in
/// place and returns the handle it was called on, so loads chain.
pub trait BundleLoader {
  /// Default-constructs `B` and applies it.
  fn load<B>(&self) -> &Self
  where
    B: Bundle + Default;

  /// Applies an already-constructed bundle.
  ///
  /// The bundle is borrowed for the duration of the call and not retained.
  fn load_bundle(&self, bundle: &dyn Bundle) -> &Self;

  /// Applies each bundle in iteration order, sequentially, against the same
  /// registry.
  ///
  /// Later bundles observe earlier registrations and win ties for a shared
  /// key. There is no rollback: a panicking bundle leaves earlier bundles'
  /// registrations in place.
  fn load_bundles<'a, I>(&self, bundles: I) -> &Self
  where
    I: IntoIterator<Item = &'a dyn Bundle>;
}

impl BundleLoader for Arc<Registry> {
  fn load<B>(&self) -> &Self
  where
    B: Bundle + Default,
  {
    debug!(bundle = type_name::<B>(), "loading bundle");
    B::default().build(self);
    self
  }

  fn load_bundle(&self, bundle: &dyn Bundle) -> &Self {
    bundle.build(self);
    self
  }

  fn load_bundles<'a, I>(&self, bundles: I) -> &Self
  where
    I: IntoIterator<Item = &'a dyn Bundle>,
  {
    for bundle in bundles {
      bundle.build(self);
    }
    self
  }
}
