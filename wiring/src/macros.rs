//! Ergonomics for applying several bundles at once.

/// Builds the `&dyn Bundle` array expected by
/// [`BundleLoader::load_bundles`](crate::BundleLoader::load_bundles).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use weft_registry::Registry;
/// use weft_wiring::{bundles, Bundle, BundleLoader};
///
/// #[derive(Default)]
/// struct Names;
/// impl Bundle for Names {
///     fn build(&self, registry: &Arc<Registry>) {
///         registry.add_instance(None, String::from("weft"));
///     }
/// }
///
/// #[derive(Default)]
/// struct Answers;
/// impl Bundle for Answers {
///     fn build(&self, registry: &Arc<Registry>) {
///         registry.add_instance(None, 42_u32);
///     }
/// }
///
/// let registry = Registry::shared();
/// registry.load_bundles(bundles![Names, Answers]);
/// assert_eq!(registry.len(), 2);
/// ```
#[macro_export]
macro_rules! bundles {
  ($($bundle:expr),+ $(,)?) => {
    [$(&$bundle as &dyn $crate::Bundle),+]
  };
}
