//! Error surface of the wiring layer.

use thiserror::Error;
use weft_registry::ResolveError;

/// An error produced while creating an instance through a
/// [`Factory`](crate::Factory).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringError {
  /// The registry behind this factory handle no longer exists.
  #[error("the registry behind this factory handle no longer exists")]
  RegistryDropped,

  /// The registry could not resolve the requested service. Registry errors
  /// pass through unchanged; the wiring layer has no special knowledge of
  /// them.
  #[error(transparent)]
  Resolve(#[from] ResolveError),
}
