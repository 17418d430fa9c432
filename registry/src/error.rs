//! Resolution failures.

use thiserror::Error;

/// An error produced while resolving a service from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
  /// No provider is registered under the requested key.
  #[error("no provider registered for `{service}` (name: {name:?})")]
  NotRegistered {
    service: &'static str,
    name: Option<String>,
  },

  /// A provider exists under the key but its stored value is not the
  /// requested type.
  #[error("provider for `{service}` produced an unexpected concrete type")]
  ProviderMismatch { service: &'static str },
}
