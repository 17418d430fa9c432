//! # Weft Wiring
//!
//! Registration conveniences for the [`weft_registry`] service registry:
//! factory handles that hand out fresh instances on demand, and bundles
//! that group related registrations into reusable units.
//!
//! Both layers are stateless. Every operation is a single synchronous pass
//! over the registry the caller supplies, and every operation returns the
//! handle it was called on, so registrations chain. The wiring layer never
//! constructs objects itself beyond invoking caller delegates (or
//! `Default`), never manages lifetimes, and never introduces a process-wide
//! registry.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use weft_registry::Registry;
//! use weft_wiring::{Bundle, BundleLoader, Factory, FactoryRegistrar};
//!
//! #[derive(Default)]
//! struct Session {
//!     id: u32,
//! }
//!
//! #[derive(Default)]
//! struct CoreBundle;
//!
//! impl Bundle for CoreBundle {
//!     fn build(&self, registry: &Arc<Registry>) {
//!         registry.add_instance(None, String::from("weft"));
//!         registry.register_factory::<Session>();
//!     }
//! }
//!
//! let registry = Registry::shared();
//! registry.load::<CoreBundle>();
//!
//! // The factory handle is shared; what it creates is not.
//! let sessions = registry.resolve::<Factory<Session>>(None).unwrap();
//! let a = sessions.create().unwrap();
//! let b = sessions.create().unwrap();
//!
//! assert_eq!(a.id, 0);
//! assert!(!Arc::ptr_eq(&a, &b));
//! ```

mod bundle;
mod error;
mod factory;
mod macros;

pub use bundle::{Bundle, BundleLoader};
pub use error::WiringError;
pub use factory::{Factory, FactoryRegistrar};

pub use weft_registry::{Registry, ResolveError};
