use std::sync::Arc;
use weft_registry::{Registry, ResolveError};

// --- Test Fixtures ---

// The trait must be Send + Sync for the registry to accept it.
trait Greeter: Send + Sync {
  fn greet(&self) -> String;
}

struct EnglishGreeter;
impl Greeter for EnglishGreeter {
  fn greet(&self) -> String {
    "Hello!".to_string()
  }
}

#[derive(Debug, PartialEq, Eq)]
struct SimpleService {
  id: u32,
}

// --- Basic Tests ---

#[test]
fn singleton_factory_resolves_to_one_instance() {
  // Arrange
  let registry = Registry::new();
  registry.add_singleton(None, || SimpleService { id: 101 });

  // Act
  let r1 = registry.resolve::<SimpleService>(None).unwrap();
  let r2 = registry.resolve::<SimpleService>(None).unwrap();

  // Assert
  assert_eq!(r1.id, 101);
  // Ensure it's shared by checking pointer equality.
  assert!(Arc::ptr_eq(&r1, &r2));
}

#[test]
fn named_instance_resolves_by_name() {
  // Arrange
  let registry = Registry::new();
  registry.add_instance(Some("named_instance"), SimpleService { id: 202 });

  // Act
  let r1 = registry.resolve::<SimpleService>(Some("named_instance")).unwrap();
  let r2 = registry.resolve::<SimpleService>(Some("named_instance")).unwrap();

  // Assert
  assert_eq!(r1.id, 202);
  assert!(Arc::ptr_eq(&r1, &r2));
  // The unnamed key is a different key entirely.
  assert!(registry.resolve::<SimpleService>(None).is_err());
}

#[test]
fn transient_factory_resolves_to_fresh_instances() {
  // Arrange
  let registry = Registry::new();
  registry.add_transient(None, || SimpleService { id: 303 });

  // Act
  let r1 = registry.resolve::<SimpleService>(None).unwrap();
  let r2 = registry.resolve::<SimpleService>(None).unwrap();

  // Assert
  assert_eq!(r1.id, 303);
  assert_eq!(r2.id, 303);
  assert!(!Arc::ptr_eq(&r1, &r2));
}

#[test]
fn singleton_trait_resolves_as_trait_object() {
  // Arrange
  let registry = Registry::new();
  registry.add_singleton_trait::<dyn Greeter>(None, || Arc::new(EnglishGreeter));

  // Act
  let greeter = registry.resolve::<dyn Greeter>(None).unwrap();

  // Assert
  assert_eq!(greeter.greet(), "Hello!");
}

#[test]
fn transient_trait_resolves_fresh_objects() {
  // Arrange
  let registry = Registry::new();
  registry.add_transient_trait::<dyn Greeter>(None, || Arc::new(EnglishGreeter));

  // Act
  let g1 = registry.resolve::<dyn Greeter>(None).unwrap();
  let g2 = registry.resolve::<dyn Greeter>(None).unwrap();

  // Assert
  assert_eq!(g1.greet(), "Hello!");
  assert!(!Arc::ptr_eq(&g1, &g2));
}

#[test]
fn missing_service_reports_not_registered() {
  let registry = Registry::new();

  let err = registry.resolve::<SimpleService>(None).unwrap_err();

  assert!(matches!(err, ResolveError::NotRegistered { .. }));
}

#[test]
fn failed_resolution_leaves_the_registry_untouched() {
  // Arrange
  let registry = Registry::new();
  registry.add_instance(None, 7_u32);
  assert_eq!(registry.len(), 1);

  // Act
  let result = registry.resolve::<String>(None);

  // Assert
  assert!(result.is_err());
  assert_eq!(registry.len(), 1);
}

#[test]
fn contains_reflects_registrations() {
  let registry = Registry::new();
  assert!(registry.is_empty());

  registry.add_instance(None, SimpleService { id: 1 });
  registry.add_singleton_trait::<dyn Greeter>(Some("english"), || Arc::new(EnglishGreeter));

  assert!(registry.contains::<SimpleService>(None));
  assert!(registry.contains::<dyn Greeter>(Some("english")));
  assert!(!registry.contains::<dyn Greeter>(None));
  assert_eq!(registry.len(), 2);
}
