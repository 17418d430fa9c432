use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use weft_registry::Registry;
use weft_wiring::{Factory, FactoryRegistrar};

// A service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

// A global, thread-safe counter to generate unique IDs.
static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn main() {
  let registry = Registry::shared();

  // --- Delegate factory ---
  // The factory handle is registered once; the delegate runs on every
  // create call.
  registry.register_delegate_factory(|| RequestTracker {
    id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
  });

  println!("--- Resolving the factory handle ---");
  let trackers = registry.resolve::<Factory<RequestTracker>>(None).unwrap();
  let again = registry.resolve::<Factory<RequestTracker>>(None).unwrap();
  assert!(
    Arc::ptr_eq(&trackers, &again),
    "The factory handle should be shared"
  );
  println!("The factory handle is the same pointer on every resolution.\n");

  println!("--- Creating instances ---");
  let t1 = trackers.create().unwrap();
  let t2 = trackers.create().unwrap();
  println!("Tracker 1 ID: {}, Tracker 2 ID: {}", t1.id, t2.id);
  assert_eq!(t1.id, 0);
  assert_eq!(t2.id, 1);
  assert!(
    !Arc::ptr_eq(&t1, &t2),
    "Created instances should be different"
  );
  println!("Created instances are different pointers, as expected.\n");

  // --- Resolving factory ---
  // The delegate receives the registry on every call, so dependencies are
  // looked up fresh per created instance.
  struct Audit {
    tracked_id: usize,
  }
  registry.add_transient(None, || RequestTracker {
    id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
  });
  registry.register_resolving_factory(|registry: &Registry| Audit {
    tracked_id: registry.resolve::<RequestTracker>(None).unwrap().id,
  });

  println!("--- Creating through the resolving delegate ---");
  let audits = registry.resolve::<Factory<Audit>>(None).unwrap();
  let a1 = audits.create().unwrap();
  let a2 = audits.create().unwrap();
  println!("Audit 1 saw ID: {}, Audit 2 saw ID: {}", a1.tracked_id, a2.tracked_id);
  assert_ne!(a1.tracked_id, a2.tracked_id);
  println!("Each create call resolved a fresh dependency.");
}
