use std::sync::Arc;
use weft_registry::Registry;
use weft_wiring::{bundles, Bundle, BundleLoader, FactoryRegistrar};

// 1. Define the abstraction (the trait)
trait Logger: Send + Sync {
  fn log(&self, message: &str);
}

// 2. Define a concrete implementation
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

// 3. Define a service that depends on the abstraction
#[derive(Default)]
struct ReportService;

impl ReportService {
  fn generate_report(&self, logger: &dyn Logger) {
    logger.log("Starting report generation.");
    logger.log("Finished report generation.");
  }
}

// 4. Group the registrations into bundles.

// The infrastructure bundle wires the logger.
#[derive(Default)]
struct InfraBundle;
impl Bundle for InfraBundle {
  fn build(&self, registry: &Arc<Registry>) {
    registry.add_singleton_trait::<dyn Logger>(None, || Arc::new(ConsoleLogger));
  }
}

// The reporting bundle wires the services that use it.
#[derive(Default)]
struct ReportingBundle;
impl Bundle for ReportingBundle {
  fn build(&self, registry: &Arc<Registry>) {
    registry.register_factory::<ReportService>();
  }
}

fn main() {
  // --- Registration ---
  // One call applies both bundles, in order, against the same registry.
  let registry = Registry::shared();
  registry.load_bundles(bundles![InfraBundle, ReportingBundle]);

  // --- Resolution and Usage ---
  println!("Resolving the wired services...");
  let logger = registry.resolve::<dyn Logger>(None).unwrap();
  let report_service = registry.resolve::<ReportService>(None).unwrap();

  println!("Using the service...");
  report_service.generate_report(logger.as_ref());
}
