use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case logs to `tracing` under a single target so they can be
/// filtered with `RUST_LOG=food_order=debug`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "food_order", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "food_order", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "food_order", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "food_order", "{}", message);
    }
}
