use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log messages to `tracing` under the `identity` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "identity", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "identity", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "identity", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "identity", "{}", message);
    }
}
