use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub const LOG_TARGET: &str = "inventory";

/// Forwards domain log lines to `tracing` under [`LOG_TARGET`], so they can
/// be filtered with `RUST_LOG=inventory=debug`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn should_log_without_subscriber_installed() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        logger.info("info line");
        logger.warn("warn line");
        logger.error("error line");
        logger.debug("debug line");
    }
}
