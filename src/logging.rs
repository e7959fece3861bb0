use std::sync::Arc;

/// Minimal logging capability consumed by the facade.
///
/// Messages are fire-and-forget; no return value is observed.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Logger that forwards to the `tracing` subscriber installed by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Logger for crawl workers: tags every line with the crawl it belongs to.
#[derive(Debug, Clone)]
pub struct CrawlLogger {
    label: String,
}

impl CrawlLogger {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Logger for CrawlLogger {
    fn info(&self, message: &str) {
        tracing::info!(crawl = %self.label, "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(crawl = %self.label, "{message}");
    }
}

impl<L: Logger> Logger for Arc<L> {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}
