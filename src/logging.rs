use tracing::{error, info, warn};

/// Destination for the scraper's progress and failure messages.
///
/// Implementations must not fail or panic.
pub trait LogSink: Send + Sync {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards messages to `tracing`; with the default `fmt` subscriber they end
/// up on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        info!(target: "otzyvy_scraper", "{}", message);
    }

    fn warning(&self, message: &str) {
        warn!(target: "otzyvy_scraper", "{}", message);
    }

    fn error(&self, message: &str) {
        error!(target: "otzyvy_scraper", "{}", message);
    }
}

/// Installs the `fmt` subscriber used by the binary; `RUST_LOG` overrides the
/// default `info` level.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .try_init();
}
