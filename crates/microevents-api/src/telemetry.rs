// Logging setup
//
// Console tracing via tracing-subscriber. RUST_LOG overrides the default filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str =
    "microevents_api=debug,microevents_core=debug,microevents_storage=debug,tower_http=debug";

/// Build the log filter from RUST_LOG, falling back to `default_filter`
pub fn log_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Call once at startup.
pub fn init_tracing() {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(log_filter(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry().with(console_layer).init();
}
