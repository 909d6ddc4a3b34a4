use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt as _, util::SubscriberInitExt as _};

// Initialize tracing-subscriber with a stderr console layer. Log levels come
// from RUST_LOG, defaulting to info so crawl progress is visible.
pub fn init_tracing_subscriber() {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        );

    tracing_subscriber::registry().with(console_layer).init();
}
