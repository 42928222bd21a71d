use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// Install the tracing subscriber for the server process.
///
/// Filter defaults to `info` with `server` at debug; override with
/// `RUST_LOG`. Uses `try_init` because the Dioxus CLI may have installed
/// a subscriber already — the first one wins.
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,server=debug"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
