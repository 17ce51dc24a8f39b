// src/log.rs
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. Diagnostics go to stderr so
/// progress lines on stdout stay clean.
/// `RUST_LOG` wins when set; otherwise `verbose` picks debug over warn.
pub fn init(verbose: bool) {
    let fallback = if verbose { "cdi_scrape=debug" } else { "cdi_scrape=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
