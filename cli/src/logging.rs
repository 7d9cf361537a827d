//! Diagnostic tracing for the `fizzbuzz` binary.
//!
//! Answers are the only thing written to stdout, so scripts can pipe them.
//! Tracing events from both the `fizzbuzz` library and this binary go to
//! stderr, without timestamps or targets to keep one-shot runs readable.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directives used when `RUST_LOG` is unset, empty, or unparsable.
const DEFAULT_DIRECTIVES: &str = "warn";

/// Initialize the tracing subscriber from `RUST_LOG`.
///
/// # Example
/// ```bash
/// RUST_LOG=fizzbuzz=debug,fizzbuzz_cli=debug fizzbuzz range 1 101
/// ```
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(env_filter(directives.as_deref()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}
