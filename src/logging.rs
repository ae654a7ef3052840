//! Logging and tracing setup.
//!
//! The library only emits `tracing` events; binaries and test harnesses
//! call one of the initializers below to see them.

use std::sync::Once;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

static INIT: Once = Once::new();

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to `info`. Subsequent calls are ignored, and
/// a subscriber installed elsewhere first is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        if tracing_subscriber::registry()
            .with(default_filter())
            .with(fmt_layer)
            .try_init()
            .is_ok()
        {
            info!("magic-mime tracing initialized");
        }
    });
}

/// Initialize tracing with JSON output for structured logging.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .with_current_span(true);

        if tracing_subscriber::registry()
            .with(default_filter())
            .with(fmt_layer)
            .try_init()
            .is_ok()
        {
            info!("magic-mime tracing initialized (JSON mode)");
        }
    });
}

/// Initialize logging from Python
#[cfg(feature = "python-ext")]
#[pyo3::prelude::pyfunction]
pub fn init_logging(json: bool) -> pyo3::PyResult<()> {
    if json {
        init_tracing_json();
    } else {
        init_tracing();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, trace, warn};

    #[test]
    fn test_init_tracing_once() {
        // Should be callable multiple times without panic
        init_tracing();
        init_tracing();
        init_tracing_json();
    }

    #[test]
    fn test_structured_events() {
        init_tracing();
        trace!(tree = 3, "evaluating");
        debug!(mime = "image/gif", consumed = 4, "classified");
        warn!(pattern = "[", "regex rejected");
    }
}
