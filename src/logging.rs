//! Diagnostic logging setup
//!
//! Logs go to stderr so rendered output on stdout stays clean. The filter is
//! read from `SERVICE_ORBIT_LOG` using `tracing_subscriber` directive syntax,
//! e.g. `SERVICE_ORBIT_LOG=service_orbit=debug`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::constants::logging::{DEFAULT_FILTER, FILTER_ENV};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber; later calls are no-ops
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
