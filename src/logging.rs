//! Tracing setup for diagnostic logging.
//!
//! Logs go to stderr; stdout is reserved for tables and JSON views.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "warn", "geoattend=debug")
    pub filter: String,
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            with_target: false,
        }
    }
}

impl LogConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.filter = "debug".to_string();
            self.with_target = true;
        }
        self
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_tracing(config: LogConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.with_target)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
