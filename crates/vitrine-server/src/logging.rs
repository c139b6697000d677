//! Log subscriber setup.

use tracing_subscriber::EnvFilter;
use vitrine_conf::DEFAULT_LOG_LEVEL;

/// Builds the log filter: `RUST_LOG` when set, else `level`, else `info`.
pub fn env_filter(level: &str) -> EnvFilter {
	if let Ok(filter) = EnvFilter::try_from_default_env() {
		return filter;
	}
	EnvFilter::try_new(level).unwrap_or_else(|error| {
		eprintln!("invalid log level `{level}` ({error}), using `{DEFAULT_LOG_LEVEL}`");
		EnvFilter::new(DEFAULT_LOG_LEVEL)
	})
}

/// Installs the global fmt subscriber.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_tracing(level: &str) -> bool {
	tracing_subscriber::fmt()
		.with_env_filter(env_filter(level))
		.with_target(true)
		.try_init()
		.is_ok()
}
