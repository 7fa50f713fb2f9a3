//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Setup logging. `RUST_LOG` wins over `default_level` when set.
pub fn setup_logging(default_level: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_target(false)
        .init();
}
