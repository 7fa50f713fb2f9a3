//! Tool settings
//!
//! Settings for the command-line tool itself, layered from built-in
//! defaults, an optional `webserv.toml` and `WEBSERV_*` environment
//! variables. CLI flags are applied on top by the binary.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Environment: WEBSERV_LOG_LEVEL, WEBSERV_DUMP
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Log filter used when RUST_LOG is not set
    pub log_level: String,

    /// Print the parsed configuration after a successful load
    pub dump: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            dump: true,
        }
    }
}

impl Settings {
    /// Load settings from `webserv.toml` (optional) with environment overrides.
    ///
    /// `log_level`, when given, overrides every other source and is
    /// validated like them.
    pub fn load(log_level: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_from("webserv", log_level)
    }

    /// Load settings from the named file (extension optional, file optional)
    pub fn load_from(name: &str, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("dump", defaults.dump)?
            .add_source(File::with_name(name).required(false))
            .add_source(Environment::with_prefix("WEBSERV"));
        if let Some(level) = log_level {
            builder = builder.set_override("log_level", level)?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.to_ascii_lowercase().as_str() {
            "off" | "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(ConfigError::Message(format!(
                "log_level must be one of off, error, warn, info, debug, trace (got '{}')",
                other
            ))),
        }
    }
}
