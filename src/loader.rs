//! Configuration loading
//!
//! Reads a configuration file into memory and hands it to the parser.

use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::model::Config;
use crate::parser::{parse_tokens, tokenize};

/// Load and parse the configuration file at `path`
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::CannotOpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());

    let tokens = tokenize(&content);
    debug!("Tokenized {} into {} tokens", path.display(), tokens.len());

    let config = parse_tokens(&tokens)?;
    info!(
        "Loaded {} server(s) from {}",
        config.len(),
        path.display()
    );
    for server in &config {
        debug!(
            "Server {} ({}): {} location(s)",
            server.listen_addr().unwrap_or_default(),
            if server.server_name.is_empty() { "_" } else { server.server_name.as_str() },
            server.locations.len()
        );
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;

    #[test]
    fn test_load_missing_file() {
        let err = load_config("does/not/exist.conf").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(err.to_string().contains("does/not/exist.conf"));
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("webserv-loader-{}.conf", std::process::id()));
        fs::write(&path, "server {\n listen 8080;\n root /var/www;\n}\n").unwrap();
        let config = load_config(&path);
        fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.len(), 1);
        assert_eq!(config.servers[0].port, Some(8080));
    }
}
