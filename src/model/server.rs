//! Server configuration
//!
//! One virtual server as described by a `server { ... }` block.

use std::collections::BTreeMap;

use crate::model::location::LocationConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_INDEX: &str = "index.html";
pub const MEBIBYTE: usize = 1024 * 1024;
pub const DEFAULT_CLIENT_MAX_BODY_SIZE: usize = MEBIBYTE;

/// Virtual server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `None` until a `listen` directive is seen
    pub port: Option<u16>,
    pub host: String,
    /// Empty means catch-all
    pub server_name: String,
    pub root: String,
    pub index: String,
    /// In bytes
    pub client_max_body_size: usize,
    pub error_pages: BTreeMap<u16, String>,
    pub locations: Vec<LocationConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: None,
            host: DEFAULT_HOST.to_string(),
            server_name: String::new(),
            root: String::new(),
            index: DEFAULT_INDEX.to_string(),
            client_max_body_size: DEFAULT_CLIENT_MAX_BODY_SIZE,
            error_pages: BTreeMap::new(),
            locations: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get host and port as a socket address string
    pub fn listen_addr(&self) -> Option<String> {
        self.port.map(|port| format!("{}:{}", self.host, port))
    }

    /// Custom page configured for a status code
    pub fn error_page(&self, code: u16) -> Option<&str> {
        self.error_pages.get(&code).map(String::as_str)
    }

    /// Location whose path is the longest prefix of `uri`
    pub fn find_location(&self, uri: &str) -> Option<&LocationConfig> {
        self.locations
            .iter()
            .rev()
            .filter(|location| uri.starts_with(location.path.as_str()))
            .max_by_key(|location| location.path.len())
    }

    /// Copy server root/index into locations that did not set their own
    pub(crate) fn apply_location_defaults(&mut self) {
        for location in &mut self.locations {
            location.inherit(&self.root, &self.index);
        }
    }
}
