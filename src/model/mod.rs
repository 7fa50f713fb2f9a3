//! Configuration model
//!
//! The typed tree produced by the parser: a list of servers, each with its
//! locations.

pub mod location;
pub mod server;

pub use location::{LocationConfig, Method};
pub use server::ServerConfig;

/// Parsed configuration, servers in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub servers: Vec<ServerConfig>,
}

impl Config {
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ServerConfig> {
        self.servers.iter()
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = &'a ServerConfig;
    type IntoIter = std::slice::Iter<'a, ServerConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
