//! webserv configuration parser
//!
//! Turns an nginx-style configuration file into a validated tree of virtual
//! servers and their locations.
//!
//! ```no_run
//! let config = webserv_config::load_config("conf/webserv.conf")?;
//! for server in &config {
//!     println!("{:?} -> {}", server.listen_addr(), server.root);
//! }
//! # Ok::<(), webserv_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod model;
pub mod parser;
pub mod report;
pub mod settings;
pub mod utils;

pub use error::{ConfigError, ErrorCategory};
pub use loader::load_config;
pub use model::{Config, LocationConfig, Method, ServerConfig};
pub use parser::parse_config_str;
pub use report::Report;
pub use settings::Settings;
