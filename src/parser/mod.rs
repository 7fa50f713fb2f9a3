//! Configuration parser
//!
//! Text is split into tokens, then a recursive-descent parser builds the
//! server/location tree and validates it.
//!
//! ```text
//! text -> tokenize -> TokenCursor -> server blocks -> location blocks -> validate
//! ```

pub mod cursor;
pub mod location;
pub mod primitives;
pub mod server;
pub mod tokenizer;
pub mod top_level;
pub mod validator;

pub use cursor::TokenCursor;
pub use tokenizer::{Token, tokenize};
pub use top_level::parse_tokens;

use crate::error::ConfigError;
use crate::model::Config;

/// Parse configuration text into a validated [`Config`]
pub fn parse_config_str(source: &str) -> Result<Config, ConfigError> {
    let tokens = tokenize(source);
    parse_tokens(&tokens)
}
