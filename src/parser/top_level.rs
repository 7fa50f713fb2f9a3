//! Top-level parser
//!
//! Walks the whole token list, collecting `server { ... }` blocks.

use crate::error::{ConfigError, StructuralError, SyntaxError};
use crate::model::Config;
use crate::parser::cursor::TokenCursor;
use crate::parser::server::parse_server;
use crate::parser::tokenizer::Token;
use crate::parser::validator::validate;

/// Build and validate a [`Config`] from a token list
pub fn parse_tokens(tokens: &[Token<'_>]) -> Result<Config, ConfigError> {
    if tokens.is_empty() {
        return Err(StructuralError::EmptyConfigFile.into());
    }

    let mut cursor = TokenCursor::new(tokens);
    let mut config = Config::default();

    while let Some(token) = cursor.peek() {
        if token.text != "server" {
            return Err(ConfigError::syntax(
                SyntaxError::UnknownTopLevelDirective(token.text.to_string()),
                token.line,
            ));
        }
        if cursor.peek_nth(1).map(|t| t.text) != Some("{") {
            return Err(ConfigError::syntax(
                SyntaxError::ExpectedBraceAfterServer,
                token.line,
            ));
        }
        config.servers.push(parse_server(&mut cursor)?);
    }

    validate(&config)?;
    Ok(config)
}
