//! Server block parser
//!
//! Parses `server { ... }` into a [`ServerConfig`], delegating nested
//! `location` blocks and running root/index defaulting once the block closes.

use crate::error::{ConfigError, SyntaxError};
use crate::model::ServerConfig;
use crate::parser::cursor::TokenCursor;
use crate::parser::location::parse_location;
use crate::parser::primitives::{parse_body_size, parse_listen, parse_status_code};

/// Parse a server block. The cursor must sit on the `server` keyword.
pub fn parse_server(cursor: &mut TokenCursor<'_, '_>) -> Result<ServerConfig, ConfigError> {
    cursor.advance();
    cursor.expect("{", SyntaxError::ExpectedBraceAfterServer)?;

    let mut server = ServerConfig::default();
    loop {
        match cursor.peek_text() {
            Some("}") => {
                cursor.advance();
                break;
            }
            Some("location") => server.locations.push(parse_location(cursor)?),
            Some(_) => parse_server_directive(cursor, &mut server)?,
            None => {
                return Err(ConfigError::syntax(
                    SyntaxError::ExpectedClosingBrace("server"),
                    cursor.line(),
                ));
            }
        }
    }

    server.apply_location_defaults();
    Ok(server)
}

fn parse_server_directive(
    cursor: &mut TokenCursor<'_, '_>,
    server: &mut ServerConfig,
) -> Result<(), ConfigError> {
    let line = cursor.line();
    let Some(directive) = cursor.advance() else {
        return Err(ConfigError::syntax(
            SyntaxError::ExpectedClosingBrace("server"),
            line,
        ));
    };

    match directive.text {
        "listen" => {
            let (value, line) = cursor.take_value("listen")?;
            let (host, port) = parse_listen(value).map_err(|e| ConfigError::value(e, line))?;
            server.host = host;
            server.port = Some(port);
        }
        "server_name" => server.server_name = cursor.take_value("server_name")?.0.to_string(),
        "root" => server.root = cursor.take_value("root")?.0.to_string(),
        "index" => server.index = cursor.take_value("index")?.0.to_string(),
        "client_max_body_size" => {
            let line = cursor.line();
            let token = cursor.advance().ok_or_else(|| {
                ConfigError::syntax(SyntaxError::ExpectedValue("client_max_body_size"), line)
            })?;
            server.client_max_body_size =
                parse_body_size(token.text).map_err(|e| ConfigError::value(e, token.line))?;
        }
        "error_page" => {
            let line = cursor.line();
            let code = cursor.advance().ok_or_else(|| {
                ConfigError::syntax(SyntaxError::ExpectedValue("error_page"), line)
            })?;
            let code =
                parse_status_code(code.text).map_err(|e| ConfigError::value(e, code.line))?;
            let (path, _) = cursor.take_value("error_page")?;
            server.error_pages.insert(code, path.to_string());
        }
        name => {
            return Err(ConfigError::syntax(
                SyntaxError::UnknownDirective {
                    block: "server",
                    name: name.to_string(),
                },
                line,
            ));
        }
    }
    Ok(())
}
