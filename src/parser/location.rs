//! Location block parser
//!
//! Parses `location <path> { ... }` into a [`LocationConfig`].

use crate::error::{ConfigError, SyntaxError};
use crate::model::{LocationConfig, Method};
use crate::parser::cursor::TokenCursor;
use crate::parser::primitives::{parse_autoindex, parse_method, strip_terminator};

/// Parse a location block. The cursor must sit on the `location` keyword;
/// on success it is left just past the closing `}`.
pub fn parse_location(cursor: &mut TokenCursor<'_, '_>) -> Result<LocationConfig, ConfigError> {
    let line = cursor.line();
    cursor.advance();

    let path = match (cursor.peek(), cursor.peek_nth(1)) {
        (Some(path), Some(brace)) if brace.text == "{" => path.text,
        (path, _) => {
            let path = path.map(|t| t.text).unwrap_or_default().to_string();
            return Err(ConfigError::syntax(
                SyntaxError::ExpectedBraceAfterLocation(path),
                line,
            ));
        }
    };
    cursor.advance();
    cursor.advance();

    let mut location = LocationConfig::new(path);
    loop {
        match cursor.peek_text() {
            Some("}") => {
                cursor.advance();
                return Ok(location);
            }
            Some(_) => parse_location_directive(cursor, &mut location)?,
            None => {
                return Err(ConfigError::syntax(
                    SyntaxError::ExpectedClosingBrace("location"),
                    cursor.line(),
                ));
            }
        }
    }
}

fn parse_location_directive(
    cursor: &mut TokenCursor<'_, '_>,
    location: &mut LocationConfig,
) -> Result<(), ConfigError> {
    let line = cursor.line();
    let Some(directive) = cursor.advance() else {
        return Err(ConfigError::syntax(
            SyntaxError::ExpectedClosingBrace("location"),
            line,
        ));
    };

    match directive.text {
        "allowed_methods" => location.allowed_methods = parse_allowed_methods(cursor)?,
        "root" => location.root = cursor.take_value("root")?.0.to_string(),
        "index" => location.index = cursor.take_value("index")?.0.to_string(),
        "cgi_path" => location.cgi_path = cursor.take_value("cgi_path")?.0.to_string(),
        "return" => location.redirect = cursor.take_value("return")?.0.to_string(),
        "autoindex" => {
            let line = cursor.line();
            let value = cursor.advance().map(|t| t.text).unwrap_or_default();
            location.autoindex =
                parse_autoindex(value).map_err(|e| ConfigError::value(e, line))?;
        }
        name => {
            return Err(ConfigError::syntax(
                SyntaxError::UnknownDirective {
                    block: "location",
                    name: name.to_string(),
                },
                line,
            ));
        }
    }
    Ok(())
}

/// Method names up to and including the one carrying the `;`
fn parse_allowed_methods(cursor: &mut TokenCursor<'_, '_>) -> Result<Vec<Method>, ConfigError> {
    let mut methods = Vec::new();
    loop {
        let token = match cursor.peek() {
            Some(token) if token.text != "}" => token,
            _ => {
                return Err(ConfigError::syntax(
                    SyntaxError::MissingTerminator("allowed_methods"),
                    cursor.line(),
                ));
            }
        };
        cursor.advance();

        let (name, terminated) = match strip_terminator(token.text) {
            Some(name) => (name, true),
            None => (token.text, false),
        };
        let method = parse_method(name).map_err(|e| ConfigError::value(e, token.line))?;
        methods.push(method);

        if terminated {
            return Ok(methods);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueError;
    use crate::parser::tokenizer::tokenize;

    fn parse(source: &str) -> Result<LocationConfig, ConfigError> {
        let tokens = tokenize(source);
        let mut cursor = TokenCursor::new(&tokens);
        parse_location(&mut cursor)
    }

    #[test]
    fn test_parse_full_location() {
        let location = parse(
            "location /upload {
                allowed_methods GET POST DELETE;
                root /srv/upload;
                index upload.html;
                autoindex on;
                cgi_path /usr/bin/python3;
                return /elsewhere;
            }",
        )
        .unwrap();

        assert_eq!(location.path, "/upload");
        assert_eq!(
            location.allowed_methods,
            vec![Method::Get, Method::Post, Method::Delete]
        );
        assert_eq!(location.root, "/srv/upload");
        assert_eq!(location.index, "upload.html");
        assert!(location.autoindex);
        assert_eq!(location.cgi_path, "/usr/bin/python3");
        assert_eq!(location.redirect, "/elsewhere");
    }

    #[test]
    fn test_empty_location_leaves_defaults() {
        let location = parse("location / { }").unwrap();
        assert_eq!(location, LocationConfig::new("/"));
    }

    #[test]
    fn test_cursor_lands_after_closing_brace() {
        let tokens = tokenize("location / { autoindex off; } next");
        let mut cursor = TokenCursor::new(&tokens);
        parse_location(&mut cursor).unwrap();
        assert_eq!(cursor.peek_text(), Some("next"));
    }

    #[test]
    fn test_duplicate_methods_are_kept() {
        let location = parse("location / { allowed_methods GET GET; }").unwrap();
        assert_eq!(location.allowed_methods, vec![Method::Get, Method::Get]);
    }

    #[test]
    fn test_missing_brace_after_location() {
        let err = parse("location /img root /x; }").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Syntax {
                error: SyntaxError::ExpectedBraceAfterLocation(ref path),
                ..
            } if path == "/img"
        ));

        let err = parse("location").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Syntax {
                error: SyntaxError::ExpectedBraceAfterLocation(_),
                ..
            }
        ));
    }

    #[test]
    fn test_allowed_methods_without_terminator() {
        let err = parse("location / { allowed_methods GET POST }").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Syntax {
                error: SyntaxError::MissingTerminator("allowed_methods"),
                ..
            }
        ));

        let err = parse("location / { allowed_methods GET").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Syntax {
                error: SyntaxError::MissingTerminator("allowed_methods"),
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_method() {
        let err = parse("location / {\n allowed_methods GET PUT; }").unwrap_err();
        match err {
            ConfigError::Value { error, line } => {
                assert_eq!(error, ValueError::InvalidMethod("PUT".to_string()));
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_single_value_needs_terminator() {
        let err = parse("location / { root /x }").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Syntax {
                error: SyntaxError::ExpectedValue("root"),
                ..
            }
        ));

        let err = parse("location / { return").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Syntax {
                error: SyntaxError::ExpectedValue("return"),
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_autoindex() {
        for source in [
            "location / { autoindex yes; }",
            "location / { autoindex on }",
            "location / { autoindex",
        ] {
            let err = parse(source).unwrap_err();
            assert!(
                matches!(
                    err,
                    ConfigError::Value {
                        error: ValueError::InvalidAutoindexValue(_),
                        ..
                    }
                ),
                "{}",
                source
            );
        }
    }

    #[test]
    fn test_unknown_directive_is_fatal() {
        let err = parse("location / { proxy_pass http://x; }").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Syntax {
                error: SyntaxError::UnknownDirective { block: "location", ref name },
                ..
            } if name == "proxy_pass"
        ));
    }

    #[test]
    fn test_unclosed_location() {
        let err = parse("location / { root /x;").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Syntax {
                error: SyntaxError::ExpectedClosingBrace("location"),
                ..
            }
        ));
    }

    #[test]
    fn test_index_and_cgi_path_need_terminator() {
        for (source, directive) in [
            ("location / { index i }", "index"),
            ("location / { cgi_path /usr/bin/php }", "cgi_path"),
            ("location / { cgi_path", "cgi_path"),
        ] {
            let err = parse(source).unwrap_err();
            assert!(
                matches!(
                    err,
                    ConfigError::Syntax {
                        error: SyntaxError::ExpectedValue(name),
                        ..
                    } if name == directive
                ),
                "{}: {:?}",
                source,
                err
            );
        }
    }

    #[test]
    fn test_fused_braces_are_not_split() {
        let err = parse("location /a{ root /x; }").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Syntax {
                error: SyntaxError::ExpectedBraceAfterLocation(ref path),
                ..
            } if path == "/a{"
        ));

        let err = parse("location /a { root /x;}").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Syntax {
                error: SyntaxError::ExpectedValue("root"),
                ..
            }
        ));
    }

    #[test]
    fn test_directive_at_end_of_input() {
        let tokens = tokenize("");
        let mut cursor = TokenCursor::new(&tokens);
        let mut location = LocationConfig::new("/");
        let err = parse_location_directive(&mut cursor, &mut location).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Syntax {
                error: SyntaxError::ExpectedClosingBrace("location"),
                ..
            }
        ));
    }
}
