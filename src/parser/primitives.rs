//! Primitive value parsers
//!
//! Stateless converters from a single token's text to a validated value.
//! Unless noted otherwise they expect the trailing `;` to be removed already.

use crate::error::ValueError;
use crate::model::Method;
use crate::model::server::{DEFAULT_HOST, MEBIBYTE};

const MAX_BODY_SIZE_MB: usize = 100;

/// Remove the `;` terminator fused to a value token.
///
/// Returns `None` if the token is not terminated.
pub fn strip_terminator(text: &str) -> Option<&str> {
    text.strip_suffix(';')
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a port number in 1..=65535
pub fn parse_port(value: &str) -> Result<u16, ValueError> {
    let invalid = || ValueError::InvalidPort(value.to_string());
    if !is_digits(value) {
        return Err(invalid());
    }
    match value.parse::<u16>() {
        Ok(port) if port >= 1 => Ok(port),
        _ => Err(invalid()),
    }
}

/// Parse a dotted-quad IPv4 address, each octet in 0..=255
pub fn parse_host(value: &str) -> Result<String, ValueError> {
    let octets: Vec<&str> = value.split('.').collect();
    let valid = octets.len() == 4
        && octets
            .iter()
            .all(|octet| is_digits(octet) && octet.parse::<u8>().is_ok());
    if valid {
        Ok(value.to_string())
    } else {
        Err(ValueError::InvalidHost(value.to_string()))
    }
}

/// Parse a `listen` value: `port` or `host:port`
pub fn parse_listen(value: &str) -> Result<(String, u16), ValueError> {
    match value.split_once(':') {
        Some((host, port)) => {
            let host = parse_host(host)?;
            let port = parse_port(port)?;
            Ok((host, port))
        }
        None => Ok((DEFAULT_HOST.to_string(), parse_port(value)?)),
    }
}

/// Parse a `client_max_body_size` token such as `10M;` into bytes.
///
/// Takes the raw token: the `M`/`m` unit must sit right before the `;`.
pub fn parse_body_size(token: &str) -> Result<usize, ValueError> {
    let invalid = || ValueError::InvalidBodySize(token.to_string());
    let number = strip_terminator(token)
        .and_then(|value| value.strip_suffix(['M', 'm']))
        .ok_or_else(invalid)?;
    if !is_digits(number) {
        return Err(invalid());
    }
    match number.parse::<usize>() {
        Ok(mb) if (1..=MAX_BODY_SIZE_MB).contains(&mb) => Ok(mb * MEBIBYTE),
        _ => Err(invalid()),
    }
}

/// Parse an `error_page` status code in 400..=599
pub fn parse_status_code(value: &str) -> Result<u16, ValueError> {
    let invalid = || ValueError::InvalidErrorCode(value.to_string());
    if !is_digits(value) {
        return Err(invalid());
    }
    match value.parse::<u16>() {
        Ok(code) if (400..=599).contains(&code) => Ok(code),
        _ => Err(invalid()),
    }
}

pub fn parse_method(value: &str) -> Result<Method, ValueError> {
    value
        .parse()
        .map_err(|_| ValueError::InvalidMethod(value.to_string()))
}

/// Parse a raw `autoindex` token: exactly `on;` or `off;`
pub fn parse_autoindex(token: &str) -> Result<bool, ValueError> {
    match token {
        "on;" => Ok(true),
        "off;" => Ok(false),
        _ => Err(ValueError::InvalidAutoindexValue(token.to_string())),
    }
}
