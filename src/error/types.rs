//! Error types
//!
//! Defines the error taxonomy for configuration loading: syntax, value and
//! structural errors, plus the I/O failure of reading the file itself.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Broad class of a configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Syntax,
    Value,
    Structural,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Io => write!(f, "I/O error"),
            ErrorCategory::Syntax => write!(f, "Syntax error"),
            ErrorCategory::Value => write!(f, "Value error"),
            ErrorCategory::Structural => write!(f, "Structural error"),
        }
    }
}

/// Grammar violations: braces, terminators, unknown directives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    ExpectedBraceAfterServer,
    ExpectedBraceAfterLocation(String),
    ExpectedClosingBrace(&'static str),
    MissingTerminator(&'static str),
    ExpectedValue(&'static str),
    UnknownDirective { block: &'static str, name: String },
    UnknownTopLevelDirective(String),
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::ExpectedBraceAfterServer => write!(f, "expected '{{' after server"),
            SyntaxError::ExpectedBraceAfterLocation(path) => {
                write!(f, "expected '{{' after location {}", path)
            }
            SyntaxError::ExpectedClosingBrace(block) => {
                write!(f, "expected '}}' to close {} block", block)
            }
            SyntaxError::MissingTerminator(directive) => {
                write!(f, "{} values must end with ';'", directive)
            }
            SyntaxError::ExpectedValue(directive) => {
                write!(f, "expected {} value followed by ';'", directive)
            }
            SyntaxError::UnknownDirective { block, name } => {
                write!(f, "unknown directive '{}' in {} block", name, block)
            }
            SyntaxError::UnknownTopLevelDirective(name) => {
                write!(f, "unknown top-level directive '{}'", name)
            }
        }
    }
}

impl std::error::Error for SyntaxError {}

/// A directive value that is well-formed syntactically but out of range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    InvalidPort(String),
    InvalidHost(String),
    InvalidBodySize(String),
    InvalidErrorCode(String),
    InvalidMethod(String),
    InvalidAutoindexValue(String),
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::InvalidPort(v) => {
                write!(f, "invalid port '{}': must be between 1 and 65535", v)
            }
            ValueError::InvalidHost(v) => {
                write!(f, "invalid host '{}': expected four octets like 127.0.0.1", v)
            }
            ValueError::InvalidBodySize(v) => write!(
                f,
                "invalid client_max_body_size '{}': expected 1M to 100M followed by ';'",
                v
            ),
            ValueError::InvalidErrorCode(v) => {
                write!(f, "invalid error_page code '{}': must be between 400 and 599", v)
            }
            ValueError::InvalidMethod(v) => {
                write!(f, "invalid HTTP method '{}' in allowed_methods", v)
            }
            ValueError::InvalidAutoindexValue(v) => {
                write!(f, "invalid autoindex value '{}': expected 'on;' or 'off;'", v)
            }
        }
    }
}

impl std::error::Error for ValueError {}

/// Whole-file shape problems detected outside any single directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    EmptyConfigFile,
    NoServerBlocks,
    MissingRequiredDirectives {
        server: usize,
        missing: Vec<&'static str>,
    },
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::EmptyConfigFile => write!(f, "empty config file"),
            StructuralError::NoServerBlocks => write!(f, "no server blocks found"),
            StructuralError::MissingRequiredDirectives { server, missing } => write!(
                f,
                "server #{} is missing required directives: {}",
                server,
                missing.join(", ")
            ),
        }
    }
}

impl std::error::Error for StructuralError {}

/// Any failure of loading or parsing a configuration file
#[derive(Debug)]
pub enum ConfigError {
    CannotOpenFile { path: PathBuf, source: io::Error },
    Syntax { error: SyntaxError, line: usize },
    Value { error: ValueError, line: usize },
    Structural(StructuralError),
}

impl ConfigError {
    pub fn syntax(error: SyntaxError, line: usize) -> Self {
        ConfigError::Syntax { error, line }
    }

    pub fn value(error: ValueError, line: usize) -> Self {
        ConfigError::Value { error, line }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ConfigError::CannotOpenFile { .. } => ErrorCategory::Io,
            ConfigError::Syntax { .. } => ErrorCategory::Syntax,
            ConfigError::Value { .. } => ErrorCategory::Value,
            ConfigError::Structural(_) => ErrorCategory::Structural,
        }
    }

    /// Source line of the offending token, when there is one
    pub fn line(&self) -> Option<usize> {
        match self {
            ConfigError::Syntax { line, .. } | ConfigError::Value { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::CannotOpenFile { path, source } => {
                write!(f, "cannot open config file {}: {}", path.display(), source)
            }
            ConfigError::Syntax { error, line } => {
                write!(f, "{} on line {}: {}", self.category(), line, error)
            }
            ConfigError::Value { error, line } => {
                write!(f, "{} on line {}: {}", self.category(), line, error)
            }
            ConfigError::Structural(error) => write!(f, "{}: {}", self.category(), error),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::CannotOpenFile { source, .. } => Some(source),
            ConfigError::Syntax { error, .. } => Some(error),
            ConfigError::Value { error, .. } => Some(error),
            ConfigError::Structural(error) => Some(error),
        }
    }
}

impl From<StructuralError> for ConfigError {
    fn from(error: StructuralError) -> Self {
        ConfigError::Structural(error)
    }
}
