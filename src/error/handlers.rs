//! Error handlers
//!
//! Reports configuration errors and maps them to process exit codes.

use crate::error::types::{ConfigError, ErrorCategory};
use log::error;

/// sysexits: input file missing or unreadable
pub const EXIT_NO_INPUT: i32 = 66;
/// sysexits: input data was incorrect
pub const EXIT_DATA_ERROR: i32 = 65;

/// Log a configuration error
pub fn handle_error(err: &ConfigError) {
    error!("{}", log_message(err));
}

fn log_message(err: &ConfigError) -> String {
    format!("Config error: {}", err)
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &ConfigError) -> i32 {
    match err.category() {
        ErrorCategory::Io => EXIT_NO_INPUT,
        ErrorCategory::Syntax => EXIT_DATA_ERROR,
        ErrorCategory::Value => EXIT_DATA_ERROR,
        ErrorCategory::Structural => EXIT_DATA_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::{StructuralError, SyntaxError};
    use std::io;

    #[test]
    fn test_exit_codes() {
        let io_err = ConfigError::CannotOpenFile {
            path: "missing.conf".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(error_to_exit_code(&io_err), EXIT_NO_INPUT);

        let syntax = ConfigError::syntax(SyntaxError::ExpectedBraceAfterServer, 1);
        assert_eq!(error_to_exit_code(&syntax), EXIT_DATA_ERROR);

        let structural = ConfigError::from(StructuralError::NoServerBlocks);
        assert_eq!(error_to_exit_code(&structural), EXIT_DATA_ERROR);
    }

    #[test]
    fn test_log_message_names_category_and_line_once() {
        let err = ConfigError::syntax(SyntaxError::ExpectedBraceAfterServer, 4);
        let msg = log_message(&err);
        assert_eq!(msg, "Config error: Syntax error on line 4: expected '{' after server");
        assert_eq!(msg.matches("line 4").count(), 1);
    }
}
