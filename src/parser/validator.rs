//! Post-parse validation
//!
//! Checks the invariants that can only be judged once every block has closed.

use crate::error::StructuralError;
use crate::model::Config;

/// Reject configurations without servers, or with servers lacking
/// `listen` or a non-empty `root`
pub fn validate(config: &Config) -> Result<(), StructuralError> {
    if config.is_empty() {
        return Err(StructuralError::NoServerBlocks);
    }

    for (idx, server) in config.iter().enumerate() {
        let mut missing = Vec::new();
        if server.port.is_none() {
            missing.push("listen");
        }
        if server.root.is_empty() {
            missing.push("root");
        }
        if !missing.is_empty() {
            return Err(StructuralError::MissingRequiredDirectives {
                server: idx + 1,
                missing,
            });
        }
    }

    Ok(())
}
