//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use micromanager::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Lookup failure (unknown system or project, no default system)
    /// - 2: Configuration file not found
    /// - 3: Invalid configuration or compose file
    /// - 4: Invalid arguments
    /// - 5: Output serialization failure
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::NoDefaultSystem
                | LibError::SystemNotFound { .. }
                | LibError::ProjectNotFound { .. } => 1,
                LibError::ConfigFileNotFound { .. } => 2,
                LibError::InvalidConfig { .. }
                | LibError::InvalidComposeFile { .. }
                | LibError::ComposeFileNotFound { .. } => 3,
                LibError::Serialization { .. } => 5,
            },
            CliError::InvalidArguments(_) => 4,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::InvalidArguments(_) => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_library_exit_codes() {
        let not_found = LibError::ConfigFileNotFound { candidates: vec![] };
        assert_eq!(CliError::from(not_found).exit_code(), 2);

        let invalid = LibError::InvalidConfig {
            path: PathBuf::from("config.json"),
            reason: "systems field missing or not an object".to_string(),
        };
        assert_eq!(CliError::from(invalid).exit_code(), 3);

        let compose = LibError::ComposeFileNotFound {
            project: "ecommerce".to_string(),
            path: PathBuf::from("nowhere"),
        };
        assert_eq!(CliError::from(compose).exit_code(), 3);

        assert_eq!(CliError::from(LibError::NoDefaultSystem).exit_code(), 1);

        let serialization = LibError::Serialization {
            format: "YAML",
            message: "boom".to_string(),
        };
        assert_eq!(CliError::from(serialization).exit_code(), 5);
    }

    #[test]
    fn test_cli_exit_codes() {
        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
    }

    #[test]
    fn test_display_passes_library_message_through() {
        let err = CliError::from(LibError::SystemNotFound {
            name: "prod".to_string(),
        });
        assert_eq!(err.to_string(), "system not found: prod");
    }
}
