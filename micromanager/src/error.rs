//! Error types for the micromanager library.
//!
//! Every failure in the resolution pipeline is terminal for the operation that
//! raised it: nothing is retried, downgraded or replaced by a partial result.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a micromanager error.
///
/// # Examples
///
/// ```
/// use micromanager::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("mysys")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the micromanager library.
#[derive(Debug, Error)]
pub enum Error {
    /// None of the candidate configuration paths exists.
    #[error(
        "the micromanager configuration file was not found in the predefined paths: {}",
        display_candidates(candidates)
    )]
    ConfigFileNotFound {
        /// Every path that was searched, in search order.
        candidates: Vec<PathBuf>,
    },

    /// The configuration document failed structural validation.
    #[error("the micromanager configuration file {} is invalid: {reason}", path.display())]
    InvalidConfig {
        /// The configuration file that was being validated.
        path: PathBuf,
        /// Which structural rule failed.
        reason: String,
    },

    /// A project's `compose_file_path` does not exist.
    #[error(
        "the compose_file_path field of the project {project} does not point to an existing path {}",
        path.display()
    )]
    ComposeFileNotFound {
        /// The project declaring the path.
        project: String,
        /// The declared compose file path.
        path: PathBuf,
    },

    /// A compose file could not be decoded or lacks a `services` mapping.
    #[error("the compose file {} is invalid: {reason}", path.display())]
    InvalidComposeFile {
        /// The compose file that was being loaded.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// No system in the configuration is marked as default.
    #[error("no system is marked as default in the micromanager configuration")]
    NoDefaultSystem,

    /// A system was requested by name but is not configured.
    #[error("system not found: {name}")]
    SystemNotFound {
        /// The requested system name.
        name: String,
    },

    /// A project was requested by name but is not part of the system.
    #[error("project {project} not found in system {system}")]
    ProjectNotFound {
        /// The system that was searched.
        system: String,
        /// The requested project name.
        project: String,
    },

    /// Rendering the graph into an output format failed.
    #[error("failed to serialize {format} output: {message}")]
    Serialization {
        /// The output format being produced.
        format: &'static str,
        /// The serializer's message.
        message: String,
    },
}

fn display_candidates(candidates: &[PathBuf]) -> String {
    let mut out = String::from("[");
    for (i, candidate) in candidates.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&candidate.display().to_string());
    }
    out.push(']');
    out
}

impl Error {
    /// Check if the error reports something that does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use micromanager::Error;
    ///
    /// assert!(!Error::NoDefaultSystem.is_not_found());
    /// let err = Error::SystemNotFound { name: "prod".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ConfigFileNotFound { .. }
                | Self::ComposeFileNotFound { .. }
                | Self::SystemNotFound { .. }
                | Self::ProjectNotFound { .. }
        )
    }

    /// Check if the error comes from validating a config or compose document.
    #[must_use]
    pub fn is_invalid_document(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig { .. } | Self::InvalidComposeFile { .. }
        )
    }
}
