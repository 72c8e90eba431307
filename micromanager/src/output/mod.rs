//! Output formatting for the system graph.
//!
//! This module renders systems, their projects and services either as
//! human-readable text or as JSON/YAML documents. Every format keeps the
//! declaration order of the configuration.

mod formatters;

use crate::model::{System, Systems};
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};

/// Trait for rendering the system graph into an output format.
pub trait OutputFormatter {
    /// Format a single system.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if the system cannot be
    /// encoded in this format.
    fn format_system(&self, system: &System) -> Result<String>;

    /// Format every configured system.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if the systems cannot be
    /// encoded in this format.
    fn format_systems(&self, systems: &Systems) -> Result<String>;
}

/// Available output formats for the system graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented human-readable text.
    #[default]
    Human,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// # Examples
    ///
    /// ```
    /// use micromanager::{OutputFormat, System};
    ///
    /// let system = System::new("mysys", true, vec![]);
    /// let text = OutputFormat::Json.create_formatter().format_system(&system).unwrap();
    /// assert!(text.contains("\"is_default\": true"));
    /// ```
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}
