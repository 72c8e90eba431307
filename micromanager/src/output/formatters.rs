//! Output formatter implementations.

use crate::model::{System, Systems};
use crate::{Error, Result};

use super::OutputFormatter;

/// Formatter for human-readable output.
///
/// ```text
/// systa (default)
///   shipping  [app.yml]
///     - app
/// ```
pub struct HumanFormatter;

impl HumanFormatter {
    fn write_system(out: &mut String, system: &System) {
        out.push_str(&system.name);
        if system.is_default {
            out.push_str(" (default)");
        }
        out.push('\n');

        if system.projects.is_empty() {
            out.push_str("  (no projects)\n");
        }
        for project in &system.projects {
            out.push_str(&format!(
                "  {}  [{}]\n",
                project.name,
                project.compose_file_path.display()
            ));
            if project.services.is_empty() {
                out.push_str("    (no services)\n");
            }
            for service in &project.services {
                out.push_str(&format!("    - {service}\n"));
            }
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_system(&self, system: &System) -> Result<String> {
        let mut out = String::new();
        Self::write_system(&mut out, system);
        Ok(out.trim_end().to_string())
    }

    fn format_systems(&self, systems: &Systems) -> Result<String> {
        if systems.is_empty() {
            return Ok("No systems configured.".to_string());
        }

        let mut out = String::new();
        for (i, system) in systems.values().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            Self::write_system(&mut out, system);
        }
        Ok(out.trim_end().to_string())
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl JsonFormatter {
    fn encode<T: serde::Serialize>(value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).map_err(|e| Error::Serialization {
            format: "JSON",
            message: e.to_string(),
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_system(&self, system: &System) -> Result<String> {
        Self::encode(system)
    }

    fn format_systems(&self, systems: &Systems) -> Result<String> {
        Self::encode(systems)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl YamlFormatter {
    fn encode<T: serde::Serialize>(value: &T) -> Result<String> {
        serde_yaml::to_string(value)
            .map(|text| text.trim_end().to_string())
            .map_err(|e| Error::Serialization {
                format: "YAML",
                message: e.to_string(),
            })
    }
}

impl OutputFormatter for YamlFormatter {
    fn format_system(&self, system: &System) -> Result<String> {
        Self::encode(system)
    }

    fn format_systems(&self, systems: &Systems) -> Result<String> {
        Self::encode(systems)
    }
}
