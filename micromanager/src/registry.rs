//! Memoizing access to the configured systems.
//!
//! [`SystemRegistry`] resolves and parses the configuration on first use and
//! keeps the result for the rest of its life. It also tracks which system is
//! the default and which one is current for this session. Nothing it does is
//! written back to the configuration source.

use std::path::{Path, PathBuf};

use crate::config::{ConfigParser, LoadedConfig};
use crate::error::{Error, Result};
use crate::fs::{FileSystem, OsFileSystem};
use crate::model::{System, Systems};
use crate::path::default_candidates;

/// Everything the registry has computed so far.
///
/// Each field is filled at most once until [`SystemRegistry::reset`].
#[derive(Debug, Clone, Default)]
pub struct RegistryState {
    /// The parsed configuration.
    pub loaded: Option<LoadedConfig>,
    /// The resolved default system.
    pub default: Option<System>,
    /// The current system, set explicitly or defaulted.
    pub current: Option<System>,
}

/// Lazily populated view over the parsed configuration.
///
/// The registry assumes a single owner; every method takes `&mut self`.
///
/// # Examples
///
/// ```
/// use micromanager::fs::MockFileSystem;
/// use micromanager::SystemRegistry;
/// use std::path::PathBuf;
///
/// let fs = MockFileSystem::new()
///     .with_file(
///         "config.json",
///         r#"{"systems": {
///             "sysy": {"projects": {"ecommerce": {"compose_file_path": "app.yml"}}},
///             "systa": {"default": true, "projects": {"shipping": {"compose_file_path": "app.yml"}}}
///         }}"#,
///     )
///     .with_file("app.yml", "services:\n  app: {}\n");
///
/// let mut registry = SystemRegistry::with_filesystem(vec![PathBuf::from("config.json")], fs);
/// assert_eq!(registry.default_system().unwrap().name, "systa");
/// assert_eq!(registry.current_system().unwrap().name, "systa");
///
/// registry.select_system("sysy").unwrap();
/// assert_eq!(registry.current_system().unwrap().name, "sysy");
/// assert_eq!(registry.default_system().unwrap().name, "systa");
/// ```
#[derive(Debug)]
pub struct SystemRegistry<F: FileSystem = OsFileSystem> {
    parser: ConfigParser<F>,
    state: RegistryState,
}

impl SystemRegistry<OsFileSystem> {
    /// Creates a registry over the real filesystem.
    #[must_use]
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self::with_filesystem(candidates, OsFileSystem)
    }

    /// Creates a registry searching the conventional locations.
    ///
    /// See [`default_candidates`].
    #[must_use]
    pub fn with_default_candidates() -> Self {
        Self::new(default_candidates())
    }
}

impl Default for SystemRegistry<OsFileSystem> {
    fn default() -> Self {
        Self::with_default_candidates()
    }
}

impl<F: FileSystem> SystemRegistry<F> {
    /// Creates a registry over the given filesystem.
    #[must_use]
    pub fn with_filesystem(candidates: Vec<PathBuf>, fs: F) -> Self {
        Self::from_parser(ConfigParser::with_filesystem(candidates, fs))
    }

    /// Creates a registry around an existing parser.
    #[must_use]
    pub fn from_parser(parser: ConfigParser<F>) -> Self {
        Self {
            parser,
            state: RegistryState::default(),
        }
    }

    /// The parser used for resolution.
    #[must_use]
    pub fn parser(&self) -> &ConfigParser<F> {
        &self.parser
    }

    /// The cached state, for inspection.
    #[must_use]
    pub fn state(&self) -> &RegistryState {
        &self.state
    }

    /// Returns true once a resolution pass has succeeded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state.loaded.is_some()
    }

    /// The parsed configuration, resolving it on first call.
    ///
    /// # Errors
    ///
    /// Returns the resolution error if the configuration cannot be located,
    /// decoded, validated or built. Failures are not cached; the next call
    /// tries again.
    pub fn loaded(&mut self) -> Result<&LoadedConfig> {
        let loaded = match self.state.loaded.take() {
            Some(loaded) => loaded,
            None => self.parser.parse()?,
        };
        Ok(self.state.loaded.insert(loaded))
    }

    /// All configured systems, in document order.
    ///
    /// # Errors
    ///
    /// See [`SystemRegistry::loaded`].
    pub fn systems(&mut self) -> Result<&Systems> {
        Ok(&self.loaded()?.systems)
    }

    /// The configuration file in use.
    ///
    /// # Errors
    ///
    /// See [`SystemRegistry::loaded`].
    pub fn config_path(&mut self) -> Result<&Path> {
        Ok(&self.loaded()?.path)
    }

    /// Looks up a system by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SystemNotFound`] if no system has that name, or the
    /// resolution error if the configuration cannot be loaded.
    pub fn system(&mut self, name: &str) -> Result<&System> {
        self.systems()?
            .get(name)
            .ok_or_else(|| Error::SystemNotFound {
                name: name.to_string(),
            })
    }

    /// The system marked as default.
    ///
    /// The first system in document order with `default: true` wins. A
    /// warning is logged when more than one system is marked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDefaultSystem`] if no system is marked as default,
    /// or the resolution error if the configuration cannot be loaded.
    pub fn default_system(&mut self) -> Result<&System> {
        let system = match self.state.default.take() {
            Some(system) => system,
            None => select_default(self.systems()?)?.clone(),
        };
        Ok(self.state.default.insert(system))
    }

    /// The current system: the one set for this session, else the default.
    ///
    /// # Errors
    ///
    /// Returns the error of [`SystemRegistry::default_system`] if no current
    /// system was set and the default cannot be determined.
    pub fn current_system(&mut self) -> Result<&System> {
        let system = match self.state.current.take() {
            Some(system) => system,
            None => self.default_system()?.clone(),
        };
        Ok(self.state.current.insert(system))
    }

    /// Overrides the current system for the rest of this registry's life.
    pub fn set_current_system(&mut self, system: System) {
        log::debug!("current system set to '{}'", system.name);
        self.state.current = Some(system);
    }

    /// Makes the named system current.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SystemNotFound`] if no system has that name, or the
    /// resolution error if the configuration cannot be loaded.
    pub fn select_system(&mut self, name: &str) -> Result<&System> {
        let system = self.system(name)?.clone();
        self.set_current_system(system);
        self.current_system()
    }

    /// Drops everything computed so far; the next query resolves again.
    pub fn reset(&mut self) {
        self.state = RegistryState::default();
    }

    /// Drops all cached state and resolves the configuration again.
    ///
    /// # Errors
    ///
    /// Returns the resolution error if the configuration cannot be loaded.
    pub fn reload(&mut self) -> Result<&Systems> {
        self.reset();
        self.systems()
    }
}

/// Picks the default system: the first marked one in document order.
fn select_default(systems: &Systems) -> Result<&System> {
    let mut marked = systems.values().filter(|s| s.is_default);
    let first = marked.next().ok_or(Error::NoDefaultSystem)?;

    let others: Vec<&str> = marked.map(|s| s.name.as_str()).collect();
    if !others.is_empty() {
        log::warn!(
            "several systems are marked as default; using '{}' and ignoring {}",
            first.name,
            others.join(", ")
        );
    }

    Ok(first)
}
