//! The resolution pipeline: locate, decode, validate and build.

use std::path::{Path, PathBuf};

use crate::config::builder::SystemBuilder;
use crate::config::loader::ConfigLoader;
use crate::error::Result;
use crate::fs::{FileSystem, OsFileSystem};
use crate::model::Systems;
use crate::path::PathResolver;

/// The outcome of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    /// The configuration file that was used.
    pub path: PathBuf,
    /// The systems it declares, in document order.
    pub systems: Systems,
}

/// Resolves and parses the configuration from an ordered candidate list.
///
/// # Examples
///
/// ```
/// use micromanager::config::ConfigParser;
/// use micromanager::fs::MockFileSystem;
/// use std::path::PathBuf;
///
/// let fs = MockFileSystem::new()
///     .with_file(
///         "/etc/micromanager/config.json",
///         r#"{"systems": {"sys": {"default": true, "projects": {
///             "ecommerce": {"compose_file_path": "/srv/shop.yml"}}}}}"#,
///     )
///     .with_file("/srv/shop.yml", "services:\n  app: {}\n");
///
/// let parser = ConfigParser::with_filesystem(
///     vec![
///         PathBuf::from("/home/me/.config/micromanager/config.json"),
///         PathBuf::from("/etc/micromanager/config.json"),
///     ],
///     fs,
/// );
///
/// let loaded = parser.parse().unwrap();
/// assert_eq!(loaded.path, PathBuf::from("/etc/micromanager/config.json"));
/// assert!(loaded.systems["sys"].is_default);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigParser<F: FileSystem = OsFileSystem> {
    candidates: Vec<PathBuf>,
    fs: F,
}

impl ConfigParser<OsFileSystem> {
    /// Creates a parser over the real filesystem.
    #[must_use]
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self::with_filesystem(candidates, OsFileSystem)
    }
}

impl<F: FileSystem> ConfigParser<F> {
    /// Creates a parser over the given filesystem.
    #[must_use]
    pub fn with_filesystem(candidates: Vec<PathBuf>, fs: F) -> Self {
        Self { candidates, fs }
    }

    /// The candidate paths, in search order.
    #[must_use]
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// The filesystem used for all checks and reads.
    #[must_use]
    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Locate the configuration file without reading it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConfigFileNotFound`] if no candidate exists.
    pub fn resolve(&self) -> Result<PathBuf> {
        PathResolver::resolve(&self.fs, &self.candidates)
    }

    /// Run a full resolution pass.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by path resolution, decoding,
    /// validation or graph construction.
    pub fn parse(&self) -> Result<LoadedConfig> {
        let path = self.resolve()?;
        let systems = self.parse_file(&path)?;
        Ok(LoadedConfig { path, systems })
    }

    /// Decode, validate and build the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by decoding, validation or graph
    /// construction.
    pub fn parse_file(&self, path: &Path) -> Result<Systems> {
        let document = ConfigLoader::load_file(&self.fs, path)?;
        let systems = SystemBuilder::new(&self.fs).build(path, &document)?;
        log::info!(
            "loaded {} system(s) from {}",
            systems.len(),
            path.display()
        );
        Ok(systems)
    }
}
