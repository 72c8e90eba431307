//! Filesystem access for the resolution pipeline.
//!
//! Every component that checks for or reads files goes through the
//! [`FileSystem`] trait, so the pipeline can run against the real filesystem
//! or against an in-memory tree in tests.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only filesystem operations used by the resolution pipeline.
///
/// # Examples
///
/// ```
/// use micromanager::fs::{FileSystem, MockFileSystem};
/// use std::path::Path;
///
/// let fs = MockFileSystem::new().with_file("config.json", "{}");
/// assert!(fs.exists(Path::new("config.json")));
/// assert!(!fs.exists(Path::new("missing.json")));
/// ```
pub trait FileSystem {
    /// Returns true if something (file or directory) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Returns true if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Reads the whole file at `path` as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be read.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// In-memory filesystem for deterministic tests.
///
/// Adding a file also registers all of its ancestor directories.
///
/// # Examples
///
/// ```
/// use micromanager::fs::{FileSystem, MockFileSystem};
/// use std::path::Path;
///
/// let fs = MockFileSystem::new()
///     .with_dir(".")
///     .with_file("shop/compose.yaml", "services: {}");
///
/// assert!(fs.is_dir(Path::new(".")));
/// assert!(fs.is_dir(Path::new("shop")));
/// assert_eq!(
///     fs.read_to_string(Path::new("shop/compose.yaml")).unwrap(),
///     "services: {}"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
}

impl MockFileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given contents.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let path = path.into();
        for ancestor in path.ancestors().skip(1) {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
        self.files.insert(path, contents.into());
        self
    }

    /// Adds an empty directory.
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if self.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} is a directory", path.display()),
            ));
        }
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )
        })
    }
}
