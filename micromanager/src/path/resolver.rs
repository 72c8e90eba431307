//! First-match resolution over an ordered candidate list.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::fs::FileSystem;

/// Picks the configuration file from an ordered list of candidates.
///
/// # Examples
///
/// ```
/// use micromanager::fs::MockFileSystem;
/// use micromanager::path::PathResolver;
/// use micromanager::Error;
/// use std::path::PathBuf;
///
/// let fs = MockFileSystem::new();
/// let candidates = vec![PathBuf::from("some/path/muhahaha")];
///
/// let err = PathResolver::resolve(&fs, &candidates).unwrap_err();
/// assert!(matches!(err, Error::ConfigFileNotFound { .. }));
/// ```
pub struct PathResolver;

impl PathResolver {
    /// Return the first candidate that exists, in list order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigFileNotFound`] carrying every candidate if none
    /// of them exists (including when the list is empty).
    pub fn resolve<F: FileSystem + ?Sized>(fs: &F, candidates: &[PathBuf]) -> Result<PathBuf> {
        for candidate in candidates {
            if fs.exists(candidate) {
                log::debug!("using configuration file {}", candidate.display());
                return Ok(candidate.clone());
            }
            log::debug!("no configuration file at {}", candidate.display());
        }

        Err(Error::ConfigFileNotFound {
            candidates: candidates.to_vec(),
        })
    }
}
