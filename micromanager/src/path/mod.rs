//! Locating the configuration file.
//!
//! The configuration is searched for in an ordered list of candidate paths.
//! The first candidate that exists wins; candidates are never merged.
//!
//! # Search order
//!
//! [`default_candidates`] returns the conventional locations, most specific
//! first:
//!
//! 1. `$HOME/.config/micromanager/config.json` (user scope)
//! 2. `/usr/local/etc/micromanager/config.json` (system scope)
//!
//! Environment variables and a leading `~` are expanded with [`expand`]
//! before the search starts.
//!
//! # Examples
//!
//! ```
//! use micromanager::fs::MockFileSystem;
//! use micromanager::path::PathResolver;
//! use std::path::PathBuf;
//!
//! let fs = MockFileSystem::new().with_file("/etc/mm/config.json", "{}");
//! let candidates = vec![
//!     PathBuf::from("/home/me/config.json"),
//!     PathBuf::from("/etc/mm/config.json"),
//! ];
//!
//! let found = PathResolver::resolve(&fs, &candidates).unwrap();
//! assert_eq!(found, PathBuf::from("/etc/mm/config.json"));
//! ```

pub mod expand;
pub mod resolver;

use std::path::{Path, PathBuf};

pub use expand::expand;
pub use resolver::PathResolver;

/// User-scoped configuration location, before expansion.
pub const USER_CONFIG_PATH: &str = "$HOME/.config/micromanager/config.json";

/// System-scoped configuration location.
pub const SYSTEM_CONFIG_PATH: &str = "/usr/local/etc/micromanager/config.json";

/// The conventional candidate list, expanded, in search order.
///
/// # Examples
///
/// ```
/// use micromanager::path::default_candidates;
///
/// let candidates = default_candidates();
/// assert_eq!(candidates.len(), 2);
/// assert!(candidates[1].ends_with("micromanager/config.json"));
/// ```
#[must_use]
pub fn default_candidates() -> Vec<PathBuf> {
    [USER_CONFIG_PATH, SYSTEM_CONFIG_PATH]
        .iter()
        .map(|p| expand(Path::new(p)))
        .collect()
}
