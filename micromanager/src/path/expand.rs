//! Expansion of `~` and environment variables in candidate paths.

use std::env;
use std::path::{Path, PathBuf};

/// Expand a leading `~` and `$VAR` / `${VAR}` references in a path.
///
/// Only `~` and `~/path` are expanded; `~user` is left as is. Variables that
/// are not set are left verbatim, as are paths that are not valid UTF-8.
///
/// # Examples
///
/// ```
/// use micromanager::path::expand;
/// use std::path::{Path, PathBuf};
///
/// // Absolute paths without variables are unchanged
/// assert_eq!(expand(Path::new("/usr/local/etc")), PathBuf::from("/usr/local/etc"));
///
/// // Unknown variables are kept
/// assert_eq!(
///     expand(Path::new("/opt/$MICROMANAGER_SURELY_UNSET/config.json")),
///     PathBuf::from("/opt/$MICROMANAGER_SURELY_UNSET/config.json")
/// );
/// ```
#[must_use]
pub fn expand(path: &Path) -> PathBuf {
    let Some(path_str) = path.to_str() else {
        return path.to_path_buf();
    };

    let expanded = expand_vars(path_str);
    expand_tilde(&expanded)
}

fn expand_tilde(path: &str) -> PathBuf {
    if path != "~" && !path.starts_with("~/") && !path.starts_with("~\\") {
        return PathBuf::from(path);
    }

    match home_dir() {
        Some(home) if path == "~" => home,
        Some(home) => home.join(&path[2..]),
        None => PathBuf::from(path),
    }
}

fn expand_vars(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => (&braced[..end], end + 2),
                None => ("", 0),
            }
        } else {
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            (&after[..end], end)
        };

        match lookup(name) {
            Some(value) if !name.is_empty() => out.push_str(&value),
            _ => out.push_str(&rest[pos..=pos + consumed]),
        }
        rest = &rest[pos + 1 + consumed..];
    }

    out.push_str(rest);
    out
}

fn lookup(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    match env::var(name) {
        Ok(value) => Some(value),
        Err(_) if name == "HOME" => home_dir().and_then(|h| h.to_str().map(String::from)),
        Err(_) => None,
    }
}

fn home_dir() -> Option<PathBuf> {
    home::home_dir()
}
