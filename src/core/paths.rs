//! Credential store path resolution.

use crate::constants;
use crate::util::path as store_path;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    /// Store file operated on by `--read`, `--read-keys`, and `--delete`.
    pub store: PathBuf,
    /// Fixed location used by `--init-db`.
    pub default_store: PathBuf,
}

impl StorePaths {
    /// Resolve the store from the `--file` argument, falling back to the
    /// default location under the user's home directory.
    pub fn resolve(file_arg: Option<PathBuf>) -> Result<Self> {
        let home = home_dir()?;
        let cwd = env::current_dir().context("resolve current directory")?;
        Ok(Self::from_home(&home, file_arg, &cwd))
    }

    pub fn from_home(home: &Path, file_arg: Option<PathBuf>, cwd: &Path) -> Self {
        let default_store = default_store(home);
        let requested = file_arg.unwrap_or_else(|| default_store.clone());
        let expanded = store_path::expand_tilde(&requested, Some(home));
        let store = store_path::absolutize(&expanded, cwd);
        Self {
            store,
            default_store,
        }
    }
}

pub fn home_dir() -> Result<PathBuf> {
    dirs_next::home_dir().ok_or_else(|| anyhow!("could not determine home directory"))
}

/// `<home>/libraries/apache-tomcat-10.1.41/bin/data/userDatabase.properties`
pub fn default_store(home: &Path) -> PathBuf {
    constants::DEFAULT_STORE_RELATIVE
        .iter()
        .fold(home.to_path_buf(), |path, segment| path.join(segment))
}

impl std::fmt::Display for StorePaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.store.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store() {
        assert_eq!(
            default_store(Path::new("/home/max")),
            PathBuf::from("/home/max/libraries/apache-tomcat-10.1.41/bin/data/userDatabase.properties")
        );
    }

    #[test]
    fn test_from_home_without_override() {
        let paths = StorePaths::from_home(Path::new("/nonexistent-home"), None, Path::new("/cwd"));
        assert_eq!(paths.store, paths.default_store);
        assert_eq!(
            paths.store,
            PathBuf::from("/nonexistent-home/libraries/apache-tomcat-10.1.41/bin/data/userDatabase.properties")
        );
    }

    #[test]
    fn test_from_home_with_tilde_override() {
        let paths = StorePaths::from_home(
            Path::new("/nonexistent-home"),
            Some(PathBuf::from("~/data/../userDatabase.properties")),
            Path::new("/cwd"),
        );
        assert_eq!(paths.store, PathBuf::from("/nonexistent-home/userDatabase.properties"));
        assert_ne!(paths.store, paths.default_store);
    }

    #[test]
    fn test_from_home_with_relative_override() {
        let paths = StorePaths::from_home(
            Path::new("/nonexistent-home"),
            Some(PathBuf::from("data/userDatabase.properties")),
            Path::new("/nonexistent-cwd"),
        );
        assert_eq!(paths.store, PathBuf::from("/nonexistent-cwd/data/userDatabase.properties"));
    }
}
