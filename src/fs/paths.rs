//! Path resolution utilities
//!
//! Everything the crate reads or writes lives under `.intake/` in the
//! working directory.

use std::path::{Path, PathBuf};

use crate::schemas::Config;

/// Resolve the current working directory, optionally using an override.
///
/// # Arguments
/// * `cwd_option` - Optional override for the working directory
///
/// # Returns
/// The resolved working directory path
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .intake directory.
pub fn get_intake_dir(root: &Path) -> PathBuf {
    root.join(".intake")
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_intake_dir(root).join("config.json")
}

/// Get the directory submitted briefings are written to.
///
/// Relative `submissions_dir` values are resolved against `root`.
pub fn get_submissions_dir(root: &Path, config: &Config) -> PathBuf {
    let dir = Path::new(&config.submissions_dir);
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        root.join(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_intake_dir() {
        let root = PathBuf::from("/site");
        assert_eq!(get_intake_dir(&root), PathBuf::from("/site/.intake"));
    }

    #[test]
    fn test_get_config_path() {
        let root = PathBuf::from("/site");
        assert_eq!(get_config_path(&root), PathBuf::from("/site/.intake/config.json"));
    }

    #[test]
    fn test_get_submissions_dir_relative() {
        let root = PathBuf::from("/site");
        let config = Config::default();
        assert_eq!(
            get_submissions_dir(&root, &config),
            PathBuf::from("/site/.intake/submissions")
        );
    }

    #[test]
    fn test_get_submissions_dir_absolute() {
        let root = PathBuf::from("/site");
        let config = Config {
            submissions_dir: "/var/briefings".to_string(),
            ..Config::default()
        };
        assert_eq!(get_submissions_dir(&root, &config), PathBuf::from("/var/briefings"));
    }

    #[test]
    fn test_resolve_cwd_with_override() {
        let path = PathBuf::from("/custom/path");
        let resolved = resolve_cwd(Some(&path));
        assert_eq!(resolved, path);
    }

    #[test]
    fn test_resolve_cwd_without_override() {
        let resolved = resolve_cwd(None);
        assert!(!resolved.as_os_str().is_empty());
    }
}
