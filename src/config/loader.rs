//! Configuration loading with defaults

use std::path::Path;

use tracing::debug;

use crate::errors::{IntakeError, Result};
use crate::fs;
use crate::schemas::Config;

/// Load configuration from the working directory, falling back to defaults.
///
/// If `.intake/config.json` exists, it is read and missing fields take
/// their defaults. If it doesn't exist, the default configuration is returned.
///
/// # Errors
/// * `ConfigError` - If the file exists but cannot be parsed
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root).map_err(|e| match e {
        IntakeError::InvalidJson(msg) => IntakeError::ConfigError(msg),
        other => other,
    })?;
    debug!(?config, "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::ContactPreference;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults() {
        let temp = TempDir::new().unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.transition_delay_ms, 300);
        assert_eq!(config.default_contact_preference, ContactPreference::Email);
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().unwrap();
        let intake_dir = temp.path().join(".intake");
        std_fs::create_dir(&intake_dir).unwrap();

        let config_content = r#"{
            "transition_delay_ms": 0,
            "submissions_dir": "briefings"
        }"#;
        std_fs::write(intake_dir.join("config.json"), config_content).unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.transition_delay_ms, 0);
        assert_eq!(config.submissions_dir, "briefings");
        // Default for unspecified field
        assert_eq!(config.default_contact_preference, ContactPreference::Email);
    }

    #[test]
    fn test_load_config_invalid_is_config_error() {
        let temp = TempDir::new().unwrap();
        let intake_dir = temp.path().join(".intake");
        std_fs::create_dir(&intake_dir).unwrap();
        std_fs::write(
            intake_dir.join("config.json"),
            r#"{"transition_delay_ms": "soon"}"#,
        )
        .unwrap();

        let err = load_config(temp.path()).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}
