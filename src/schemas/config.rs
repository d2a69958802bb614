//! Config schema - Configuration for the intake wizard

use serde::{Deserialize, Serialize};

use super::answers::ContactPreference;

/// Main configuration for the intake wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Length of the cosmetic lockout between two screens, in milliseconds
    #[serde(default = "default_transition_delay_ms")]
    pub transition_delay_ms: u64,

    /// Contact preference preset on every new session
    #[serde(default)]
    pub default_contact_preference: ContactPreference,

    /// Directory (relative to the working directory) that receives submitted briefings
    #[serde(default = "default_submissions_dir")]
    pub submissions_dir: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_transition_delay_ms() -> u64 {
    300
}

fn default_submissions_dir() -> String {
    ".intake/submissions".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: default_schema_version(),
            transition_delay_ms: default_transition_delay_ms(),
            default_contact_preference: ContactPreference::Email,
            submissions_dir: default_submissions_dir(),
        }
    }
}
