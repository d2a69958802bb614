//! Submission schema - the briefing handed to whoever delivers it

use serde::{Deserialize, Serialize};

use super::answers::{keys, AnswerSet, ContactPreference};
use super::step::StepId;

/// Snapshot of a completed intake session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    /// When the contact step was submitted (RFC 3339)
    pub submitted_at: String,

    /// Selected top-level service, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// How the client wants to be reached
    pub contact_preference: ContactPreference,

    /// Steps visited, initial step first
    pub path: Vec<StepId>,

    /// Everything the client entered
    pub answers: AnswerSet,
}

impl Submission {
    pub fn new(path: Vec<StepId>, answers: AnswerSet) -> Self {
        Self {
            schema_version: 1,
            submitted_at: chrono::Utc::now().to_rfc3339(),
            service: answers.text(keys::MAIN_SERVICE).map(str::to_string),
            contact_preference: answers.contact_preference(),
            path,
            answers,
        }
    }

    /// File name used when the briefing is written to disk
    pub fn file_name(&self) -> String {
        let stamp = chrono::DateTime::parse_from_rfc3339(&self.submitted_at)
            .map(|ts| ts.format("%Y%m%dT%H%M%S%.3f").to_string())
            .unwrap_or_else(|_| self.submitted_at.replace(':', "-"));
        format!("briefing-{}.json", stamp)
    }
}
