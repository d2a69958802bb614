//! Schema types for the intake wizard
//!
//! Everything here serializes to the flat JSON shapes used for replay files,
//! configuration and submitted briefings.

mod answers;
mod config;
mod step;
mod submission;

pub use answers::{keys, AnswerSet, AnswerValue, ContactPreference};
pub use config::Config;
pub use step::StepId;
pub use submission::Submission;
