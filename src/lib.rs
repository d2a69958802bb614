//! Intake - branching onboarding wizard for audio engineering service requests
//!
//! This library provides the core functionality for the intake CLI, including:
//! - Schema definitions for steps, answers, configuration and submissions
//! - The wizard engine: step routing, navigation, progress and validation
//! - File system utilities for reading/writing JSON and storing briefings
//! - A terminal front end for filling in the wizard

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod tui;

// Re-export commonly used types
pub use domain::{TransitionOutcome, WizardSession};
pub use errors::{IntakeError, Result};
pub use schemas::{AnswerSet, AnswerValue, Config, ContactPreference, StepId, Submission};
