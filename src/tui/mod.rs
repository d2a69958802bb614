//! Terminal User Interface (TUI) module
//!
//! Interactive front end for the intake wizard: one screen per step,
//! animated transitions and a progress bar.

pub mod events;
pub mod runner;
pub mod state;
pub mod widgets;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use events::{action_for_key, WizardAction};
pub use runner::{TuiOptions, TuiRunner};
pub use state::{TuiEffect, TuiState};
