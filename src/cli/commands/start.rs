//! Start command - Run the interactive wizard

use crate::config::load_config;
use crate::domain::WizardSession;
use crate::errors::Result;
use crate::fs::{get_submissions_dir, resolve_cwd, DirectorySink};
use crate::tui::{TuiOptions, TuiRunner};
use std::path::Path;
use tracing::info;

/// Run the interactive wizard, writing finished briefings to the submissions directory
pub async fn run(cwd: Option<&Path>) -> Result<()> {
    let root = resolve_cwd(cwd);
    let config = load_config(&root)?;

    let submissions_dir = get_submissions_dir(&root, &config);
    info!(dir = %submissions_dir.display(), "Starting intake wizard");

    let session = WizardSession::new(config.default_contact_preference);
    let sink = DirectorySink::new(submissions_dir);
    let options = TuiOptions {
        transition_delay_ms: config.transition_delay_ms,
        ..TuiOptions::default()
    };

    let mut runner = TuiRunner::new(session, Box::new(sink), options);
    runner.run().await
}
