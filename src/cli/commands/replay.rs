//! Replay command - Drive a session from a file of answers

use crate::config::load_config;
use crate::domain::WizardSession;
use crate::errors::{IntakeError, Result};
use crate::fs::{read_answers, resolve_cwd};
use crate::schemas::{AnswerSet, ContactPreference, StepId};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Where a replayed session ended up
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub path: Vec<StepId>,
    pub final_step: StepId,
    pub progress: u8,
    pub completed: bool,
    /// Why the session could not go further, unless it completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopped_reason: Option<String>,
}

/// Advance from the initial step as far as `answers` allow
pub fn replay(answers: AnswerSet, default_preference: ContactPreference) -> ReplayReport {
    let mut session = WizardSession::with_answers(answers, default_preference);
    let outcome = session.advance_while_possible();

    let final_step = session.current_step();
    let completed = final_step == StepId::SUCCESS;
    debug!(%final_step, transitions = session.path().len() - 1, "Replay finished");

    ReplayReport {
        path: session.path().to_vec(),
        final_step,
        progress: session.progress(),
        completed,
        stopped_reason: if completed {
            None
        } else {
            outcome.reason().map(str::to_string)
        },
    }
}

fn format_report(report: &ReplayReport) -> String {
    let path = report
        .path
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(" -> ");

    let mut lines = vec![
        format!("Path:     {}", path),
        format!("Stopped:  {}", report.final_step),
        format!("Progress: {}%", report.progress),
    ];
    if let Some(reason) = &report.stopped_reason {
        lines.push(format!("Reason:   {}", reason));
    }
    lines.join("\n")
}

/// Replay an answers file and print the report
pub async fn run(cwd: Option<&Path>, file: &Path, json: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let config = load_config(&root)?;

    let answers_path = if file.is_absolute() {
        file.to_path_buf()
    } else {
        root.join(file)
    };
    let answers = read_answers(&answers_path).map_err(|e| match e {
        IntakeError::FileNotFound(_) => e,
        other => IntakeError::wrap(
            other,
            format!("reading answers from {}", answers_path.display()),
        ),
    })?;
    let report = replay(answers, config.default_contact_preference);

    if json {
        let output = serde_json::to_string_pretty(&report)
            .map_err(|e| IntakeError::InvalidJson(e.to_string()))?;
        println!("{}", output);
    } else {
        println!("{}", format_report(&report));
    }
    Ok(())
}
