//! Submission hand-off
//!
//! The engine produces a `Submission`; a sink delivers it. Delivery to a
//! real backend is someone else's job, the crate only ships a sink that
//! drops briefings into a directory.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::{IntakeError, Result};
use crate::schemas::Submission;

use super::json::write_json;

/// Receives completed briefings
pub trait SubmissionSink {
    /// Deliver one briefing
    fn submit(&mut self, submission: &Submission) -> Result<()>;
}

/// Collects briefings in memory
impl SubmissionSink for Vec<Submission> {
    fn submit(&mut self, submission: &Submission) -> Result<()> {
        self.push(submission.clone());
        Ok(())
    }
}

/// Writes each briefing as a pretty JSON file into a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the briefing will be written to
    pub fn path_for(&self, submission: &Submission) -> PathBuf {
        self.dir.join(submission.file_name())
    }
}

impl SubmissionSink for DirectorySink {
    fn submit(&mut self, submission: &Submission) -> Result<()> {
        let path = self.path_for(submission);
        write_json(&path, submission)
            .map_err(|e| IntakeError::Submission(format!("{}: {}", path.display(), e)))?;
        info!(path = %path.display(), service = ?submission.service, "Briefing written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::read_json;
    use crate::schemas::{keys, AnswerSet, StepId};
    use tempfile::TempDir;

    fn make_submission() -> Submission {
        let mut answers = AnswerSet::new();
        answers.set(keys::MAIN_SERVICE, "studio");
        Submission::new(vec![StepId::Main, StepId::Success], answers)
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<Submission> = Vec::new();
        sink.submit(&make_submission()).unwrap();
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_directory_sink_writes_file() {
        let temp = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(temp.path().join("submissions"));
        let submission = make_submission();

        sink.submit(&submission).unwrap();

        let path = sink.path_for(&submission);
        assert!(path.exists());
        let read: Submission = read_json(&path).unwrap();
        assert_eq!(read, submission);
    }

    #[test]
    fn test_directory_sink_error_is_submission_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();

        let mut sink = DirectorySink::new(blocker.join("submissions"));
        let err = sink.submit(&make_submission()).unwrap_err();
        assert_eq!(err.code(), "SUBMISSION");
    }
}
