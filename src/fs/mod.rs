//! File system utilities
//!
//! Path resolution, JSON file operations and the submission sink.

mod json;
mod paths;
mod submissions;

pub use json::{read_answers, read_config, read_json, write_json};
pub use paths::{get_config_path, get_intake_dir, get_submissions_dir, resolve_cwd};
pub use submissions::{DirectorySink, SubmissionSink};
