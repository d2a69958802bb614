//! CLI command implementations

pub mod check_contact;
pub mod replay;
pub mod start;
pub mod steps;
