//! Configuration for the intake wizard

mod loader;

pub use loader::load_config;
