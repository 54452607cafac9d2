//! Scaffold - create a new project from a template
//!
//! Scaffold resolves a target folder and a template, then runs a fixed
//! pipeline: copy the template, fill in the project name, and optionally
//! initialize git and install dependencies.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod ui;

// Re-export commonly used types
pub use error::{Result, ScaffoldError};

/// Current version of Scaffold
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
