//! CLI interface and argument parsing
//!
//! This module handles command-line parsing, interactive prompts for
//! missing options, and shell completion.

pub mod app;
pub mod prompt;

// Re-export main types
pub use app::*;
pub use prompt::*;
