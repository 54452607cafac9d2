//! Output sinks for pipeline progress and messages
//!
//! Everything the scaffolder prints goes through a [`Reporter`], so the
//! terminal rendering can be swapped for a recording sink in tests.

pub mod console;
pub mod memory;

use crate::runner::StepStatus;

// Re-export main types
pub use console::*;
pub use memory::*;

/// Severity of a free-form message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Info,
    Debug,
}

/// Receives step transitions and messages as they happen
pub trait Reporter: Send + Sync {
    /// A step changed status
    fn step(&self, name: &str, status: &StepStatus);

    /// A message that passed the context's verbosity filter
    fn message(&self, level: Level, message: &str);

    /// The whole run finished successfully
    fn done(&self, message: &str);
}
