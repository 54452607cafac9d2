//! Execution context for the scaffold pipeline
//!
//! The context carries everything a step needs besides the options:
//! where output goes, how subprocesses are spawned, and how chatty to be.

use crate::runner::{ProcessRunner, StepStatus, SystemRunner};
use crate::ui::{ConsoleReporter, Level, Reporter};
use std::sync::Arc;

/// Execution context shared by every step of one run
#[derive(Clone)]
pub struct Context {
    /// Verbosity level for messages
    pub verbosity: Verbosity,

    /// Output sink for step status and messages
    pub reporter: Arc<dyn Reporter>,

    /// Spawns git and package-manager processes
    pub runner: Arc<dyn ProcessRunner>,
}

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            verbosity: Verbosity::Normal,
            reporter: Arc::new(ConsoleReporter::default()),
            runner: Arc::new(SystemRunner),
        }
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set the output sink
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Set the process runner
    pub fn with_runner(mut self, runner: Arc<dyn ProcessRunner>) -> Self {
        self.runner = runner;
        self
    }

    /// Forward a step transition to the reporter
    pub fn report_step(&self, name: &str, status: &StepStatus) {
        self.reporter.step(name, status);
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            self.reporter.message(Level::Info, message);
        }
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            self.reporter.message(Level::Error, message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            self.reporter.message(Level::Debug, message);
        }
    }

    /// Print the terminal success indicator
    pub fn print_done(&self, message: &str) {
        self.reporter.done(message);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
