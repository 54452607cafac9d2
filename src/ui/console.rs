//! Terminal rendering with colored status markers

use crate::runner::{StepStatus, Verbosity};
use crate::ui::{Level, Reporter};
use colored::Colorize;

/// Renders progress to stderr and the final indicator to stdout
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    verbosity: Verbosity,
}

impl ConsoleReporter {
    pub fn new(verbosity: Verbosity) -> Self {
        ConsoleReporter { verbosity }
    }

    /// Format a step line, or None when the status is not shown at this verbosity
    pub fn render_step(&self, name: &str, status: &StepStatus) -> Option<String> {
        if self.verbosity == Verbosity::Silent {
            return None;
        }

        let line = match status {
            StepStatus::Pending => return None,
            StepStatus::Running => {
                if self.verbosity < Verbosity::Verbose {
                    return None;
                }
                format!("  {} {}", "…".dimmed(), name)
            }
            StepStatus::Succeeded => {
                if self.verbosity < Verbosity::Normal {
                    return None;
                }
                format!("  {} {}", "✔".green(), name)
            }
            StepStatus::Failed(err) => {
                format!("  {} {}\n    {} {}", "✖".red(), name, "→".red(), err)
            }
            StepStatus::Skipped(reason) => {
                if self.verbosity < Verbosity::Normal {
                    return None;
                }
                format!(
                    "  {} {} {}\n    {} {}",
                    "↓".yellow(),
                    name,
                    "[skipped]".dimmed(),
                    "→".dimmed(),
                    reason.dimmed()
                )
            }
            StepStatus::Disabled => {
                if self.verbosity < Verbosity::Verbose {
                    return None;
                }
                format!("  {} {} {}", "-".dimmed(), name.dimmed(), "[disabled]".dimmed())
            }
        };

        Some(line)
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(Verbosity::Normal)
    }
}

impl Reporter for ConsoleReporter {
    fn step(&self, name: &str, status: &StepStatus) {
        if let Some(line) = self.render_step(name, status) {
            eprintln!("{}", line);
        }
    }

    fn message(&self, level: Level, message: &str) {
        let tag = match level {
            Level::Error => "ERROR".red().bold(),
            Level::Info => "INFO".cyan().bold(),
            Level::Debug => "DEBUG".dimmed(),
        };
        eprintln!("{} {}", tag, message);
    }

    fn done(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            println!("{} {}", "DONE".green().bold(), message);
        }
    }
}
