//! Error types for Scaffold

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Scaffold operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Main error type for Scaffold
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The target directory already exists or could not be created
    #[error("Failed to create directory '{}': {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The requested template has no readable directory under the templates root
    #[error("Invalid template name '{name}' (available: {})", available_list(.available))]
    TemplateNotFound {
        name: String,
        path: PathBuf,
        available: Vec<String>,
    },

    /// The process working directory could not be determined
    #[error("Failed to determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// A pipeline step failed and aborted the run
    #[error("Step '{step}' failed: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: StepError,
    },

    /// Settings file errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Interactive prompt could not be read or written
    #[error("Prompt error: {0}")]
    Prompt(#[source] io::Error),
}

fn available_list(available: &[String]) -> String {
    if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    }
}

/// Pipeline-fatal step errors
#[derive(Error, Debug)]
pub enum StepError {
    #[error("Failed to copy '{}' to '{}': {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to initialize git: {0}")]
    GitInit(String),

    #[error("Failed to install dependencies: {0}")]
    Install(String),

    #[error("{0}")]
    Other(String),
}

/// Which part of a per-file update went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    Read,
    Write,
    Rename,
}

impl fmt::Display for UpdateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            UpdateAction::Read => "reading",
            UpdateAction::Write => "writing",
            UpdateAction::Rename => "renaming",
        };
        f.write_str(verb)
    }
}

/// Non-fatal failure while rewriting or renaming a single project file
#[derive(Error, Debug)]
#[error("Error {action} file '{}': {source}", .path.display())]
pub struct UpdateFileError {
    pub path: PathBuf,
    pub action: UpdateAction,
    #[source]
    pub source: io::Error,
}

/// Settings file parsing errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read settings file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid settings: {0}")]
    Invalid(#[from] serde_yaml::Error),
}

/// Specialized result type for pipeline step actions
pub type StepResult = std::result::Result<(), StepError>;

/// Specialized result type for settings operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
