//! Options, templates and user settings
//!
//! This module turns user intent into the resolved [`Options`] the
//! pipeline runs against.

pub mod options;
pub mod settings;
pub mod template;

// Re-export main types
pub use options::*;
pub use settings::*;
pub use template::*;

/// Options pointing at `target`, with no folder creation or template lookup
#[cfg(test)]
pub(crate) fn test_options(target: &str) -> Options {
    Options {
        project_name: None,
        target_path: std::path::PathBuf::from(target),
        template_name: DEFAULT_TEMPLATE.to_string(),
        template_root: std::path::PathBuf::from("/nonexistent/templates/typescript"),
        git_enabled: false,
        install_enabled: false,
    }
}
