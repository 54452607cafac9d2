//! Template lookup
//!
//! Templates live one directory per template, lower-cased, under a single
//! templates root.

use crate::error::{Result, ScaffoldError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the templates root
pub const TEMPLATES_DIR_ENV: &str = "SCAFFOLD_TEMPLATES_DIR";

/// Templates shipped next to the crate manifest
pub fn bundled_templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Maps template names to template roots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateResolver {
    root: PathBuf,
}

impl TemplateResolver {
    pub fn new(root: PathBuf) -> Self {
        TemplateResolver { root }
    }

    /// Pick the templates root: explicit setting, environment, bundled
    pub fn locate(configured: Option<PathBuf>) -> Self {
        let root = configured
            .or_else(|| env::var_os(TEMPLATES_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(bundled_templates_dir);
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a template name to a readable directory under the root
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let normalized = name.trim().to_lowercase();
        let path = self.root.join(&normalized);

        // Names must stay a single path component below the root
        let single_component = !normalized.is_empty()
            && !normalized.contains(['/', '\\'])
            && normalized != "."
            && normalized != "..";

        if single_component && path.is_dir() && fs::read_dir(&path).is_ok() {
            return Ok(path);
        }

        Err(ScaffoldError::TemplateNotFound {
            name: name.to_string(),
            path,
            available: self.available(),
        })
    }

    /// Sorted names of all template directories
    pub fn available(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return Vec::new();
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }
}
