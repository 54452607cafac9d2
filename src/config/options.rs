//! Options model
//!
//! [`RawOptions`] is what the command line and prompts produce.
//! [`Options`] is the resolved, read-only description the pipeline runs
//! against: the target directory exists and the template root is valid.

use crate::config::TemplateResolver;
use crate::error::{Result, ScaffoldError};
use crate::runner::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Folder name used when prompts are skipped and none was given
pub const DEFAULT_FOLDER_NAME: &str = "expression-lib";

/// Project name substituted when none was chosen
pub const FALLBACK_PROJECT_NAME: &str = "Expression Library";

/// Template used when neither flag nor settings name one
pub const DEFAULT_TEMPLATE: &str = "TypeScript";

/// User intent before resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOptions {
    pub skip_prompts: bool,
    pub git: bool,
    pub install: bool,
    pub template: String,
    pub folder_name: Option<String>,
    pub project_name: Option<String>,
}

impl Default for RawOptions {
    fn default() -> Self {
        RawOptions {
            skip_prompts: false,
            git: false,
            install: false,
            template: DEFAULT_TEMPLATE.to_string(),
            folder_name: None,
            project_name: None,
        }
    }
}

impl RawOptions {
    /// Apply `--yes`: default folder name, forced fallback project name
    pub fn with_defaults_for_skipped_prompts(mut self) -> Self {
        if self.folder_name.is_none() {
            self.folder_name = Some(DEFAULT_FOLDER_NAME.to_string());
        }
        self.project_name = None;
        self
    }
}

/// Fully resolved scaffold options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Name written over the placeholder token
    pub project_name: Option<String>,
    /// Where the project is materialized
    pub target_path: PathBuf,
    /// Template as the user typed it
    pub template_name: String,
    /// Source tree of the template
    pub template_root: PathBuf,
    pub git_enabled: bool,
    pub install_enabled: bool,
}

impl Options {
    /// Project name, or the fallback when none was chosen
    pub fn resolved_project_name(&self) -> &str {
        self.project_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(FALLBACK_PROJECT_NAME)
    }

    /// Create the target directory (if a folder was named) and resolve the template
    ///
    /// A directory created here is removed again when the template turns out
    /// to be invalid, as long as it is still empty.
    pub fn resolve(
        raw: RawOptions,
        cwd: &Path,
        templates: &TemplateResolver,
        ctx: &Context,
    ) -> Result<Self> {
        let folder = raw
            .folder_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());

        let target_path = match folder {
            Some(name) => {
                let path = cwd.join(name);
                fs::create_dir(&path).map_err(|source| ScaffoldError::DirectoryCreation {
                    path: path.clone(),
                    source,
                })?;
                path
            }
            None => cwd.to_path_buf(),
        };

        let template_root = match templates.resolve(&raw.template) {
            Ok(root) => root,
            Err(err) => {
                if folder.is_some() {
                    remove_created_dir(&target_path, ctx);
                }
                return Err(err);
            }
        };

        Ok(Options {
            project_name: raw.project_name,
            target_path,
            template_name: raw.template,
            template_root,
            git_enabled: raw.git,
            install_enabled: raw.install,
        })
    }
}

/// Undo the target directory creation; only an empty directory is removed
fn remove_created_dir(path: &Path, ctx: &Context) {
    match fs::remove_dir(path) {
        Ok(()) => ctx.print_debug(&format!("Removed '{}'", path.display())),
        Err(e) => ctx.print_debug(&format!(
            "Could not remove '{}', leaving it in place: {}",
            path.display(),
            e
        )),
    }
}
