//! Placeholder substitution
//!
//! After the copy, a fixed set of files at the project root get the
//! placeholder token replaced by the project name, and a fixed set of files
//! shipped under packaging-safe names are renamed to their real names.

use crate::error::{UpdateAction, UpdateFileError};
use std::fs;
use std::path::{Path, PathBuf};

/// Literal token replaced with the project name
pub const PLACEHOLDER: &str = "<project-name>";

/// Files at the project root whose placeholders are rewritten
pub const REWRITE_FILES: &[&str] = &["README.md", "package.json"];

/// Files renamed after copying, as (template name, project name)
///
/// Package registries drop `.gitignore`, so templates ship it undotted.
pub const RENAME_FILES: &[(&str, &str)] = &[("gitignore", ".gitignore")];

/// Replace every occurrence of the placeholder, returning the count
pub fn replace_placeholder(content: &str, project_name: &str) -> (String, usize) {
    let count = content.matches(PLACEHOLDER).count();
    if count == 0 {
        return (content.to_string(), 0);
    }
    (content.replace(PLACEHOLDER, project_name), count)
}

/// Rewrite one file in place; unchanged files are not written
pub fn rewrite_file(path: &Path, project_name: &str) -> Result<usize, UpdateFileError> {
    let content = fs::read_to_string(path).map_err(|source| UpdateFileError {
        path: path.to_path_buf(),
        action: UpdateAction::Read,
        source,
    })?;

    let (updated, count) = replace_placeholder(&content, project_name);
    if count > 0 {
        fs::write(path, updated).map_err(|source| UpdateFileError {
            path: path.to_path_buf(),
            action: UpdateAction::Write,
            source,
        })?;
    }

    Ok(count)
}

/// Rename `from` to `to`, replacing whatever `to` held
pub fn rename_file(from: &Path, to: &Path) -> Result<(), UpdateFileError> {
    fs::rename(from, to).map_err(|source| UpdateFileError {
        path: from.to_path_buf(),
        action: UpdateAction::Rename,
        source,
    })
}

/// Everything the update pass did, including the files it could not handle
#[derive(Debug, Default)]
pub struct UpdateReport {
    /// Rewritten files and how many tokens each had
    pub rewritten: Vec<(PathBuf, usize)>,
    /// Completed renames
    pub renamed: Vec<(PathBuf, PathBuf)>,
    pub failures: Vec<UpdateFileError>,
}

impl UpdateReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Rewrite placeholders and apply renames under `target`
///
/// Every file is attempted; one file failing never stops the others.
/// All work is finished when this returns.
pub fn update_project(target: &Path, project_name: &str) -> UpdateReport {
    let mut report = UpdateReport::default();

    for file_name in REWRITE_FILES {
        let path = target.join(file_name);
        match rewrite_file(&path, project_name) {
            Ok(count) => report.rewritten.push((path, count)),
            Err(err) => report.failures.push(err),
        }
    }

    for (from, to) in RENAME_FILES {
        let from = target.join(from);
        let to = target.join(to);
        match rename_file(&from, &to) {
            Ok(()) => report.renamed.push((from, to)),
            Err(err) => report.failures.push(err),
        }
    }

    report
}
