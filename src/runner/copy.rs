//! Recursive template copy
//!
//! Files that already exist at the destination are left untouched, so a
//! template can be laid over a non-empty directory.

use crate::error::StepError;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// What a copy did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    /// Files written to the destination
    pub copied: usize,
    /// Files kept because the destination already had them
    pub kept: usize,
}

/// Copy the tree at `from` into `to` without overwriting existing files
///
/// Symlinks are followed; a link back to an ancestor directory is an error.
pub fn copy_tree(from: &Path, to: &Path) -> Result<CopySummary, StepError> {
    let mut summary = CopySummary::default();

    for entry in WalkDir::new(from).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|err| StepError::Copy {
            from: err.path().unwrap_or(from).to_path_buf(),
            to: to.to_path_buf(),
            source: io::Error::from(err),
        })?;

        let src = entry.path();
        let relative = src.strip_prefix(from).unwrap_or(src);
        let dest = to.join(relative);
        let copy_error = |source: io::Error| StepError::Copy {
            from: src.to_path_buf(),
            to: dest.clone(),
            source,
        };

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).map_err(copy_error)?;
            continue;
        }

        if dest.symlink_metadata().is_ok() {
            summary.kept += 1;
            continue;
        }

        fs::copy(src, &dest).map_err(copy_error)?;
        summary.copied += 1;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn template() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/nested")).unwrap();
        fs::write(dir.path().join("README.md"), "# <project-name>\n").unwrap();
        fs::write(dir.path().join("src/index.ts"), "export {};\n").unwrap();
        fs::write(dir.path().join("src/nested/deep.ts"), "deep\n").unwrap();
        dir
    }

    #[test]
    fn test_copies_whole_tree() {
        let src = template();
        let dest = TempDir::new().unwrap();

        let summary = copy_tree(src.path(), dest.path()).unwrap();

        assert_eq!(summary, CopySummary { copied: 3, kept: 0 });
        assert_eq!(
            fs::read_to_string(dest.path().join("src/nested/deep.ts")).unwrap(),
            "deep\n"
        );
    }

    #[test]
    fn test_never_overwrites_existing_file() {
        let src = template();
        let dest = TempDir::new().unwrap();
        fs::write(dest.path().join("README.md"), "my own readme").unwrap();

        let summary = copy_tree(src.path(), dest.path()).unwrap();

        assert_eq!(summary, CopySummary { copied: 2, kept: 1 });
        assert_eq!(
            fs::read_to_string(dest.path().join("README.md")).unwrap(),
            "my own readme"
        );
        assert!(dest.path().join("src/index.ts").is_file());
    }

    #[test]
    fn test_merges_into_existing_directory() {
        let src = template();
        let dest = TempDir::new().unwrap();
        fs::create_dir_all(dest.path().join("src")).unwrap();
        fs::write(dest.path().join("src/mine.ts"), "mine").unwrap();

        copy_tree(src.path(), dest.path()).unwrap();

        assert_eq!(fs::read_to_string(dest.path().join("src/mine.ts")).unwrap(), "mine");
        assert!(dest.path().join("src/index.ts").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_cycle_is_copy_error() {
        let src = TempDir::new().unwrap();
        fs::write(src.path().join("a.txt"), "a").unwrap();
        std::os::unix::fs::symlink(src.path(), src.path().join("loop")).unwrap();
        let dest = TempDir::new().unwrap();

        let result = copy_tree(src.path(), dest.path());

        assert!(matches!(result, Err(StepError::Copy { .. })));
        assert!(dest.path().join("a.txt").is_file());
        assert!(!dest.path().join("loop/loop").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_copied_by_content() {
        let src = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("shared.md"), "shared").unwrap();
        std::os::unix::fs::symlink(outside.path().join("shared.md"), src.path().join("link.md"))
            .unwrap();
        let dest = TempDir::new().unwrap();

        copy_tree(src.path(), dest.path()).unwrap();

        let copied = dest.path().join("link.md");
        assert!(!copied.symlink_metadata().unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(copied).unwrap(), "shared");
    }

    #[test]
    fn test_missing_source_is_copy_error() {
        let dest = TempDir::new().unwrap();
        let result = copy_tree(&dest.path().join("no-such-template"), dest.path());
        assert!(matches!(result, Err(StepError::Copy { .. })));
    }
}
