//! Repository discovery for bulk registration

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory name marking a git working copy
const GIT_DIR: &str = ".git";

/// Find the roots of all git working copies below `root`
///
/// A directory named `.git` marks its parent as a repository root and is not
/// descended into. Every other directory is searched, in file-name order.
/// Symbolic links are not followed. An unreadable directory aborts the scan.
pub fn find_git_roots(root: &Path) -> Result<Vec<PathBuf>> {
    let mut roots = Vec::new();
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.with_context(|| format!("Failed to scan {}", root.display()))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        if entry.file_name() == GIT_DIR {
            if let Some(parent) = entry.path().parent() {
                tracing::debug!(repo = %parent.display(), "discovered repository");
                roots.push(parent.to_path_buf());
            }
            walker.skip_current_dir();
        }
    }

    Ok(roots)
}

/// Resolve the directory argument of `repo-add-directory` to an absolute path
///
/// Relative arguments, `.` and `..` included, are taken from the working
/// directory. The directory must exist.
pub fn resolve_scan_root(arg: &str) -> Result<PathBuf> {
    std::fs::canonicalize(arg).with_context(|| format!("Failed to resolve directory {arg}"))
}
