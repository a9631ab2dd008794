use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories removed wherever they appear.
pub const ARTIFACT_DIRS: &[&str] = &["target", "coverage", "htmlcov", "dist"];

/// Files removed wherever they appear.
pub const ARTIFACT_FILES: &[&str] = &["lcov.info"];

/// Files removed by extension (coverage profiles).
pub const ARTIFACT_EXTENSIONS: &[&str] = &["profraw", "profdata"];

/// Never descended into.
const SKIPPED_DIRS: &[&str] = &[".git"];

/// Remove generated artifacts below `root` and return what was removed.
/// Matched directories are removed whole and not walked.
pub fn run(root: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    let mut walker = WalkDir::new(root).min_depth(1).into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry?;
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy();
        let name: &str = &file_name;

        if entry.file_type().is_dir() {
            if SKIPPED_DIRS.contains(&name) {
                walker.skip_current_dir();
            } else if ARTIFACT_DIRS.contains(&name) {
                fs::remove_dir_all(path)?;
                println!("  Removed directory: {}", path.display());
                removed.push(path.to_path_buf());
                walker.skip_current_dir();
            }
        } else if is_artifact_file(path) {
            fs::remove_file(path)?;
            println!("  Removed file: {}", path.display());
            removed.push(path.to_path_buf());
        }
    }

    tracing::debug!(count = removed.len(), "Cleanup finished");
    Ok(removed)
}

fn is_artifact_file(path: &Path) -> bool {
    let by_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| ARTIFACT_FILES.contains(&name));
    let by_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ARTIFACT_EXTENSIONS.contains(&ext));
    by_name || by_extension
}
