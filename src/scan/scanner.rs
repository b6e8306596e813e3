//! Recursive file discovery with extension and path filtering.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::domain::SourceFile;
use crate::utils::normalize_path;

/// A file is excluded when its full path contains any of these substrings.
///
/// Plain substring containment, not path-segment aware: a file named
/// `binary.py` is excluded because its path contains "bin".
pub const EXCLUDED_PATH_MARKERS: [&str; 4] = ["bin", "node_modules", "obj", "Properties"];

/// Counters from one discovery run.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Files visited under the root (after subtree pruning)
    pub files_scanned: usize,

    /// Files matching an extension and not excluded
    pub files_included: usize,

    /// Files whose name matched no requested extension
    pub files_skipped_extension: usize,

    /// Files excluded by a path marker
    pub files_skipped_path: usize,
}

/// Recursive scanner over a root directory.
pub struct FileScanner {
    root: PathBuf,
    extensions: Vec<String>,
    stats: ScanStats,
}

impl FileScanner {
    pub fn new(root: PathBuf) -> Self {
        Self { root, extensions: Vec::new(), stats: ScanStats::default() }
    }

    /// Dot-prefixed extensions a file name must end with (case-insensitive).
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Walk the root and collect matching files in deterministic order.
    ///
    /// Directory subtrees whose path already contains an exclusion marker are
    /// pruned without descending; every descendant path contains the same
    /// marker, so this does not change which files are excluded. Files inside
    /// pruned subtrees are not counted in the stats; files whose own path
    /// carries a marker are counted as skipped.
    pub fn scan(&mut self) -> Result<Vec<SourceFile>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root).sort_by_file_name().into_iter().filter_entry(
            |entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !path_is_excluded(entry.path())
            },
        );

        for entry in walker {
            let entry = entry
                .with_context(|| format!("failed to scan {}", self.root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            self.stats.files_scanned += 1;

            let path = entry.path();
            if path_is_excluded(path) {
                self.stats.files_skipped_path += 1;
                debug!(path = %path.display(), "skipped: excluded path");
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if !matches_extension(&file_name, &self.extensions) {
                self.stats.files_skipped_extension += 1;
                debug!(path = %path.display(), "skipped: extension");
                continue;
            }

            let relative_path = path
                .strip_prefix(&self.root)
                .map(normalize_path)
                .unwrap_or_else(|_| normalize_path(path));
            let extension = path
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .unwrap_or_default();

            self.stats.files_included += 1;
            files.push(SourceFile { path: path.to_path_buf(), relative_path, extension });
        }

        debug!(
            scanned = self.stats.files_scanned,
            included = self.stats.files_included,
            "scan complete"
        );
        Ok(files)
    }
}

/// Full-path substring check against the exclusion markers.
fn path_is_excluded(path: &Path) -> bool {
    let full = path.to_string_lossy();
    EXCLUDED_PATH_MARKERS.iter().any(|marker| full.contains(marker))
}

/// Case-insensitive suffix match of a file name against the extension set.
///
/// For dot-prefixed suffixes this is equivalent to case-insensitive
/// extension equality ("foo.css" does not end with ".c").
fn matches_extension(file_name: &str, extensions: &[String]) -> bool {
    let lowered = file_name.to_lowercase();
    extensions.iter().any(|ext| lowered.ends_with(&ext.to_lowercase()))
}
