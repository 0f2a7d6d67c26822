//! Filesystem size resolution.
//!
//! Parsed entries describe what changed between two snapshots; this module
//! checks what of that still exists on the live filesystem and how big it is
//! now. Resolution is inherently racy against concurrent filesystem activity,
//! so every lookup is individually fallible: a path that cannot be stat'd is
//! reported as missing, and unreadable entries inside a directory tree are
//! skipped rather than aborting the sum.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

/// Candidate paths resolved against the live filesystem.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// `(path, size in bytes)` pairs for paths that exist, ascending by size.
    pub existing: Vec<(String, u64)>,

    /// Paths that could not be found on disk, in input order.
    pub missing: Vec<String>,
}

impl Resolved {
    /// Sum of the sizes of all existing paths.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.existing.iter().map(|&(_, size)| size).sum()
    }
}

/// Resolve file paths to their current on-disk byte sizes.
///
/// Existence and size come from a single metadata call, so a file that
/// vanishes mid-run lands in `missing` instead of failing the lookup.
#[must_use]
pub fn resolve_files(paths: &[String]) -> Resolved {
    resolve_with(paths, |path| fs::metadata(path).ok().map(|m| m.len()))
}

/// Resolve directory paths to the recursive byte size of their contents.
///
/// Only used for the directory report mode; sizing walks each tree once.
#[must_use]
pub fn resolve_dirs(paths: &[String]) -> Resolved {
    resolve_with(paths, |path| {
        fs::metadata(path).ok().map(|_| dir_size(Path::new(path)))
    })
}

/// Split paths into existing and missing using the given size lookup.
fn resolve_with(paths: &[String], size_of: impl Fn(&str) -> Option<u64>) -> Resolved {
    let mut resolved = Resolved::default();

    for path in paths {
        match size_of(path) {
            Some(size) => resolved.existing.push((path.clone(), size)),
            None => resolved.missing.push(path.clone()),
        }
    }

    resolved.existing.sort_by_key(|&(_, size)| size);
    resolved
}

/// Calculate the total size of a directory and all its contents, in bytes.
///
/// Recursively traverses the directory tree without following symbolic links
/// and sums the sizes of all regular files found. Errors for individual
/// entries (permission denied, broken symlinks, races) are silently skipped
/// so the function always returns a result.
///
/// Returns `0` if the path does not exist or cannot be traversed at the root
/// level.
#[must_use]
pub fn dir_size(path: &Path) -> u64 {
    let mut total = 0u64;

    for entry in WalkDir::new(path).follow_links(false).into_iter().flatten() {
        if entry.file_type().is_file() {
            if let Ok(metadata) = entry.metadata() {
                total += metadata.len();
            }
        }
    }

    total
}
