//! Entry classification.
//!
//! Compare report entries carry no explicit type flag; directories are
//! distinguished from files solely by a trailing path separator. This module
//! partitions entry lists on that convention and reduces directory sets to
//! their leaves, so that recursive sizing never counts a subtree twice.

use std::collections::BTreeSet;

/// A list of report entries partitioned into files and directories.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Entries without a trailing separator, in input order.
    pub files: Vec<String>,

    /// Entries with a trailing separator, in input order.
    pub dirs: Vec<String>,
}

/// Partition entries into files and directories by trailing separator.
///
/// Every input path lands in exactly one of the two output lists, and the
/// relative order within each list matches the input. Empty input yields
/// empty outputs.
#[must_use]
pub fn split_files_dirs(entries: &[String]) -> Classification {
    let mut classification = Classification::default();

    for entry in entries {
        if is_directory_entry(entry) {
            classification.dirs.push(entry.clone());
        } else {
            classification.files.push(entry.clone());
        }
    }

    classification
}

/// Whether a report entry denotes a directory.
///
/// Duplicati terminates directory entries with the separator of the backed-up
/// platform, so both variants are accepted regardless of the host.
fn is_directory_entry(path: &str) -> bool {
    path.ends_with('/') || path.ends_with('\\')
}

/// Deduplicate directories and keep only the leaves.
///
/// A directory is a leaf when no other directory in the set extends it. The
/// ancestor test is a plain string-prefix check on the separator-terminated
/// paths, matching Duplicati's own entry format; it is not a path-segment
/// comparison. The result is deterministic (lexicographically ordered) and
/// satisfies: no element is a string-prefix of another element.
#[must_use]
pub fn leaf_dirs(dirs: &[String]) -> Vec<String> {
    let unique: BTreeSet<&str> = dirs.iter().map(String::as_str).collect();

    let mut leaves = Vec::new();
    for dir in &unique {
        let is_ancestor = unique
            .iter()
            .any(|other| other != dir && other.starts_with(dir));
        if !is_ancestor {
            leaves.push((*dir).to_string());
        }
    }

    leaves
}
