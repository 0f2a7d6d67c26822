//! Snapshot comparison configuration.

use std::path::PathBuf;

/// Default index of the newer snapshot version (the most recent backup).
pub const DEFAULT_NEWER_VERSION: usize = 0;

/// Default index of the older snapshot version (the backup before it).
pub const DEFAULT_OLDER_VERSION: usize = 1;

/// Locale forced onto the external tool so the report headers stay English
/// and therefore parseable.
pub const DEFAULT_LOCALE: &str = "en";

/// Name of the Duplicati CLI binary looked up on `PATH` by default.
pub const DEFAULT_BINARY: &str = "duplicati-cli";

/// Which two snapshot versions to compare and how to reach the backup.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Index of the newer snapshot version (0 = most recent)
    pub newer_version: usize,

    /// Index of the older snapshot version
    pub older_version: usize,

    /// Backend URL of the backup repository. Remote login information in the
    /// URL is not needed; Duplicati reads the compare data locally.
    pub repository_url: String,

    /// Path to the local Duplicati metadata database, passed as `--dbpath`
    /// when set
    pub database_path: Option<PathBuf>,

    /// Locale forced onto the external command so headers match the parser
    pub locale: String,

    /// The Duplicati CLI binary to invoke
    pub binary: PathBuf,
}
