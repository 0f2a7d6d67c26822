//! Configuration types and the layered configuration file.
//!
//! All runtime behavior flows through two explicit option structs instead of
//! editable globals:
//!
//! - [`CompareOptions`] - which snapshot versions to compare and how to reach
//!   the backup (repository URL, local database, locale, binary)
//! - [`ReportOptions`] - what to print and how chatty to be
//!
//! Values are layered: CLI arguments override the TOML config file, which
//! overrides hardcoded defaults.

pub mod compare;
pub mod file;
pub mod report;

pub use compare::{CompareOptions, DEFAULT_LOCALE, DEFAULT_NEWER_VERSION, DEFAULT_OLDER_VERSION};
pub use file::FileConfig;
pub use report::ReportOptions;
