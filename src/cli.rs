//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their
//! validation using the [clap](https://docs.rs/clap/) library. It provides
//! structured access to user input.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that
//! config-file values act as defaults that CLI arguments can override
//! (layered config).

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use duplicati_diff_sizes::config::compare::DEFAULT_BINARY;
use duplicati_diff_sizes::config::file::{FileConfig, expand_tilde};
use duplicati_diff_sizes::config::{
    CompareOptions, DEFAULT_LOCALE, DEFAULT_NEWER_VERSION, DEFAULT_OLDER_VERSION, ReportOptions,
};

/// Command-line arguments selecting the snapshot comparison.
#[derive(Parser)]
struct CompareArgs {
    /// Index of the newer snapshot version to compare (0 = latest backup)
    #[arg(short = 'n', long)]
    newer: Option<usize>,

    /// Index of the older snapshot version to compare
    #[arg(short = 'o', long)]
    older: Option<usize>,

    /// Backend URL of the backup repository
    ///
    /// Remote login information in the URL is not needed; Duplicati resolves
    /// the comparison from its local metadata. Required unless set in the
    /// config file or when reading a saved report with --input.
    #[arg(short = 'r', long)]
    repository_url: Option<String>,

    /// Path to the local Duplicati metadata database (passed as --dbpath)
    #[arg(long)]
    database_path: Option<PathBuf>,

    /// Locale forced onto duplicati-cli so the report headers stay parseable
    #[arg(long)]
    locale: Option<String>,

    /// Duplicati CLI binary to invoke
    ///
    /// Defaults to `duplicati-cli` resolved through PATH. Useful for
    /// non-standard installations.
    #[arg(long)]
    duplicati_bin: Option<PathBuf>,
}

/// Command-line arguments controlling report output.
#[derive(Parser)]
struct ReportArgs {
    /// Also report modified directories
    ///
    /// Directories are deduplicated and reduced to leaves (directories that
    /// are not an ancestor of another reported directory), then sized
    /// recursively. Printed as a second block below the file report.
    #[arg(long)]
    include_dirs: bool,

    /// Print parsed section counts and the invoked command line to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file
/// values act as defaults when the corresponding CLI argument is not
/// provided.
#[derive(Parser)]
#[command(name = "duplicati-diff-sizes")]
#[command(
    about = "Summarize the on-disk size of files modified between two Duplicati backup snapshots"
)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Read a saved compare report from this file instead of running duplicati-cli
    ///
    /// The file must contain the plain-text output of `duplicati-cli compare`.
    /// When set, all comparison options are ignored.
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Comparison options
    #[command(flatten)]
    compare: CompareArgs,

    /// Report options
    #[command(flatten)]
    report: ReportArgs,
}

impl Cli {
    /// Resolve the full comparison options from CLI args and config file.
    ///
    /// Priority per field: CLI argument > config file > default. Tilde
    /// expansion is applied to paths originating from the config file.
    ///
    /// # Errors
    ///
    /// Returns an error when no repository URL is available from either
    /// source; there is no usable default for it.
    pub fn compare_options(&self, config: &FileConfig) -> Result<CompareOptions> {
        let Some(repository_url) = self
            .compare
            .repository_url
            .clone()
            .or_else(|| config.compare.repository_url.clone())
        else {
            bail!(
                "no repository URL configured; pass --repository-url or set \
                 repository_url in the [compare] section of the config file"
            );
        };

        Ok(CompareOptions {
            newer_version: self
                .compare
                .newer
                .or(config.compare.newer_version)
                .unwrap_or(DEFAULT_NEWER_VERSION),
            older_version: self
                .compare
                .older
                .or(config.compare.older_version)
                .unwrap_or(DEFAULT_OLDER_VERSION),
            repository_url,
            database_path: self
                .compare
                .database_path
                .clone()
                .or_else(|| config.compare.database_path.as_deref().map(expand_tilde)),
            locale: self
                .compare
                .locale
                .clone()
                .or_else(|| config.compare.locale.clone())
                .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            binary: self
                .compare
                .duplicati_bin
                .clone()
                .or_else(|| config.compare.binary.as_deref().map(expand_tilde))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BINARY)),
        })
    }

    /// Resolve report options from CLI flags and config file.
    ///
    /// Boolean flags are additive: setting either the flag or the config key
    /// enables the behavior.
    #[must_use]
    pub fn report_options(&self, config: &FileConfig) -> ReportOptions {
        ReportOptions {
            include_dirs: self.report.include_dirs || config.report.include_dirs.unwrap_or(false),
            verbose: self.report.verbose || config.report.verbose.unwrap_or(false),
        }
    }
}
