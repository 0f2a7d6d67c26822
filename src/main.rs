//! # duplicati-diff-sizes
//!
//! A small CLI tool that answers "how much disk space do the files modified
//! between two Duplicati backup snapshots take up right now?".
//!
//! It runs `duplicati-cli compare` for two snapshot versions, parses the
//! textual report, checks which modified entries still exist on the live
//! filesystem, and prints a size-sorted, human-readable summary.
//!
//! ## Usage
//!
//! ```bash
//! # Compare the latest backup against the one before it
//! duplicati-diff-sizes --repository-url 'ssh://backups.example.org:22/user/machine'
//!
//! # Compare two specific versions, also reporting directories
//! duplicati-diff-sizes -n 2 -o 5 --include-dirs
//!
//! # Re-analyze a saved report without touching Duplicati
//! duplicati-diff-sizes --input compare-output.txt
//! ```

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use duplicati_diff_sizes::{
    classify::{leaf_dirs, split_files_dirs},
    compare::CompareCommand,
    config::{FileConfig, ReportOptions},
    parser::ReportSections,
    report,
    resolver::{resolve_dirs, resolve_files},
};
use std::process::exit;

/// Entry point for the duplicati-diff-sizes application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and
/// printing any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err:#}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function orchestrates the full pipeline: parse arguments, fetch the
/// compare report, parse and classify its entries, resolve sizes against the
/// filesystem, and print the summary.
///
/// # Errors
///
/// Returns errors from the external comparison command, from reading a saved
/// report file, or from config-file handling in the `config` subcommand.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let file_config = load_config();
    let report_opts = args.report_options(&file_config);

    let report_text = fetch_report(&args, &file_config, report_opts.verbose)?;
    let sections = ReportSections::parse(&report_text);

    if report_opts.verbose {
        eprintln!(
            "parsed {} added, {} modified, {} deleted entries",
            sections.added.len(),
            sections.modified.len(),
            sections.deleted.len()
        );
    }

    print_summary(&sections, report_opts);
    Ok(())
}

/// Obtain the compare report text, either from a saved file or by invoking
/// the external tool.
fn fetch_report(args: &Cli, config: &FileConfig, verbose: bool) -> Result<String> {
    if let Some(path) = &args.input {
        return std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read report file {}: {e}", path.display()));
    }

    let command = CompareCommand::new(args.compare_options(config)?);
    if verbose {
        eprintln!("running: {}", command.display());
    }

    Ok(command.run()?)
}

/// Resolve sizes for the modified entries and print the report blocks.
fn print_summary(sections: &ReportSections, opts: ReportOptions) {
    let modified = split_files_dirs(&sections.modified);

    println!("{}", report::HEADER.bold());

    let files = resolve_files(&modified.files);
    print!("{}", report::render_section("files", &files));

    if opts.include_dirs {
        let leaves = leaf_dirs(&modified.dirs);
        let dirs = resolve_dirs(&leaves);
        print!("{}", report::render_section("dirs", &dirs));
    }
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# duplicati-diff-sizes configuration
# All values shown are their defaults. Uncomment and change as needed.

[compare]
# Backend URL of the backup repository (no usable default; login details
# in the URL are not needed)
# repository_url = "ssh://backups.example.org:22/user/machine"

# Path to the local Duplicati metadata database (omitted when unset)
# database_path = "~/.config/Duplicati/machine.sqlite"

# Snapshot versions to compare (0 = latest backup)
# newer_version = 0
# older_version = 1

# Locale forced onto duplicati-cli so the report headers stay parseable
# locale = "en"

# Duplicati CLI binary to invoke
# binary = "duplicati-cli"

[report]
# Also report modified directories (leaf dirs only, recursive sizes)
# include_dirs = false

# Print parsed section counts and the invoked command line to stderr
# verbose = false
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for
/// `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_str(val: Option<&str>, default: &str) -> String {
        val.map_or_else(
            || format!("\"{default}\"  (default)"),
            |v| format!("\"{v}\""),
        )
    }
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_usize(val: Option<usize>, default: usize) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_path(val: Option<&std::path::Path>, default: &str) -> String {
        val.map_or_else(
            || format!("{default}  (default)"),
            |p| format!("\"{}\"", p.display()),
        )
    }

    format!(
        "\
[compare]
repository_url = {repository_url}
database_path  = {database_path}
newer_version  = {newer_version}
older_version  = {older_version}
locale         = {locale}
binary         = {binary}

[report]
include_dirs   = {include_dirs}
verbose        = {verbose}",
        repository_url = config.compare.repository_url.as_deref().map_or_else(
            || "(unset - required)".to_string(),
            |v| format!("\"{v}\""),
        ),
        database_path = show_path(config.compare.database_path.as_deref(), "(none)"),
        newer_version = show_usize(
            config.compare.newer_version,
            duplicati_diff_sizes::config::DEFAULT_NEWER_VERSION
        ),
        older_version = show_usize(
            config.compare.older_version,
            duplicati_diff_sizes::config::DEFAULT_OLDER_VERSION
        ),
        locale = show_str(
            config.compare.locale.as_deref(),
            duplicati_diff_sizes::config::DEFAULT_LOCALE
        ),
        binary = show_path(
            config.compare.binary.as_deref(),
            "\"duplicati-cli\"",
        ),
        include_dirs = show_bool(config.report.include_dirs, false),
        verbose = show_bool(config.report.verbose, false),
    )
}

/// Write a default config template to the config file path if it does not
/// exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config() -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    }
}
