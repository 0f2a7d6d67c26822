//! External `duplicati-cli compare` invocation.
//!
//! The comparison itself is delegated to Duplicati; this module only builds
//! the command line from [`CompareOptions`], runs it to completion, and hands
//! back the captured report text. A non-zero exit is fatal and surfaces the
//! tool's stderr; there are no retries.

use std::io;
use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::config::CompareOptions;

/// Errors from invoking the external comparison tool.
#[derive(Debug, Error)]
pub enum CompareError {
    /// The binary could not be started at all (not installed, not executable).
    #[error("failed to launch {binary}: {source}")]
    Launch {
        /// The binary that was invoked.
        binary: String,
        /// The underlying spawn error.
        source: io::Error,
    },

    /// The tool ran but reported failure through its exit status.
    #[error("{binary} exited with {status}\n{stderr}")]
    Failed {
        /// The binary that was invoked.
        binary: String,
        /// The non-zero exit status.
        status: ExitStatus,
        /// Captured standard error of the failed run.
        stderr: String,
    },
}

/// A fully configured `duplicati-cli compare` invocation.
#[derive(Debug, Clone)]
pub struct CompareCommand {
    options: CompareOptions,
}

impl CompareCommand {
    /// Build an invocation from resolved options.
    #[must_use]
    pub const fn new(options: CompareOptions) -> Self {
        Self { options }
    }

    /// The argument vector passed to the Duplicati binary.
    ///
    /// `--full-result` is always requested so the report lists every entry
    /// instead of truncating long sections. The database path is only passed
    /// when one is configured.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        let opts = &self.options;

        let mut args = vec![
            "compare".to_string(),
            opts.repository_url.clone(),
            opts.newer_version.to_string(),
            opts.older_version.to_string(),
        ];

        if let Some(ref db) = opts.database_path {
            args.push(format!("--dbpath={}", db.display()));
        }

        args.push(format!("--force-locale={}", opts.locale));
        args.push("--full-result".to_string());

        args
    }

    /// Shell-style rendering of the full command line, for verbose output.
    #[must_use]
    pub fn display(&self) -> String {
        let mut parts = vec![self.options.binary.display().to_string()];
        parts.extend(self.args());
        parts.join(" ")
    }

    /// Run the command to completion and return its captured stdout.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Launch`] when the binary cannot be spawned and
    /// [`CompareError::Failed`] (carrying captured stderr) when it exits with
    /// a non-zero status.
    pub fn run(&self) -> Result<String, CompareError> {
        let binary = self.options.binary.display().to_string();

        let output = Command::new(&self.options.binary)
            .args(self.args())
            .output()
            .map_err(|source| CompareError::Launch {
                binary: binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CompareError::Failed {
                binary,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn options() -> CompareOptions {
        CompareOptions {
            newer_version: 0,
            older_version: 1,
            repository_url: "ssh://backups.example.org:22/user/machine".to_string(),
            database_path: Some(PathBuf::from("/home/user/.config/Duplicati/machine.sqlite")),
            locale: "en".to_string(),
            binary: PathBuf::from("duplicati-cli"),
        }
    }

    #[test]
    fn test_args_full() {
        let command = CompareCommand::new(options());

        assert_eq!(
            command.args(),
            vec![
                "compare",
                "ssh://backups.example.org:22/user/machine",
                "0",
                "1",
                "--dbpath=/home/user/.config/Duplicati/machine.sqlite",
                "--force-locale=en",
                "--full-result",
            ]
        );
    }

    #[test]
    fn test_args_without_database_path() {
        let mut opts = options();
        opts.database_path = None;
        let command = CompareCommand::new(opts);

        assert!(!command.args().iter().any(|a| a.starts_with("--dbpath")));
    }

    #[test]
    fn test_display_starts_with_binary() {
        let command = CompareCommand::new(options());
        assert!(command.display().starts_with("duplicati-cli compare "));
    }

    #[test]
    fn test_run_launch_failure() {
        let mut opts = options();
        opts.binary = PathBuf::from("/nonexistent/duplicati-cli-for-test");
        let command = CompareCommand::new(opts);

        match command.run() {
            Err(CompareError::Launch { binary, .. }) => {
                assert_eq!(binary, "/nonexistent/duplicati-cli-for-test");
            }
            other => panic!("expected launch error, got {other:?}"),
        }
    }
}
