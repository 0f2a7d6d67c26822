//! Report output configuration.

/// Output options for the size report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Also report modified directories (leaf directories only, sized
    /// recursively)
    pub include_dirs: bool,

    /// Print parsed section counts and the invoked command line to stderr
    pub verbose: bool,
}
