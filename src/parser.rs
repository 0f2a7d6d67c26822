//! Compare report parsing.
//!
//! Duplicati's `compare` report is a plain-text document with three entry
//! sections, each introduced by a counted header line:
//!
//! ```text
//! 2 added entries:
//! + /home/user/new-file
//! + /home/user/new-dir/
//! 1 modified entries:
//! ~ /home/user/changed-file
//! 0 deleted entries:
//! Added folders:
//! ```
//!
//! Parsing walks the lines once through an explicit state machine. Entry
//! lines are trimmed and stripped of their change marker (`+`, `~`, `-`).
//! A report that never produces a header simply yields empty sections, and a
//! section whose closing header is missing collects to the end of the input;
//! malformed reports degrade instead of failing.

use std::sync::LazyLock;

use regex::Regex;

/// Header line opening the added-entries section, e.g. `13 added entries:`.
static ADDED_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+ added entries:$").expect("valid literal pattern"));

/// Header line opening the modified-entries section.
static MODIFIED_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+ modified entries:$").expect("valid literal pattern"));

/// Header line opening the deleted-entries section.
static DELETED_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+ deleted entries:$").expect("valid literal pattern"));

/// First line of the trailing folder summary, which ends entry collection.
const FOLDERS_HEADER: &str = "Added folders:";

/// Position of the line walk within the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Discarding preamble lines until the added-entries header.
    SeekAdded,
    /// Collecting added entries.
    InAdded,
    /// Collecting modified entries.
    InModified,
    /// Collecting deleted entries.
    InDeleted,
    /// Trailing summary reached; remaining lines are ignored.
    Done,
}

/// The three entry lists of a compare report, in report order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportSections {
    /// Entries present only in the newer snapshot.
    pub added: Vec<String>,

    /// Entries present in both snapshots with differing content.
    pub modified: Vec<String>,

    /// Entries present only in the older snapshot.
    pub deleted: Vec<String>,
}

impl ReportSections {
    /// Parse the full text of a compare report into its three entry lists.
    ///
    /// This is a pure function of the input text: blank lines are skipped,
    /// every other line is trimmed and fed to the state machine exactly once.
    #[must_use]
    pub fn parse(report: &str) -> Self {
        let mut sections = Self::default();
        let mut state = ParseState::SeekAdded;

        for line in report.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            state = sections.step(state, line);
            if state == ParseState::Done {
                break;
            }
        }

        sections
    }

    /// Total number of entries across all three sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.added.len() + self.modified.len() + self.deleted.len()
    }

    /// Whether the report contained no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advance the state machine by one non-blank, trimmed line.
    fn step(&mut self, state: ParseState, line: &str) -> ParseState {
        match state {
            ParseState::SeekAdded => {
                if ADDED_HEADER.is_match(line) {
                    ParseState::InAdded
                } else {
                    ParseState::SeekAdded
                }
            }
            ParseState::InAdded => {
                if MODIFIED_HEADER.is_match(line) {
                    ParseState::InModified
                } else {
                    self.added.push(strip_marker(line, '+'));
                    ParseState::InAdded
                }
            }
            ParseState::InModified => {
                if DELETED_HEADER.is_match(line) {
                    ParseState::InDeleted
                } else {
                    self.modified.push(strip_marker(line, '~'));
                    ParseState::InModified
                }
            }
            ParseState::InDeleted => {
                if line.starts_with(FOLDERS_HEADER) {
                    ParseState::Done
                } else {
                    self.deleted.push(strip_marker(line, '-'));
                    ParseState::InDeleted
                }
            }
            ParseState::Done => ParseState::Done,
        }
    }
}

/// Strip a leading change marker and any surrounding marker-adjacent spaces.
///
/// Matches any run of the marker character and spaces at the start of the
/// line, so `+ /path`, `+/path` and `/path` all yield `/path`.
fn strip_marker(line: &str, marker: char) -> String {
    line.trim_start_matches([marker, ' ']).to_string()
}
