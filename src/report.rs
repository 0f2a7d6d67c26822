//! Human-readable summary rendering.
//!
//! Renders one report section per entry kind: a counts line, a placeholder
//! line per missing path, a size-sorted line per existing path, and a total.
//! Rendering returns plain strings so the exact output can be asserted in
//! tests; the binary prints them verbatim.

use crate::resolver::Resolved;
use crate::utils::size_human;

/// Header printed once above the modified-entry sections.
pub const HEADER: &str = "MODIFIED";

/// Placeholder size column for paths that no longer exist on disk.
const UNKNOWN_SIZE: &str = "   ?.? B  ";

/// Render one report section for the given noun (`"files"` or `"dirs"`).
///
/// Output shape:
///
/// ```text
/// modified files: 3, existing: 2
///    ?.? B   /path/that/vanished
///    1.0 KiB /small/file
///    2.0 MiB /large/file
/// total size of modified files: 2.0 MiB
/// ```
///
/// Missing paths come first in input order with an unknown-size placeholder;
/// existing paths follow in ascending size order with the size right-justified
/// to ten characters. The total covers existing paths only.
#[must_use]
pub fn render_section(noun: &str, resolved: &Resolved) -> String {
    let existing = resolved.existing.len();
    let total = existing + resolved.missing.len();

    let mut out = String::new();
    out.push_str(&format!("modified {noun}: {total}, existing: {existing}\n"));

    for path in &resolved.missing {
        out.push_str(&format!("{UNKNOWN_SIZE} {path}\n"));
    }

    for (path, size) in &resolved.existing {
        out.push_str(&format!("{:>10} {path}\n", size_human(*size)));
    }

    out.push_str(&format!(
        "total size of modified {noun}: {}\n",
        size_human(resolved.total_size())
    ));

    out
}
