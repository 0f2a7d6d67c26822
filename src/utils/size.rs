//! Byte size formatting.
//!
//! This module provides the human-readable size formatting used throughout
//! the report output. Sizes are rendered in binary units with a fixed-width
//! unit label so that columns of sizes line up when right-justified.

/// Format a byte count as a human-readable string using binary units.
///
/// The value is divided by 1024 until it drops below 1024 or the unit list
/// (B, KiB, MiB, GiB, TiB) is exhausted, in which case PiB is used. The
/// number keeps one decimal digit and the unit label is padded to three
/// characters so that right-justified sizes align in columnar output.
///
/// # Examples
///
/// ```
/// # use duplicati_diff_sizes::utils::size_human;
/// assert_eq!(size_human(0), "0.0 B  ");
/// assert_eq!(size_human(1024), "1.0 KiB");
/// assert_eq!(size_human(1536), "1.5 KiB");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)] // sizes far below 2^52 in practice
pub fn size_human(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B  ", "KiB", "MiB", "GiB", "TiB"];

    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }

    format!("{size:.1} PiB")
}
