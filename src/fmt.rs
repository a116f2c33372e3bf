//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Microscope emoji for analysis/inspection
pub const MICROSCOPE: Emoji = Emoji("🔍", ">>");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// Convert bytes to kibibytes
pub fn bytes_to_kib(bytes: i64) -> f64 {
    bytes as f64 / KIB
}

/// Convert bytes to mebibytes
pub fn bytes_to_mib(bytes: i64) -> f64 {
    bytes as f64 / MIB
}

/// Format bytes as human-readable size string
///
/// # Examples
///
/// ```
/// use mempro_analyzer::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1_048_576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: i64) -> String {
    const KB: i64 = 1024;
    const MB: i64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes_to_mib(bytes))
    } else if bytes >= KB {
        format!("{:.2} KB", bytes_to_kib(bytes))
    } else {
        format!("{} B", bytes)
    }
}
