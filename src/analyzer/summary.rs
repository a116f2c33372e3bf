//! Prose summary of aggregate memory health
//!
//! Downstream consumers display this text verbatim, so the layout below is
//! part of the output contract.

use crate::fmt::bytes_to_mib;
use crate::snapshot::Snapshot;

const CRITICAL_LEAK_PERCENT: f64 = 50.0;
const SEVERE_FRAGMENTATION_PERCENT: f64 = 80.0;

/// Build the multi-line summary report
///
/// # Examples
///
/// ```
/// use mempro_analyzer::analyzer::summarize;
/// use mempro_analyzer::snapshot::Snapshot;
///
/// let snapshot = Snapshot {
///     session_name: "demo".into(),
///     total_size: 1_000_000,
///     leak_size: 600_000,
///     ..Default::default()
/// };
///
/// let summary = summarize(&snapshot);
/// assert!(summary.contains("Leak Percentage: 60.00%"));
/// assert!(summary.contains("- CRITICAL: Over 50% of allocated memory is leaked!"));
/// ```
pub fn summarize(snapshot: &Snapshot) -> String {
    let leak_percentage = snapshot.leak_percentage();

    let mut summary = String::new();
    summary.push_str("Memory Analysis Summary\n");
    summary.push_str("======================\n");
    summary.push_str(&format!("Session: {}\n", snapshot.session_name));
    summary.push_str(&format!(
        "Total Allocations: {}\n",
        snapshot.total_allocations
    ));
    summary.push_str(&format!(
        "Total Size: {} bytes ({:.2} MB)\n",
        snapshot.total_size,
        bytes_to_mib(snapshot.total_size)
    ));
    summary.push_str(&format!("Leak Count: {}\n", snapshot.leak_count));
    summary.push_str(&format!(
        "Leak Size: {} bytes ({:.2} MB)\n",
        snapshot.leak_size,
        bytes_to_mib(snapshot.leak_size)
    ));
    summary.push_str(&format!("Leak Percentage: {:.2}%\n", leak_percentage));
    summary.push_str(&format!(
        "Memory Fragmentation: {:.2}%\n",
        snapshot.memory_fragmentation
    ));
    summary.push_str("\nCritical Findings:\n");

    if leak_percentage > CRITICAL_LEAK_PERCENT {
        summary.push_str("- CRITICAL: Over 50% of allocated memory is leaked!\n");
    }
    if snapshot.memory_fragmentation > SEVERE_FRAGMENTATION_PERCENT {
        summary.push_str("- HIGH: Severe memory fragmentation detected\n");
    }

    let suspect_leaks = snapshot.suspect_leak_count();
    if suspect_leaks > 0 {
        summary.push_str(&format!(
            "- {} suspect leak locations identified\n",
            suspect_leaks
        ));
    }

    summary
}
