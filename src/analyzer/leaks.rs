//! Leak classification and ranking
//!
//! Each leak record is mapped to an [`Issue`] through a small decision table:
//! severity from the suspect flag and size/count thresholds, description and
//! remediation text from substrings of the function name. The first matching
//! rule wins in every table.

use super::issue::{sort_by_priority, Issue, IssueKind, Severity};
use crate::snapshot::{LeakRecord, Snapshot};

/// Marker MemPro writes for unresolved symbols
pub const UNKNOWN_FUNCTION_MARKER: &str = "Unknown Function";

/// Symbol fragments identifying STL container allocations
pub const STL_ALLOCATION_MARKERS: [&str; 2] = ["std::_Allocate", "std::vector"];

/// Program entry point name
pub const ENTRY_POINT_MARKER: &str = "main";

const CRITICAL_SUSPECT_BYTES: i64 = 100_000;
const HIGH_LEAK_BYTES: i64 = 50_000;
const MEDIUM_LEAK_BYTES: i64 = 10_000;
const MEDIUM_LEAK_COUNT: i64 = 100;

/// Classify and rank every leak in the snapshot, most urgent first
///
/// Records with zero size and zero count are skipped.
///
/// # Examples
///
/// ```
/// use mempro_analyzer::analyzer::{analyze_leaks, Severity};
/// use mempro_analyzer::snapshot::{LeakRecord, Snapshot};
///
/// let snapshot = Snapshot {
///     leaks: vec![
///         LeakRecord { function_name: "Parse".into(), leak_size: 20_000, leak_count: 2, ..Default::default() },
///         LeakRecord { function_name: "Load".into(), leak_size: 200_000, leak_count: 1, is_suspect: true, ..Default::default() },
///         LeakRecord::default(),
///     ],
///     ..Default::default()
/// };
///
/// let issues = analyze_leaks(&snapshot);
/// assert_eq!(issues.len(), 2);
/// assert_eq!(issues[0].severity, Severity::Critical);
/// assert_eq!(issues[1].severity, Severity::Medium);
/// ```
pub fn analyze_leaks(snapshot: &Snapshot) -> Vec<Issue> {
    let mut issues: Vec<Issue> = snapshot
        .leaks
        .iter()
        .filter(|leak| leak.leak_size != 0 || leak.leak_count != 0)
        .map(leak_issue)
        .collect();

    sort_by_priority(&mut issues);

    log::info!(
        "classified {} of {} leak records",
        issues.len(),
        snapshot.leaks.len()
    );
    issues
}

fn leak_issue(leak: &LeakRecord) -> Issue {
    Issue {
        severity: classify_leak(leak),
        kind: IssueKind::MemoryLeak,
        description: leak_description(leak),
        function_name: leak.function_name.clone(),
        file_name: leak.file_name.clone(),
        line_number: leak.line_number,
        size: leak.leak_size,
        count: leak.leak_count,
        score: leak.leak_score,
        suggestion: leak_suggestion(leak).to_string(),
    }
}

/// Severity tier for a leak record
pub fn classify_leak(leak: &LeakRecord) -> Severity {
    if leak.is_suspect && leak.leak_size > CRITICAL_SUSPECT_BYTES {
        Severity::Critical
    } else if leak.is_suspect || leak.leak_size > HIGH_LEAK_BYTES {
        Severity::High
    } else if leak.leak_size > MEDIUM_LEAK_BYTES || leak.leak_count > MEDIUM_LEAK_COUNT {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Human-readable description of a leak record
pub fn leak_description(leak: &LeakRecord) -> String {
    if leak.function_name.contains(UNKNOWN_FUNCTION_MARKER) {
        format!(
            "Unknown function leaked {} bytes across {} allocations. This may indicate missing debug symbols or dynamically loaded code.",
            leak.leak_size, leak.leak_count
        )
    } else {
        format!(
            "Function leaked {} bytes across {} allocations",
            leak.leak_size, leak.leak_count
        )
    }
}

/// Remediation advice for a leak record, keyed on its function name
pub fn leak_suggestion(leak: &LeakRecord) -> &'static str {
    let name = leak.function_name.as_str();

    if name.contains(UNKNOWN_FUNCTION_MARKER) {
        "Enable debug symbols and rebuild with full symbol information to identify the exact source of this leak. Check for third-party libraries or dynamically loaded modules."
    } else if STL_ALLOCATION_MARKERS
        .iter()
        .any(|marker| name.contains(marker))
    {
        "STL container leak detected. Ensure proper cleanup in destructors, check for circular references, and verify that containers are properly cleared before going out of scope."
    } else if name.contains(ENTRY_POINT_MARKER) {
        "Leak originated from main function. Review allocation ownership and ensure all allocated resources are freed before program exit. Consider using RAII or smart pointers."
    } else {
        "Review allocation patterns in this function and ensure all allocated memory is properly deallocated. Consider using smart pointers (std::unique_ptr, std::shared_ptr) or RAII patterns."
    }
}
