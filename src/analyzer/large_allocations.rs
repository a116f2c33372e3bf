//! Large allocation detection over per-function statistics

use super::issue::{Issue, IssueKind, Severity};
use crate::snapshot::{FunctionStat, Snapshot};

const LARGE_AVERAGE_BYTES: f64 = 10_000.0;
const LARGE_MAX_BYTES: i64 = 50_000;
const HIGH_MAX_BYTES: i64 = 100_000;

const CHUNKING_SUGGESTION: &str = "Review if large allocations can be split into smaller chunks or allocated incrementally. Consider using streaming or chunked processing for large data.";

/// Find functions whose allocations are individually or on average oversized
///
/// Issues keep the order of the function list.
pub fn analyze_large_allocations(snapshot: &Snapshot) -> Vec<Issue> {
    snapshot
        .functions
        .iter()
        .filter(|function| is_large(function))
        .map(large_allocation_issue)
        .collect()
}

fn is_large(function: &FunctionStat) -> bool {
    function.average_size > LARGE_AVERAGE_BYTES || function.max_size > LARGE_MAX_BYTES
}

fn large_allocation_issue(function: &FunctionStat) -> Issue {
    let severity = if function.max_size > HIGH_MAX_BYTES {
        Severity::High
    } else {
        Severity::Medium
    };

    Issue {
        severity,
        kind: IssueKind::LargeAllocation,
        description: format!(
            "Large allocation detected: average {:.0} bytes, max {} bytes across {} allocations",
            function.average_size, function.max_size, function.allocation_count
        ),
        function_name: function.function_name.clone(),
        file_name: function.file_name.clone(),
        line_number: function.line_number,
        size: function.total_size,
        count: function.allocation_count,
        score: function.max_size as f64,
        suggestion: CHUNKING_SUGGESTION.to_string(),
    }
}
