//! Test assertion helpers
//!
//! Checks shared by the analyzer and CLI tests: issue ordering and the
//! number of entries in a top-leakers report.

#![allow(dead_code)]

use mempro_analyzer::analyzer::Issue;

/// Assert that issues are ordered by severity rank, then size descending
pub fn assert_priority_ordered(issues: &[Issue]) {
    for (i, pair) in issues.windows(2).enumerate() {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.severity.rank() <= b.severity.rank(),
            "issue {} ({}) ranked after issue {} ({})",
            i,
            a.severity,
            i + 1,
            b.severity
        );
        if a.severity.rank() == b.severity.rank() {
            assert!(
                a.size >= b.size,
                "issues {} and {} share severity {} but sizes {} < {}",
                i,
                i + 1,
                a.severity,
                a.size,
                b.size
            );
        }
    }
}

/// Count numbered entries in a top-leakers report
pub fn leaker_entries(report: &str) -> usize {
    report
        .lines()
        .filter(|line| line.trim_start().starts_with("Leak Size:"))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaker_entries_counts_sections() {
        let report = "Top 2 Memory Leakers:\n====================\n\n\
                      1. a\n   Leak Size: 1 bytes (0.00 KB)\n\n\
                      2. b\n   Leak Size: 2 bytes (0.00 KB)\n\n";
        assert_eq!(leaker_entries(report), 2);
    }

    #[test]
    fn test_priority_ordered_accepts_empty() {
        assert_priority_ordered(&[]);
    }
}
