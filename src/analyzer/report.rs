//! Combined report of every analysis

use super::fragmentation::analyze_fragmentation;
use super::issue::Issue;
use super::large_allocations::analyze_large_allocations;
use super::leaks::analyze_leaks;
use super::summary::summarize;
use crate::snapshot::Snapshot;
use serde::{Deserialize, Serialize};

/// Summary plus all issue lists for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllIssuesReport {
    /// Prose summary
    pub summary: String,
    /// Ranked leak issues
    pub leaks: Vec<Issue>,
    /// Zero or one fragmentation issue
    pub fragmentation: Vec<Issue>,
    /// Large allocation issues in function order
    pub large_allocations: Vec<Issue>,
}

impl AllIssuesReport {
    /// Total number of issues across all categories
    pub fn issue_count(&self) -> usize {
        self.leaks.len() + self.fragmentation.len() + self.large_allocations.len()
    }
}

/// Run every analysis over the same snapshot
///
/// The analyses only borrow the snapshot, so they run in parallel.
pub fn all_issues(snapshot: &Snapshot) -> AllIssuesReport {
    let ((summary, leaks), (fragmentation, large_allocations)) = rayon::join(
        || rayon::join(|| summarize(snapshot), || analyze_leaks(snapshot)),
        || {
            rayon::join(
                || analyze_fragmentation(snapshot),
                || analyze_large_allocations(snapshot),
            )
        },
    );

    AllIssuesReport {
        summary,
        leaks,
        fragmentation,
        large_allocations,
    }
}
