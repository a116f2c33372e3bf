//! Memory issue analysis over MemPro snapshots
//!
//! Provides:
//! - Leak classification and ranking
//! - Fragmentation assessment
//! - Large allocation detection
//! - Prose summary and top-leaker reports
//!
//! Every analysis is a pure function of a borrowed [`Snapshot`].
//!
//! # Examples
//!
//! ```no_run
//! use mempro_analyzer::analyzer::MemoryAnalyzer;
//!
//! let analyzer = MemoryAnalyzer::from_path("test_memory_analysis.json")?;
//! for issue in analyzer.analyze_leaks().iter().take(5) {
//!     println!("[{}] {} - {}", issue.severity, issue.function_name, issue.description);
//! }
//! println!("{}", analyzer.summary());
//! # Ok::<(), mempro_analyzer::error::AnalyzerError>(())
//! ```

pub mod fragmentation;
pub mod issue;
pub mod issue_report;
pub mod large_allocations;
pub mod leaks;
pub mod report;
pub mod summary;
pub mod top_leakers;

pub use fragmentation::analyze_fragmentation;
pub use issue::{sort_by_priority, Issue, IssueKind, Severity};
pub use issue_report::{print_issue_report, render_issue_report};
pub use large_allocations::analyze_large_allocations;
pub use leaks::{analyze_leaks, classify_leak, leak_description, leak_suggestion};
pub use report::{all_issues, AllIssuesReport};
pub use summary::summarize;
pub use top_leakers::{top_leakers, DEFAULT_TOP_LEAKERS};

use crate::error::AnalyzerError;
use crate::snapshot::{MemoryStats, Snapshot, SnapshotLoader};
use std::path::Path;

/// Analyzer owning one immutable snapshot
#[derive(Debug, Clone)]
pub struct MemoryAnalyzer {
    snapshot: Snapshot,
}

impl MemoryAnalyzer {
    /// Create an analyzer over an already-loaded snapshot
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Load a MemPro export and create an analyzer over it
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AnalyzerError> {
        SnapshotLoader::load(path).map(Self::new)
    }

    /// The analysed snapshot
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Ranked leak issues, most urgent first
    #[must_use = "Analysis results should be used or printed"]
    pub fn analyze_leaks(&self) -> Vec<Issue> {
        analyze_leaks(&self.snapshot)
    }

    /// Zero or one fragmentation issue
    #[must_use = "Analysis results should be used or printed"]
    pub fn analyze_fragmentation(&self) -> Vec<Issue> {
        analyze_fragmentation(&self.snapshot)
    }

    /// Oversized allocation issues in function order
    #[must_use = "Analysis results should be used or printed"]
    pub fn analyze_large_allocations(&self) -> Vec<Issue> {
        analyze_large_allocations(&self.snapshot)
    }

    /// Multi-line summary report
    pub fn summary(&self) -> String {
        summarize(&self.snapshot)
    }

    /// Digest of the `n` largest leaks
    pub fn top_leakers(&self, n: i64) -> String {
        top_leakers(&self.snapshot, n)
    }

    /// Summary plus every issue list
    pub fn all_issues(&self) -> AllIssuesReport {
        all_issues(&self.snapshot)
    }

    /// Aggregate statistics view
    pub fn stats(&self) -> MemoryStats {
        self.snapshot.stats()
    }
}

impl From<Snapshot> for MemoryAnalyzer {
    fn from(snapshot: Snapshot) -> Self {
        Self::new(snapshot)
    }
}
