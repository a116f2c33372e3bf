//! Issue types produced by the analyzers

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Issue severity levels
///
/// Serialized as a plain label. Labels outside the four known tiers are kept
/// in [`Severity::Other`] and rank below every known tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    /// Confirmed suspect leak over 100 KB
    Critical,
    /// Suspect or large leak, severe fragmentation, very large allocations
    High,
    /// Moderate leak, fragmentation or allocation size
    Medium,
    /// Everything else worth reporting
    Low,
    /// Unrecognized label
    Other(String),
}

impl Severity {
    /// Convert to string representation
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Other(label) => label.as_str(),
        }
    }

    /// Sort rank, lower is more urgent
    ///
    /// # Examples
    ///
    /// ```
    /// use mempro_analyzer::analyzer::Severity;
    ///
    /// assert_eq!(Severity::Critical.rank(), 0);
    /// assert_eq!(Severity::Low.rank(), 3);
    /// assert_eq!(Severity::from("Urgent".to_string()).rank(), usize::MAX);
    /// ```
    pub fn rank(&self) -> usize {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
            Severity::Other(_) => usize::MAX,
        }
    }
}

impl From<String> for Severity {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Critical" => Severity::Critical,
            "High" => Severity::High,
            "Medium" => Severity::Medium,
            "Low" => Severity::Low,
            _ => Severity::Other(label),
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category of a detected issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    /// Memory that was never freed
    MemoryLeak,
    /// Allocator fragmentation across the whole session
    MemoryFragmentation,
    /// Function allocating oversized blocks
    LargeAllocation,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IssueKind::MemoryLeak => "MemoryLeak",
            IssueKind::MemoryFragmentation => "MemoryFragmentation",
            IssueKind::LargeAllocation => "LargeAllocation",
        };
        write!(f, "{}", s)
    }
}

/// A detected memory issue
///
/// Location fields are empty for aggregate issues such as fragmentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Severity tier
    pub severity: Severity,
    /// Issue category
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Human-readable description
    pub description: String,
    /// Function name
    pub function_name: String,
    /// Source file
    pub file_name: String,
    /// Source line
    pub line_number: i64,
    /// Size in bytes
    pub size: i64,
    /// Allocation count
    pub count: i64,
    /// Numeric score (leak score, fragmentation percent, or max allocation size)
    pub score: f64,
    /// Remediation advice
    pub suggestion: String,
}

/// Compare two issues for "most urgent first" presentation
///
/// Severity rank ascending, then size descending.
pub fn priority_order(a: &Issue, b: &Issue) -> Ordering {
    a.severity
        .rank()
        .cmp(&b.severity.rank())
        .then_with(|| b.size.cmp(&a.size))
}

/// Stable sort of issues by [`priority_order`]
pub fn sort_by_priority(issues: &mut [Issue]) {
    issues.sort_by(priority_order);
}
