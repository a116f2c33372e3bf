//! Fragmentation analysis

use super::issue::{Issue, IssueKind, Severity};
use crate::snapshot::Snapshot;

/// Fragmentation above this percentage is severe
pub const SEVERE_FRAGMENTATION_PERCENT: f64 = 80.0;

/// Fragmentation above this percentage is worth monitoring
pub const MODERATE_FRAGMENTATION_PERCENT: f64 = 50.0;

/// Report the session's fragmentation ratio as at most one issue
///
/// Both thresholds are exclusive: exactly 80% is Medium, exactly 50% is
/// not reported.
pub fn analyze_fragmentation(snapshot: &Snapshot) -> Vec<Issue> {
    let fragmentation = snapshot.memory_fragmentation;

    let (severity, impact, suggestion) = if fragmentation > SEVERE_FRAGMENTATION_PERCENT {
        (
            Severity::High,
            "which indicates severe fragmentation",
            "Consider implementing object pooling or using memory arenas to reduce fragmentation. Review allocation patterns and consolidate small allocations where possible.",
        )
    } else if fragmentation > MODERATE_FRAGMENTATION_PERCENT {
        (
            Severity::Medium,
            "which may impact performance",
            "Monitor fragmentation levels and consider optimizing allocation patterns if fragmentation increases.",
        )
    } else {
        return Vec::new();
    };

    vec![Issue {
        severity,
        kind: IssueKind::MemoryFragmentation,
        description: format!(
            "Memory fragmentation is at {:.2}%, {}",
            fragmentation, impact
        ),
        function_name: String::new(),
        file_name: String::new(),
        line_number: 0,
        size: snapshot.total_size,
        count: snapshot.total_allocations,
        score: fragmentation,
        suggestion: suggestion.to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(fragmentation: f64) -> Snapshot {
        Snapshot {
            memory_fragmentation: fragmentation,
            total_size: 8_388_608,
            total_allocations: 5_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_severe_fragmentation_is_high() {
        let issues = analyze_fragmentation(&snapshot(85.5));
        assert_eq!(issues.len(), 1);

        let issue = &issues[0];
        assert_eq!(issue.severity, Severity::High);
        assert_eq!(issue.kind, IssueKind::MemoryFragmentation);
        assert_eq!(
            issue.description,
            "Memory fragmentation is at 85.50%, which indicates severe fragmentation"
        );
        assert!(issue.suggestion.contains("object pooling"));
        assert!(issue.suggestion.contains("memory arenas"));
    }

    #[test]
    fn test_exactly_eighty_is_medium() {
        let issues = analyze_fragmentation(&snapshot(80.0));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Medium);
        assert!(issues[0].suggestion.starts_with("Monitor"));
    }

    #[test]
    fn test_exactly_fifty_yields_nothing() {
        assert!(analyze_fragmentation(&snapshot(50.0)).is_empty());
        assert!(analyze_fragmentation(&snapshot(0.0)).is_empty());
    }

    #[test]
    fn test_just_over_fifty_is_medium() {
        let issues = analyze_fragmentation(&snapshot(50.01));
        assert_eq!(issues[0].severity, Severity::Medium);
        assert!(issues[0].description.contains("may impact performance"));
    }

    #[test]
    fn test_issue_uses_aggregate_totals() {
        let issues = analyze_fragmentation(&snapshot(120.0));
        let issue = &issues[0];

        assert_eq!(issue.size, 8_388_608);
        assert_eq!(issue.count, 5_000);
        assert_eq!(issue.score, 120.0);
        assert!(issue.function_name.is_empty());
        assert!(issue.file_name.is_empty());
        assert_eq!(issue.line_number, 0);
    }
}
