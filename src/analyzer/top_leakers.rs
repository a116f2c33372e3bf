//! Ranked digest of the largest leaks

use crate::fmt::bytes_to_kib;
use crate::snapshot::{LeakRecord, Snapshot};

/// Default number of leakers reported when the caller does not choose
pub const DEFAULT_TOP_LEAKERS: i64 = 10;

/// Render the `n` largest leaks by size
///
/// `n` is clamped to `0..=leaks.len()`; a non-positive `n` yields a
/// `Top 0` header with no entries. Equal sizes keep their input order.
///
/// # Examples
///
/// ```
/// use mempro_analyzer::analyzer::top_leakers;
/// use mempro_analyzer::snapshot::{LeakRecord, Snapshot};
///
/// let snapshot = Snapshot {
///     leaks: vec![LeakRecord { function_name: "Load".into(), leak_size: 2048, ..Default::default() }],
///     ..Default::default()
/// };
///
/// let report = top_leakers(&snapshot, 5);
/// assert!(report.starts_with("Top 1 Memory Leakers:"));
/// assert!(report.contains("1. Load"));
/// ```
pub fn top_leakers(snapshot: &Snapshot, n: i64) -> String {
    let mut leaks: Vec<&LeakRecord> = snapshot.leaks.iter().collect();
    leaks.sort_by(|a, b| b.leak_size.cmp(&a.leak_size));

    let shown = usize::try_from(n).unwrap_or(0).min(leaks.len());

    let mut report = String::new();
    report.push_str(&format!("Top {} Memory Leakers:\n", shown));
    report.push_str("====================\n\n");

    for (rank, leak) in leaks.iter().take(shown).enumerate() {
        render_entry(&mut report, rank + 1, leak);
    }

    report
}

fn render_entry(report: &mut String, rank: usize, leak: &LeakRecord) {
    report.push_str(&format!("{}. {}\n", rank, leak.function_name));
    report.push_str(&format!(
        "   Leak Size: {} bytes ({:.2} KB)\n",
        leak.leak_size,
        bytes_to_kib(leak.leak_size)
    ));
    report.push_str(&format!("   Leak Count: {} allocations\n", leak.leak_count));
    report.push_str(&format!("   Leak Score: {:.2}\n", leak.leak_score));
    report.push_str(&format!("   Suspect: {}\n", leak.is_suspect));
    if !leak.file_name.is_empty() {
        report.push_str(&format!(
            "   Location: {}:{}\n",
            leak.file_name, leak.line_number
        ));
    }
    if !leak.call_stack.is_empty() {
        report.push_str(&format!("   CallStack: {}\n", leak.call_stack));
    }
    report.push('\n');
}
