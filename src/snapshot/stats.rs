//! Aggregate statistics view for lightweight polling

use super::types::Snapshot;
use serde::{Deserialize, Serialize};

/// Aggregate memory statistics derived from a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    /// Session name
    pub session: String,
    /// Total number of allocations
    pub total_allocations: i64,
    /// Total allocated bytes
    pub total_size: i64,
    /// Number of leaked allocations
    pub leak_count: i64,
    /// Total leaked bytes
    pub leak_size: i64,
    /// Fragmentation percentage
    pub fragmentation: f64,
    /// Leaked bytes as a percentage of allocated bytes
    pub leak_percentage: f64,
}

impl Snapshot {
    /// Leaked bytes as a percentage of allocated bytes, 0 unless the total is positive
    ///
    /// # Examples
    ///
    /// ```
    /// use mempro_analyzer::snapshot::Snapshot;
    ///
    /// let snapshot = Snapshot { total_size: 1000, leak_size: 250, ..Default::default() };
    /// assert_eq!(snapshot.leak_percentage(), 25.0);
    ///
    /// let empty = Snapshot { leak_size: 250, ..Default::default() };
    /// assert_eq!(empty.leak_percentage(), 0.0);
    /// ```
    pub fn leak_percentage(&self) -> f64 {
        if self.total_size <= 0 {
            return 0.0;
        }
        self.leak_size as f64 / self.total_size as f64 * 100.0
    }

    /// Number of leak records flagged as suspect by the profiler
    pub fn suspect_leak_count(&self) -> usize {
        self.leaks.iter().filter(|leak| leak.is_suspect).count()
    }

    /// Build the aggregate statistics view
    pub fn stats(&self) -> MemoryStats {
        MemoryStats {
            session: self.session_name.clone(),
            total_allocations: self.total_allocations,
            total_size: self.total_size,
            leak_count: self.leak_count,
            leak_size: self.leak_size,
            fragmentation: self.memory_fragmentation,
            leak_percentage: self.leak_percentage(),
        }
    }
}
