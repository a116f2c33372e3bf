//! Type definitions for the MemPro export document
//!
//! Field names follow the PascalCase keys written by the MemPro reader. Every
//! field is optional on the wire: missing scalars take their zero value and
//! missing or `null` arrays deserialize as empty.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a JSON `null` as the type's default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Complete MemPro analysis export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Snapshot {
    /// Profiling session name
    pub session_name: String,
    /// Number of snapshots taken during the session
    pub total_snapshots: i64,
    /// Total number of allocations observed
    pub total_allocations: i64,
    /// Total allocated bytes
    pub total_size: i64,
    /// Number of leaked allocations
    pub leak_count: i64,
    /// Total leaked bytes
    pub leak_size: i64,
    /// Fragmentation ratio as a percentage
    pub memory_fragmentation: f64,
    /// Root call tree nodes
    #[serde(deserialize_with = "null_as_default")]
    pub call_trees: Vec<CallTreeNode>,
    /// Per-function allocation statistics
    #[serde(deserialize_with = "null_as_default")]
    pub functions: Vec<FunctionStat>,
    /// Leak records
    #[serde(deserialize_with = "null_as_default")]
    pub leaks: Vec<LeakRecord>,
    /// Page usage records
    #[serde(rename = "PageViews", deserialize_with = "null_as_default")]
    pub page_views: Vec<PageUsage>,
    /// Per-type allocation statistics
    #[serde(deserialize_with = "null_as_default")]
    pub types: Vec<TypeStat>,
}

/// Call tree node with allocation information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CallTreeNode {
    /// Function name
    pub function_name: String,
    /// Source file
    pub file_name: String,
    /// Source line
    pub line_number: i64,
    /// Allocations made at this node
    pub allocation_count: i64,
    /// Total bytes
    pub total_size: i64,
    /// Bytes attributable directly to this node
    pub self_size: i64,
    /// Self size plus all descendants
    pub inclusive_size: i64,
    /// Callees
    #[serde(deserialize_with = "null_as_default")]
    pub children: Vec<CallTreeNode>,
}

impl CallTreeNode {
    /// Visit this node and its descendants in pre-order
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a CallTreeNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }

    /// Depth of this subtree (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

/// Function-level allocation statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FunctionStat {
    /// Function name
    pub function_name: String,
    /// Source file
    pub file_name: String,
    /// Source line
    pub line_number: i64,
    /// Number of allocations
    pub allocation_count: i64,
    /// Total bytes
    pub total_size: i64,
    /// Mean allocation size in bytes
    pub average_size: f64,
    /// Smallest allocation in bytes
    pub min_size: i64,
    /// Largest allocation in bytes
    pub max_size: i64,
    /// Share of total allocated bytes
    pub percentage: f64,
}

/// A leaked allocation site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LeakRecord {
    /// Function name, or an `Unknown Function at 0x...` marker when unresolved
    pub function_name: String,
    /// Source file
    pub file_name: String,
    /// Source line
    pub line_number: i64,
    /// Leaked bytes
    pub leak_size: i64,
    /// Leaked allocations
    pub leak_count: i64,
    /// Profiler-assigned suspicion score (higher is more suspicious)
    pub leak_score: f64,
    /// Raw call stack text
    pub call_stack: String,
    /// Set by the profiler when it believes this is a genuine leak
    pub is_suspect: bool,
}

/// Memory page usage information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PageUsage {
    /// Page base address
    pub address: i64,
    /// Page state (committed, reserved, ...)
    pub state: String,
    /// Page type
    #[serde(rename = "Type")]
    pub page_type: String,
    /// Protection flags
    pub protection: i64,
    /// Stack id of the owning allocation
    #[serde(rename = "StackId")]
    pub stack_id: i64,
    /// Usage in bytes
    pub usage: i64,
    /// Allocations on this page
    pub allocation_count: i64,
    /// Total bytes
    pub total_size: i64,
    /// Owning function
    pub function_name: String,
    /// Owning call stack
    pub call_stack: String,
}

/// Allocation statistics grouped by type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TypeStat {
    /// Type name
    pub type_name: String,
    /// Number of allocations
    pub allocation_count: i64,
    /// Total bytes
    pub total_size: i64,
    /// Mean allocation size in bytes
    pub average_size: f64,
    /// Smallest allocation in bytes
    pub min_size: i64,
    /// Largest allocation in bytes
    pub max_size: i64,
    /// Share of total allocated bytes
    pub percentage: f64,
    /// Function allocating this type most often
    pub most_common_function: String,
    /// File of the most common allocation site
    pub most_common_file: String,
    /// Line of the most common allocation site
    pub most_common_line: i64,
}
