//! MemPro export data model
//!
//! A [`Snapshot`] is parsed once per analysis session and never mutated
//! afterwards; analyses borrow it immutably.
//!
//! # Examples
//!
//! ```
//! use mempro_analyzer::snapshot::Snapshot;
//!
//! let snapshot = Snapshot::from_json_str(r#"{
//!     "SessionName": "editor",
//!     "TotalSize": 4096,
//!     "LeakSize": 1024
//! }"#)?;
//!
//! assert_eq!(snapshot.leak_percentage(), 25.0);
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod loader;
pub mod stats;
pub mod types;

pub use loader::SnapshotLoader;
pub use stats::MemoryStats;
pub use types::{CallTreeNode, FunctionStat, LeakRecord, PageUsage, Snapshot, TypeStat};
