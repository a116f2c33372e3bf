#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! mempro-analyzer library
//!
//! Turns a MemPro JSON analysis export into a prioritized list of memory
//! issues (leaks, fragmentation, oversized allocations) with remediation
//! suggestions. It can be used programmatically in addition to the CLI.
//!
//! # Basic Example
//!
//! ```
//! use mempro_analyzer::analyzer::{MemoryAnalyzer, Severity};
//! use mempro_analyzer::snapshot::Snapshot;
//!
//! let snapshot = Snapshot::from_json_str(r#"{
//!     "SessionName": "game",
//!     "TotalSize": 1000000,
//!     "LeakSize": 150000,
//!     "MemoryFragmentation": 82.5,
//!     "Leaks": [{
//!         "FunctionName": "std::vector<Mesh>::push_back",
//!         "LeakSize": 150000,
//!         "LeakCount": 12,
//!         "IsSuspect": true
//!     }]
//! }"#)?;
//!
//! let analyzer = MemoryAnalyzer::new(snapshot);
//!
//! let leaks = analyzer.analyze_leaks();
//! assert_eq!(leaks[0].severity, Severity::Critical);
//! assert!(leaks[0].suggestion.starts_with("STL container"));
//!
//! let fragmentation = analyzer.analyze_fragmentation();
//! assert_eq!(fragmentation[0].severity, Severity::High);
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! # Loading From Disk
//!
//! ```no_run
//! use mempro_analyzer::analyzer::MemoryAnalyzer;
//!
//! let analyzer = MemoryAnalyzer::from_path("test_memory_analysis.json")?;
//! print!("{}", analyzer.summary());
//! print!("{}", analyzer.top_leakers(10));
//! # Ok::<(), mempro_analyzer::error::AnalyzerError>(())
//! ```

/// Leak, fragmentation and large-allocation analysis
pub mod analyzer;
/// CLI argument definitions
pub mod cli;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file and input path resolution
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// MemPro export data model and loader
pub mod snapshot;
