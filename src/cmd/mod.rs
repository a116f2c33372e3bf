//! Command handlers for mempro-analyzer CLI
//!
//! Each handler is thin glue: resolve the input, call the analyzer, print.

pub mod analyze;
pub mod completions;
pub mod init;

// Re-export command functions for convenient access
pub use analyze::{
    cmd_all, cmd_fragmentation, cmd_large_allocations, cmd_leaks, cmd_stats, cmd_summary,
    cmd_top_leakers,
};
pub use completions::cmd_completions;
pub use init::cmd_init;
