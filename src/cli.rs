//! CLI argument definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Memory issue analyzer for MemPro exports
///
/// Loads a MemPro JSON analysis export and reports leaks, fragmentation and
/// oversized allocations, most urgent first.
#[derive(Parser, Debug)]
#[command(name = "mempro-analyzer", author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = "\
EXAMPLES:
    mempro-analyzer leaks --json-path session.json     Ranked leak issues
    mempro-analyzer top-leakers --count 5              Five largest leaks
    MEMPRO_JSON_PATH=session.json mempro-analyzer all  Everything as JSON")]
pub struct Cli {
    /// Path to MemPro JSON analysis file (falls back to MEMPRO_JSON_PATH, then config)
    #[arg(long, global = true, value_name = "FILE")]
    pub json_path: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prioritized list of memory leaks
    Leaks {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Overall memory usage summary including leak percentage and fragmentation
    Summary,

    /// The N functions leaking the most memory
    TopLeakers {
        /// Number of leakers to show (default: 10, or top-leakers from config)
        #[arg(short, long, allow_hyphen_values = true)]
        count: Option<String>,
    },

    /// Fragmentation assessment and recommendations
    Fragmentation {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Unusually large allocations that may need optimization
    LargeAllocations {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summary plus every issue list as JSON
    All,

    /// Aggregate memory statistics as JSON
    Stats,

    /// Create a .mempro-analyzer.toml in the current directory
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
