use clap::Parser;
use mempro_analyzer::cli::{Cli, Commands};
use mempro_analyzer::cmd;
use std::process;

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let json_path = cli.json_path.as_deref();

    let result = match &cli.command {
        Some(Commands::Leaks { json }) => cmd::cmd_leaks(json_path, *json),
        Some(Commands::Summary) => cmd::cmd_summary(json_path),
        Some(Commands::TopLeakers { count }) => cmd::cmd_top_leakers(json_path, count.as_deref()),
        Some(Commands::Fragmentation { json }) => cmd::cmd_fragmentation(json_path, *json),
        Some(Commands::LargeAllocations { json }) => cmd::cmd_large_allocations(json_path, *json),
        Some(Commands::All) => cmd::cmd_all(json_path),
        Some(Commands::Stats) => cmd::cmd_stats(json_path),
        Some(Commands::Init) => cmd::cmd_init(),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        None => {
            println!("mempro-analyzer v{}", env!("CARGO_PKG_VERSION"));
            println!("Memory issue analyzer for MemPro exports\n");
            println!("Usage: mempro-analyzer <COMMAND>\n");
            println!("Commands:");
            println!("  leaks              Prioritized list of memory leaks");
            println!("  summary            Overall memory usage summary");
            println!("  top-leakers        The N functions leaking the most memory");
            println!("  fragmentation      Fragmentation assessment");
            println!("  large-allocations  Unusually large allocations");
            println!("  all                Every analysis as JSON");
            println!("  stats              Aggregate statistics as JSON");
            println!("\nRun 'mempro-analyzer <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use mempro_analyzer::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
