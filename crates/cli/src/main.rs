//! `docsearch` queries the `search_index.js` artifacts emitted by static
//! documentation generators from the terminal.

use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(
    name = "docsearch",
    version,
    about = "\x1b[33mdocsearch\x1b[0m queries static documentation search indexes 🔎"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 🔎 Search an index for matching fragments
    Query(commands::query::QueryArgs),
    /// 📊 Summarize the contents of an index
    Stats(commands::stats::StatsArgs),
    /// ✅ Check that an index file decodes cleanly
    Validate(commands::validate::ValidateArgs),
}

fn main() {
    logging::init_tracing();
    std::process::exit(run(Cli::parse()));
}

fn run(cli: Cli) -> i32 {
    match cli.command {
        Some(Commands::Query(args)) => commands::query::run(args),
        Some(Commands::Stats(args)) => commands::stats::run(args),
        Some(Commands::Validate(args)) => commands::validate::run(args),
        None => {
            let mut cmd = Cli::command();
            let _ = cmd.print_help();
            println!();
            0
        }
    }
}
