//! `docsearch stats` — summarize the contents of an index.

use std::path::PathBuf;

use clap::Args;
use console::style;
use docsearch_index::SearchIndex;

#[derive(Args)]
pub struct StatsArgs {
    /// Path to the search index file
    #[arg(default_value = "search_index.js")]
    index: PathBuf,

    /// Emit the summary as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: StatsArgs) -> i32 {
    super::run_command(|| execute(args))
}

fn execute(args: StatsArgs) -> Result<(), String> {
    let index = SearchIndex::load(&args.index).map_err(|err| format!("Failed to load index: {err}"))?;
    let stats = index.stats();

    if args.json {
        let rendered = serde_json::to_string_pretty(&stats)
            .map_err(|err| format!("Failed to serialize stats: {err}"))?;
        println!("{rendered}");
        return Ok(());
    }

    println!(
        "{} records across {} pages",
        style(stats.records).bold(),
        style(stats.pages).bold()
    );
    for (category, count) in &stats.categories {
        println!("  {count:>6}  {category}");
    }

    Ok(())
}
