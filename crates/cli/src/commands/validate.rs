//! `docsearch validate` — check that an index file decodes cleanly.
//!
//! Decoding is wholesale: a file either yields a complete index or a single
//! error naming what made it undecodable. A site embedding a broken index
//! should disable its search box, so the exit code is the contract here.

use std::path::PathBuf;

use clap::Args;
use console::style;
use docsearch_index::SearchIndex;

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the search index file
    index: PathBuf,
}

pub fn run(args: ValidateArgs) -> i32 {
    super::run_command(|| execute(args))
}

fn execute(args: ValidateArgs) -> Result<(), String> {
    let index = SearchIndex::load(&args.index)
        .map_err(|err| format!("{}: {err}", args.index.display()))?;

    println!(
        "{} {} ({} records)",
        style("OK").green().bold(),
        args.index.display(),
        index.len()
    );
    Ok(())
}
