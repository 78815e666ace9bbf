//! `docsearch query` — search an index for matching fragments.

use std::path::PathBuf;

use clap::Args;
use console::style;
use docsearch_index::{Category, Query, SearchIndex, query};
use serde::Serialize;

/// How many words of body text to show per hit.
const EXCERPT_WORDS: usize = 24;

#[derive(Args)]
pub struct QueryArgs {
    /// Query terms
    #[arg(required = true)]
    terms: Vec<String>,

    /// Path to the search index file (JavaScript wrapper or bare JSON)
    #[arg(long, short, default_value = "search_index.js")]
    index: PathBuf,

    /// Restrict results to one category (e.g. "function", "type")
    #[arg(long, short)]
    category: Option<String>,

    /// Maximum number of results to display
    #[arg(long, short, default_value_t = 10)]
    limit: usize,

    /// Base URL prepended to result locations
    #[arg(long)]
    base_url: Option<String>,

    /// Emit results as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonHit<'a> {
    location: &'a str,
    page: &'a str,
    title: &'a str,
    category: &'a str,
    score: f32,
}

pub fn run(args: QueryArgs) -> i32 {
    super::run_command(|| execute(args))
}

fn execute(args: QueryArgs) -> Result<(), String> {
    let index = SearchIndex::load(&args.index).map_err(|err| format!("Failed to load index: {err}"))?;
    tracing::debug!(
        "Loaded {} records from {}",
        index.len(),
        args.index.display()
    );

    let mut search = Query::new(&args.terms.join(" ")).with_limit(args.limit);
    if search.is_empty() {
        return Err("Query contains no searchable terms".to_string());
    }
    if let Some(category) = args.category {
        search = search.with_category(Category::from(category));
    }
    let hits = index.search(&search);

    if args.json {
        let payload: Vec<JsonHit<'_>> = hits
            .iter()
            .map(|hit| JsonHit {
                location: &hit.record.location,
                page: &hit.record.page,
                title: &hit.record.title,
                category: hit.record.category.as_str(),
                score: hit.score,
            })
            .collect();
        let rendered = serde_json::to_string_pretty(&payload)
            .map_err(|err| format!("Failed to serialize results: {err}"))?;
        println!("{rendered}");
        return Ok(());
    }

    if hits.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    for hit in &hits {
        let record = hit.record;
        let heading = if record.title.is_empty() {
            &record.page
        } else {
            &record.title
        };
        println!(
            "{} {}",
            style(heading).bold(),
            style(format!("[{}]", record.category)).dim()
        );

        let target = match &args.base_url {
            Some(base) => record.href(base),
            None => record.location.clone(),
        };
        println!("  {}", style(target).cyan());

        let snippet = query::excerpt(&record.text, search.terms(), EXCERPT_WORDS);
        if !snippet.is_empty() {
            println!("  {snippet}");
        }
        println!();
    }

    Ok(())
}
