//! Relevance-ordered matching against the decoded index.
//!
//! This is the contract a search widget implements on top of the format:
//! case-insensitive substring matching of query terms against record fields.
//! Field type dominates the score: a title match outranks a page-name match,
//! which outranks a body-text match.

use crate::record::{Category, SearchRecord};

/// Weight of a term occurring in the record title.
const TITLE_WEIGHT: f32 = 8.0;
/// Weight of a term occurring in the page name.
const PAGE_WEIGHT: f32 = 3.0;
/// Weight of a term occurring in the body text.
const TEXT_WEIGHT: f32 = 1.0;
/// Multiplier for records matching every query term.
const ALL_TERMS_BONUS: f32 = 2.0;

/// A parsed search query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    terms: Vec<String>,
    category: Option<Category>,
    limit: Option<usize>,
}

impl Query {
    /// Tokenize a raw query string into lowercase terms. Terms are split on
    /// non-alphanumeric boundaries, so `SBML.Maybe` queries as two terms.
    pub fn new(text: &str) -> Self {
        let terms = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self {
            terms,
            category: None,
            limit: None,
        }
    }

    /// Restrict results to records of one category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Cap the number of returned hits.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The lowercase terms this query matches on.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Whether the query carries no terms. An empty query matches nothing.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// One query hit: a matched record and its relevance score (higher is
/// better).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    /// The matched record.
    pub record: &'a SearchRecord,
    /// Relevance score under the field-weighted model above.
    pub score: f32,
}

/// Score every record against the query and return hits ordered by
/// descending score. Ties keep document order, so repeated runs of the same
/// query are deterministic.
pub(crate) fn search<'a>(records: &'a [SearchRecord], query: &Query) -> Vec<SearchHit<'a>> {
    if query.terms.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();
    for record in records {
        if let Some(category) = &query.category {
            if record.category != *category {
                continue;
            }
        }

        let title = record.title.to_lowercase();
        let page = record.page.to_lowercase();
        let text = record.text.to_lowercase();

        let mut score = 0.0;
        let mut matched = 0usize;
        for term in &query.terms {
            let mut term_score = 0.0;
            if title.contains(term.as_str()) {
                term_score += TITLE_WEIGHT;
            }
            if page.contains(term.as_str()) {
                term_score += PAGE_WEIGHT;
            }
            if text.contains(term.as_str()) {
                term_score += TEXT_WEIGHT;
            }
            if term_score > 0.0 {
                matched += 1;
                score += term_score;
            }
        }

        if matched == 0 {
            continue;
        }
        if matched == query.terms.len() {
            score *= ALL_TERMS_BONUS;
        }
        hits.push(SearchHit { record, score });
    }

    // Stable sort: equal scores keep document order.
    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if let Some(limit) = query.limit {
        hits.truncate(limit);
    }

    tracing::debug!(
        "Query for {:?}: {} hits",
        query.terms.join(" "),
        hits.len()
    );
    hits
}

/// Render a short display snippet around the first term occurrence.
///
/// Operates on whitespace-separated words, so embedded markup and newlines
/// in the body text collapse to a single line.
pub fn excerpt(text: &str, terms: &[String], max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() || max_words == 0 {
        return String::new();
    }

    let hit = words.iter().position(|word| {
        let lowered = word.to_lowercase();
        terms.iter().any(|term| lowered.contains(term.as_str()))
    });
    let start = hit.map_or(0, |position| position.saturating_sub(max_words / 4));
    let end = (start + max_words).min(words.len());

    let mut out = String::new();
    if start > 0 {
        out.push_str("… ");
    }
    out.push_str(&words[start..end].join(" "));
    if end < words.len() {
        out.push_str(" …");
    }
    out
}
