//! The decoded, immutable search index.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Serialize;

use crate::error::IndexError;
use crate::loader;
use crate::query::{self, Query, SearchHit};
use crate::record::SearchRecord;

/// An ordered, immutable collection of [`SearchRecord`]s.
///
/// Produced wholesale by the loader and never mutated afterwards, so it can
/// be shared freely across concurrent readers without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchIndex {
    records: Vec<SearchRecord>,
}

impl SearchIndex {
    /// Build an index directly from records. The loader is the usual entry
    /// point; this exists for consumers that assemble records themselves.
    pub fn new(records: Vec<SearchRecord>) -> Self {
        Self { records }
    }

    /// Decode an index from its textual form. See [`loader::parse`].
    pub fn parse(raw: &str) -> Result<Self, IndexError> {
        loader::parse(raw)
    }

    /// Read and decode an index file. See [`loader::load`].
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        loader::load(path)
    }

    /// All records, in document order.
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    /// Number of records in the index.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `position`, in document order.
    pub fn get(&self, position: usize) -> Option<&SearchRecord> {
        self.records.get(position)
    }

    /// Iterate over records in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchRecord> {
        self.records.iter()
    }

    /// Run a query against the index, returning relevance-ordered hits.
    /// A query that matches nothing yields an empty vector, never an error.
    pub fn search(&self, query: &Query) -> Vec<SearchHit<'_>> {
        query::search(&self.records, query)
    }

    /// Summarize the index contents.
    pub fn stats(&self) -> IndexStats {
        let pages: BTreeSet<&str> = self.records.iter().map(|r| r.page.as_str()).collect();

        let mut categories: BTreeMap<String, usize> = BTreeMap::new();
        for record in &self.records {
            *categories
                .entry(record.category.as_str().to_string())
                .or_insert(0) += 1;
        }

        IndexStats {
            records: self.records.len(),
            pages: pages.len(),
            categories,
        }
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = &'a SearchRecord;
    type IntoIter = std::slice::Iter<'a, SearchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Aggregate counts over an index, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Total number of records.
    pub records: usize,
    /// Number of distinct page names.
    pub pages: usize,
    /// Record count per category label, ordered by label.
    pub categories: BTreeMap<String, usize>,
}
