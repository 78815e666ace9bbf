//! Wholesale decoding of search index documents.
//!
//! The persisted artifact comes in two spellings: bare JSON, or the
//! generator's JavaScript wrapper `var documenterSearchIndex = { ... };`.
//! Both decode to the same [`SearchIndex`]; the assignment wrapper is
//! stripped before the JSON parse. Decoding either succeeds for the whole
//! document or fails with [`IndexError::MalformedIndex`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::IndexError;
use crate::index::SearchIndex;
use crate::record::SearchRecord;

/// Top-level shape of the persisted format. Unknown additive fields are
/// tolerated, both here and on individual records.
#[derive(Deserialize)]
struct Document {
    docs: Vec<SearchRecord>,
}

/// Decode a search index from its textual form.
pub fn parse(raw: &str) -> Result<SearchIndex, IndexError> {
    let json = strip_assignment(raw);
    let document: Document =
        serde_json::from_str(json).map_err(|err| IndexError::malformed(err.to_string()))?;
    validate(&document.docs)?;
    tracing::debug!("Decoded search index with {} records", document.docs.len());
    Ok(SearchIndex::new(document.docs))
}

/// Read and decode a search index file.
pub fn load(path: &Path) -> Result<SearchIndex, IndexError> {
    tracing::debug!("Loading search index from {}", path.display());
    let raw = fs::read_to_string(path).map_err(|source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&raw)
}

/// Strip the `var <name> =` assignment wrapper emitted by documentation
/// generators, leaving the JSON payload. Bare JSON passes through untouched.
fn strip_assignment(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed).trim_end();

    for keyword in ["var ", "let ", "const "] {
        let Some(rest) = trimmed.strip_prefix(keyword) else {
            continue;
        };
        let Some((name, value)) = rest.split_once('=') else {
            continue;
        };
        let name = name.trim();
        if !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            return value.trim();
        }
    }

    trimmed
}

/// Enforce the record invariants the format documents: `page` must be
/// non-empty. An empty `location` is allowed — generators emit it for
/// records on the site root page. `title` and `text` may also be empty.
fn validate(records: &[SearchRecord]) -> Result<(), IndexError> {
    for (position, record) in records.iter().enumerate() {
        if record.page.is_empty() {
            return Err(IndexError::malformed(format!(
                "record {position} has an empty page"
            )));
        }
    }
    Ok(())
}
