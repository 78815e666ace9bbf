//! Loading and querying of static documentation search indexes.
//!
//! Documentation site generators emit a `search_index.js` artifact: a single
//! JavaScript variable assignment holding `{ "docs": [...] }`, where each
//! array element describes one indexable fragment of the rendered site (a
//! page, a section, or a documented symbol). This crate decodes that
//! artifact wholesale into an immutable [`SearchIndex`] and answers
//! relevance-ordered queries against it, standing in for the browser-side
//! search widget that normally consumes the file.

pub mod error;
pub mod index;
pub mod loader;
pub mod query;
pub mod record;

pub use error::IndexError;
pub use index::{IndexStats, SearchIndex};
pub use query::{Query, SearchHit};
pub use record::{Category, SearchRecord};
