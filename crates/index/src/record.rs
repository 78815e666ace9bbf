//! Record types decoded from a search index document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of one indexed documentation fragment.
///
/// Generators grow this set over time, so unrecognized values decode to
/// [`Category::Other`] and are carried through verbatim instead of failing
/// the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Page,
    Section,
    Type,
    Method,
    Function,
    Constant,
    Module,
    /// A category this crate does not recognize, preserved as an opaque label.
    Other(String),
}

impl Category {
    /// The string form used in the persisted format.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Page => "page",
            Self::Section => "section",
            Self::Type => "type",
            Self::Method => "method",
            Self::Function => "function",
            Self::Constant => "constant",
            Self::Module => "module",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "page" => Self::Page,
            "section" => Self::Section,
            "type" => Self::Type,
            "method" => Self::Method,
            "function" => Self::Function,
            "constant" => Self::Constant,
            "module" => Self::Module,
            _ => Self::Other(value),
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One indexable fragment of a documentation site.
///
/// Records are independent of each other; the only structure is the shared
/// page prefix in `location`. The collection is produced atomically by the
/// documentation build and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Page path plus optional in-page anchor, e.g. `functions/#Data-types`.
    /// Empty for records on the site root page.
    pub location: String,
    /// Human-readable name of the page the fragment belongs to.
    pub page: String,
    /// Section or symbol title. Empty for bare page records.
    #[serde(default)]
    pub title: String,
    /// Body snippet; may contain embedded markup.
    #[serde(default)]
    pub text: String,
    /// Kind of documentation element this fragment represents.
    pub category: Category,
}

impl SearchRecord {
    /// Page path portion of `location`, without the anchor.
    pub fn page_path(&self) -> &str {
        match self.location.split_once('#') {
            Some((path, _)) => path,
            None => &self.location,
        }
    }

    /// In-page anchor, if the location carries one.
    pub fn anchor(&self) -> Option<&str> {
        self.location.split_once('#').map(|(_, anchor)| anchor)
    }

    /// Navigation target for this record under a site base URL.
    pub fn href(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.location)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record(location: &str) -> SearchRecord {
        SearchRecord {
            location: location.to_string(),
            page: "Reference".to_string(),
            title: "Data types".to_string(),
            text: String::new(),
            category: Category::Section,
        }
    }

    #[test]
    fn category_round_trips_known_values() {
        for label in [
            "page", "section", "type", "method", "function", "constant", "module",
        ] {
            let category = Category::from(label.to_string());
            assert!(!matches!(category, Category::Other(_)), "{label}");
            assert_eq!(category.as_str(), label);
        }
    }

    #[test]
    fn category_preserves_unknown_values() {
        let category = Category::from("widget".to_string());
        assert_eq!(category, Category::Other("widget".to_string()));
        assert_eq!(String::from(category), "widget");
    }

    #[test]
    fn category_serde_uses_string_form() {
        let json = serde_json::to_string(&Category::Method).unwrap();
        assert_eq!(json, "\"method\"");
        let back: Category = serde_json::from_str("\"widget\"").unwrap();
        assert_eq!(back, Category::Other("widget".to_string()));
    }

    #[test]
    fn location_splits_into_path_and_anchor() {
        let with_anchor = record("functions/#Data-types");
        assert_eq!(with_anchor.page_path(), "functions/");
        assert_eq!(with_anchor.anchor(), Some("Data-types"));

        let bare = record("functions/");
        assert_eq!(bare.page_path(), "functions/");
        assert_eq!(bare.anchor(), None);
    }

    #[test]
    fn href_joins_base_url_without_doubling_slashes() {
        let rec = record("functions/#Data-types");
        assert_eq!(
            rec.href("https://docs.example.com/stable/"),
            "https://docs.example.com/stable/functions/#Data-types"
        );
        assert_eq!(
            rec.href("https://docs.example.com/stable"),
            "https://docs.example.com/stable/functions/#Data-types"
        );
    }
}
