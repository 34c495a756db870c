//! Reference data for the book library under test
//!
//! An explicit, injected data provider: expected search-result counts and a
//! known-good search term per book, keyed by book slug. The bundled table
//! ships with the crate; a deployment-specific table can be loaded from a
//! path instead.

use crate::error::{HarnessError, Result};
use indexmap::IndexMap;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Length of the random term used to force an empty search result
pub const UNMATCHED_TERM_LEN: usize = 25;

/// Expected search behavior for one book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// A term known to produce results in this book
    pub search_term: String,

    /// Expected chapter-body match count (compared with ±3 tolerance;
    /// the backend count varies slightly between environments)
    pub chapter_results: usize,

    /// Expected interactive-exercise match count (compared exactly)
    pub rkt_results: usize,
}

/// The reference table, ordered as the source table lists its books
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    books: IndexMap<String, BookRecord>,
}

impl Library {
    /// The table bundled with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(include_str!("../data/books.json"))
    }

    /// Parse a table from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| HarnessError::DataLoadFailed(e.to_string()))
    }

    /// Load a table from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())
            .map_err(|e| HarnessError::DataLoadFailed(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_json(&json)
    }

    /// Book slugs in table order
    pub fn book_slugs(&self) -> impl Iterator<Item = &str> {
        self.books.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The record for a book, or `UnknownBook`
    pub fn record(&self, book_slug: &str) -> Result<&BookRecord> {
        self.books
            .get(book_slug)
            .ok_or_else(|| HarnessError::UnknownBook(book_slug.to_string()))
    }

    /// A term known to produce results in the given book
    pub fn search_term(&self, book_slug: &str) -> Result<&str> {
        Ok(self.record(book_slug)?.search_term.as_str())
    }

    /// Expected chapter-body match count for the given book
    pub fn expected_chapter_results(&self, book_slug: &str) -> Result<usize> {
        Ok(self.record(book_slug)?.chapter_results)
    }

    /// Expected interactive-exercise match count for the given book
    pub fn expected_rkt_results(&self, book_slug: &str) -> Result<usize> {
        Ok(self.record(book_slug)?.rkt_results)
    }
}

/// A random alphanumeric term long enough that no book content matches it
pub fn random_unmatched_term() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(UNMATCHED_TERM_LEN)
        .map(char::from)
        .collect()
}
