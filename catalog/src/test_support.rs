//! Test-only helpers for constructing records and throwaway stores.

use tempfile::TempDir;

use crate::book::{Book, BookStatus};
use crate::store::BookStore;

/// Year cutoff used by test stores.
pub const TEST_MAX_YEAR: i32 = 2024;

/// Create an `available` record with explicit id.
pub fn book(id: u32, title: &str, author: &str, year: i32) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        year,
        status: BookStatus::Available,
    }
}

/// Create an empty store backed by `library.json` in a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the store is used.
pub fn temp_store() -> (TempDir, BookStore) {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = BookStore::at(&temp.path().join("library.json"), TEST_MAX_YEAR);
    (temp, store)
}
