//! The book store: an in-memory collection backed by one catalog file.
//!
//! Every mutation is written through to disk before it returns. Matching and
//! disambiguation come from [`crate::core`]; file handling from [`crate::io`].

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::{debug, info};

use crate::book::{Book, BookStatus};
use crate::core::field::Field;
use crate::core::invariants::{next_id, year_allowed};
use crate::core::matcher::find_matches;
use crate::core::resolve::{Resolution, resolve};
use crate::io::catalog_file::{load_books, write_books};
use crate::io::config::CatalogConfig;

/// Result of [`BookStore::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(Book),
    /// The year is after the cutoff; nothing was stored.
    FutureYear { year: i32, max_year: i32 },
}

/// Result of an edit that targets one record by field match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// No record matched; nothing changed.
    NotFound,
    /// Several records matched; the caller must retry with a pick.
    Ambiguous(Vec<Book>),
    /// The pick does not address one of the matches; nothing changed.
    InvalidChoice { pick: usize, candidates: usize },
    /// The edit was applied and persisted. Holds the record after the edit
    /// (or the removed record, for deletes).
    Done(Book),
}

#[derive(Debug)]
pub struct BookStore {
    path: PathBuf,
    max_year: i32,
    books: Vec<Book>,
}

impl BookStore {
    /// Open the store described by `config`, loading whatever the file holds.
    pub fn open(config: &CatalogConfig) -> Self {
        Self::at(&config.data_file, config.max_year)
    }

    /// Open a store backed by `path` with an explicit year cutoff.
    pub fn at(path: &Path, max_year: i32) -> Self {
        let mut store = Self {
            path: path.to_path_buf(),
            max_year,
            books: Vec::new(),
        };
        store.load();
        store
    }

    /// Replace the in-memory collection with the file contents.
    ///
    /// A missing or malformed file yields an empty collection.
    pub fn load(&mut self) {
        self.books = load_books(&self.path);
    }

    /// Overwrite the backing file with the whole collection.
    pub fn save(&self) -> Result<()> {
        write_books(&self.path, &self.books)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Append a new `available` record unless `year` is after the cutoff.
    pub fn add(&mut self, title: &str, author: &str, year: i32) -> Result<AddOutcome> {
        if !year_allowed(year, self.max_year) {
            debug!(year, max_year = self.max_year, "rejecting future year");
            return Ok(AddOutcome::FutureYear {
                year,
                max_year: self.max_year,
            });
        }
        let book = Book {
            id: next_id(&self.books),
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            year,
            status: BookStatus::Available,
        };
        let mut next = self.books.clone();
        next.push(book.clone());
        self.commit(next)?;
        info!(id = book.id, title = %book.title, "book added");
        Ok(AddOutcome::Added(book))
    }

    /// Remove the record whose `field` (title or author) equals `value`.
    ///
    /// `pick` is the 1-based position among the matches and is only
    /// consulted when more than one record matches.
    pub fn delete(
        &mut self,
        field: Field,
        value: &str,
        pick: Option<usize>,
    ) -> Result<EditOutcome> {
        let idx = match self.target(field, value, pick)? {
            Ok(idx) => idx,
            Err(outcome) => return Ok(outcome),
        };
        let mut next = self.books.clone();
        let removed = next.remove(idx);
        self.commit(next)?;
        info!(id = removed.id, title = %removed.title, "book deleted");
        Ok(EditOutcome::Done(removed))
    }

    /// Every record whose `field` equals `value`, ignoring case.
    pub fn search(&self, field: Field, value: &str) -> Vec<&Book> {
        find_matches(&self.books, field, value)
            .into_iter()
            .filter_map(|idx| self.books.get(idx))
            .collect()
    }

    /// Set the status of the record whose `field` (title or author) equals `value`.
    ///
    /// `new_status` must name one of the two statuses. Uses the same
    /// disambiguation rules as [`BookStore::delete`].
    pub fn update_status(
        &mut self,
        field: Field,
        value: &str,
        new_status: &str,
        pick: Option<usize>,
    ) -> Result<EditOutcome> {
        let status: BookStatus = new_status.parse()?;
        let idx = match self.target(field, value, pick)? {
            Ok(idx) => idx,
            Err(outcome) => return Ok(outcome),
        };
        let mut next = self.books.clone();
        let Some(book) = next.get_mut(idx) else {
            bail!("matched record {} vanished", idx);
        };
        book.status = status;
        let updated = book.clone();
        self.commit(next)?;
        info!(id = updated.id, status = %updated.status, "status updated");
        Ok(EditOutcome::Done(updated))
    }

    /// Persist `next` and only then adopt it as the in-memory collection.
    ///
    /// On a failed write the collection keeps matching what is on disk.
    fn commit(&mut self, next: Vec<Book>) -> Result<()> {
        write_books(&self.path, &next)?;
        self.books = next;
        Ok(())
    }

    /// Resolve a selector match to one collection index, or the outcome to
    /// report instead.
    fn target(
        &self,
        field: Field,
        value: &str,
        pick: Option<usize>,
    ) -> Result<std::result::Result<usize, EditOutcome>> {
        if !field.is_selector() {
            bail!("cannot select by '{}': use title or author", field);
        }
        let matches = find_matches(&self.books, field, value);
        let resolved = match resolve(&matches, pick) {
            Resolution::Unique(idx) => Ok(idx),
            Resolution::NotFound => Err(EditOutcome::NotFound),
            Resolution::Ambiguous(indices) => Err(EditOutcome::Ambiguous(
                indices
                    .into_iter()
                    .filter_map(|idx| self.books.get(idx).cloned())
                    .collect(),
            )),
            Resolution::InvalidChoice { pick, candidates } => {
                Err(EditOutcome::InvalidChoice { pick, candidates })
            }
        };
        Ok(resolved)
    }
}
