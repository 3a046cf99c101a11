//! Catalog operations
//!
//! The `Catalog` owns a storage backend and exposes the operations the
//! menu offers: add, remove, find, list, toggle status.
//!
//! Every operation loads the document, applies its change and saves the
//! whole document back. The stored file is the only state; nothing is
//! cached between calls, so concurrent runs see each other's writes on
//! their next operation.

use thiserror::Error;
use tracing::info;

use crate::models::{Book, NewBook};
use crate::storage::{Storage, StorageError};

/// Errors from catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The same edition is already in the catalog
    #[error("Book is already in the catalog")]
    Duplicate,

    /// No book has the given id
    #[error("No book with id = {id}")]
    NotFound { id: u64 },

    /// The backing storage failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Which book field a search query is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Title,
    Author,
    Year,
}

impl SearchMode {
    /// Maps a menu choice to a search mode: 1 is title, 2 is author,
    /// 3 is publication year. Anything else is no mode at all.
    pub fn from_choice(choice: i64) -> Option<SearchMode> {
        match choice {
            1 => Some(SearchMode::Title),
            2 => Some(SearchMode::Author),
            3 => Some(SearchMode::Year),
            _ => None,
        }
    }

    /// True when the field selected by this mode equals `query` exactly.
    /// Years match against their decimal form.
    fn matches(self, book: &Book, query: &str) -> bool {
        match self {
            SearchMode::Title => book.title == query,
            SearchMode::Author => book.author == query,
            SearchMode::Year => book.year.to_string() == query,
        }
    }
}

/// The book catalog
///
/// Generic over its storage backend so tests can run entirely in memory.
pub struct Catalog<S: Storage> {
    storage: S,
}

impl<S: Storage> Catalog<S> {
    /// Create a catalog over the given storage backend
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Access the underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Add a new book
    ///
    /// Assigns the next free id and stores the book as available.
    /// An edition already present (same title, author and year) is
    /// rejected as a duplicate.
    pub fn add(&mut self, draft: NewBook) -> CatalogResult<Book> {
        let mut document = self.storage.load()?;

        if document.contains_edition(&draft) {
            return Err(CatalogError::Duplicate);
        }

        let book = Book::new(document.next_id(), draft);
        document.books.push(book.clone());
        self.storage.save(&document)?;

        info!("Added book {} '{}'", book.id, book.title);
        Ok(book)
    }

    /// Remove the book with the given id, returning it
    ///
    /// The remaining books keep their order and their ids.
    pub fn remove(&mut self, id: u64) -> CatalogResult<Book> {
        let mut document = self.storage.load()?;

        let index = document
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or(CatalogError::NotFound { id })?;
        let book = document.books.remove(index);
        self.storage.save(&document)?;

        info!("Removed book {} '{}'", book.id, book.title);
        Ok(book)
    }

    /// Find every book whose field selected by `mode` equals `query`
    pub fn find(&self, mode: SearchMode, query: &str) -> CatalogResult<Vec<Book>> {
        let document = self.storage.load()?;
        let found = document
            .books
            .iter()
            .filter(|b| mode.matches(b, query))
            .cloned()
            .collect();
        Ok(found)
    }

    /// All books, in stored order
    pub fn all(&self) -> CatalogResult<Vec<Book>> {
        Ok(self.storage.load()?.books)
    }

    /// Advance the status of the book with the given id to the next
    /// one in the cycle, returning the updated book
    pub fn toggle_status(&mut self, id: u64) -> CatalogResult<Book> {
        let mut document = self.storage.load()?;

        let book = document.get_mut(id).ok_or(CatalogError::NotFound { id })?;
        book.status = book.status.next();
        let updated = book.clone();
        self.storage.save(&document)?;

        info!("Book {} is now {:?}", updated.id, updated.status);
        Ok(updated)
    }
}
