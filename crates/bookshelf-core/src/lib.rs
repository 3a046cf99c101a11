//! Bookshelf Core Library
//!
//! This crate provides the core functionality for Bookshelf, a personal
//! book catalog kept in a single JSON file.
//!
//! # Architecture
//!
//! - **JSON file**: Source of truth for data, human-readable and editable
//!
//! Every operation reads the whole file and every mutation writes it
//! back atomically. There is no in-memory cache to go stale.
//!
//! # Quick Start
//!
//! ```text
//! let mut catalog = Catalog::new(JsonFileStorage::new("library.json"));
//!
//! // Add a book
//! let book = catalog.add(NewBook::new("Dune", "Frank Herbert", 1965))?;
//!
//! // Query books
//! let books = catalog.find(SearchMode::Author, "Frank Herbert")?;
//! ```
//!
//! # Modules
//!
//! - `catalog`: Catalog operations (main entry point)
//! - `models`: Data structures for books and the catalog document
//! - `storage`: JSON file persistence
//! - `config`: Application configuration

pub mod catalog;
pub mod config;
pub mod models;
pub mod storage;

pub use catalog::{Catalog, CatalogError, CatalogResult, SearchMode};
pub use config::Config;
pub use models::{Book, LibraryDocument, NewBook, Status};
pub use storage::{JsonFileStorage, MemoryStorage, Storage, StorageError, StorageResult};
