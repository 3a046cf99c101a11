//! Storage layer
//!
//! Handles loading and saving the catalog document.
//!
//! ## Architecture
//!
//! - **JSON file**: Source of truth, a single pretty-printed file on disk
//! - **Memory**: In-process backend used by tests
//!
//! Every mutation saves the whole document. Catalogs are small enough
//! that rewriting the file beats tracking deltas.

pub mod error;
pub mod json_file;
pub mod memory;

pub use error::{StorageError, StorageResult};
pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::models::LibraryDocument;

/// A backend the catalog document is loaded from and saved to.
pub trait Storage {
    /// Loads the current document.
    fn load(&self) -> StorageResult<LibraryDocument>;

    /// Persists `document`, replacing whatever was stored before.
    fn save(&mut self, document: &LibraryDocument) -> StorageResult<()>;
}
