//! In-memory catalog storage
//!
//! Keeps the document in process memory. Used by tests and anywhere a
//! catalog is needed without touching the filesystem.

use crate::models::LibraryDocument;
use crate::storage::error::StorageResult;
use crate::storage::Storage;

/// Storage backend that never touches disk
#[derive(Debug, Default)]
pub struct MemoryStorage {
    document: LibraryDocument,
}

impl MemoryStorage {
    /// Create empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create in-memory storage preloaded with `document`
    pub fn with_document(document: LibraryDocument) -> Self {
        Self { document }
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> StorageResult<LibraryDocument> {
        Ok(self.document.clone())
    }

    fn save(&mut self, document: &LibraryDocument) -> StorageResult<()> {
        self.document = document.clone();
        Ok(())
    }
}
