//! JSON file persistence
//!
//! Handles saving and loading the catalog to/from a single JSON file.
//! Uses atomic writes (write to temp file, then rename) to prevent corruption.
//!
//! The file layout matches what earlier versions of the program wrote:
//! four-space indentation and unescaped non-ASCII text, so existing
//! catalog files keep working as-is.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::models::LibraryDocument;
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::Storage;

/// File-backed catalog storage
///
/// A missing file is not an error: the first load creates it with an
/// empty catalog, so a fresh install works without any setup step.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create storage backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> StorageResult<LibraryDocument> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Catalog file {:?} not found, creating an empty one", self.path);
                let document = LibraryDocument::default();
                write_document(&self.path, &document)?;
                return Ok(document);
            }
            Err(e) => return Err(StorageError::read(e, self.path.clone())),
        };

        let document =
            serde_json::from_str(&contents).map_err(|e| StorageError::InvalidFormat {
                path: self.path.clone(),
                source: e,
            })?;

        Ok(document)
    }

    fn save(&mut self, document: &LibraryDocument) -> StorageResult<()> {
        write_document(&self.path, document)?;
        debug!("Saved {} books to {:?}", document.books.len(), self.path);
        Ok(())
    }
}

/// Serialize `document` and write it to `path` atomically
fn write_document(path: &Path, document: &LibraryDocument) -> StorageResult<()> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;

    atomic_write(path, &buffer)
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    // Create temp file in the same directory (for atomic rename)
    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::write(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::write(e, temp_path.clone()))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| StorageError::write(e, temp_path.clone()))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| StorageError::AtomicWriteFailed {
        from: temp_path,
        to: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
