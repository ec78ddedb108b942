use super::Collection;
use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw collection I/O.
///
/// Backends move whole files as strings. Parsing, filtering and the absent
/// file policy live above this trait.
pub trait StorageBackend {
    /// Whether the backing file for `collection` exists.
    fn exists(&self, collection: Collection) -> bool;

    /// Read the full contents of a collection.
    /// Returns Ok(None) if the file does not exist.
    fn read(&self, collection: Collection) -> Result<Option<String>>;

    /// Overwrite the full contents of a collection. Not atomic.
    fn write(&self, collection: Collection, content: &str) -> Result<()>;

    /// Where the collection lives. Virtual for non-filesystem backends.
    fn path(&self, collection: Collection) -> PathBuf;
}
