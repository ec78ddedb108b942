use super::backend::StorageBackend;
use super::Collection;
use crate::error::{HotelError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the stores are
/// single-threaded, so the trait can keep `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    files: RefCell<HashMap<Collection, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to seed a collection with raw (possibly malformed) text.
    pub fn put_raw(&self, collection: Collection, content: &str) {
        self.files
            .borrow_mut()
            .insert(collection, content.to_string());
    }

    /// Test helper returning the raw stored text, if any.
    pub fn raw(&self, collection: Collection) -> Option<String> {
        self.files.borrow().get(&collection).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn exists(&self, collection: Collection) -> bool {
        self.files.borrow().contains_key(&collection)
    }

    fn read(&self, collection: Collection) -> Result<Option<String>> {
        Ok(self.raw(collection))
    }

    fn write(&self, collection: Collection, content: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(HotelError::Store("Simulated write error".to_string()));
        }
        self.put_raw(collection, content);
        Ok(())
    }

    fn path(&self, collection: Collection) -> PathBuf {
        PathBuf::from(format!("memory://{}", collection.default_file_name()))
    }
}
