use super::backend::StorageBackend;
use super::Collection;
use crate::config::HotelConfig;
use crate::error::{HotelError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct FsBackend {
    root: PathBuf,
    file_names: HashMap<Collection, String>,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let file_names = Collection::ALL
            .into_iter()
            .map(|c| (c, c.default_file_name().to_string()))
            .collect();
        Self {
            root: root.into(),
            file_names,
        }
    }

    pub fn from_config(config: &HotelConfig) -> Self {
        Self::new(config.data_dir.clone())
            .with_file_name(Collection::Customers, &config.customers_file)
            .with_file_name(Collection::Hotels, &config.hotels_file)
            .with_file_name(Collection::Reservations, &config.reservations_file)
    }

    pub fn with_file_name(mut self, collection: Collection, name: &str) -> Self {
        self.file_names.insert(collection, name.to_string());
        self
    }

    fn file_name(&self, collection: Collection) -> &str {
        self.file_names
            .get(&collection)
            .map(String::as_str)
            .unwrap_or_else(|| collection.default_file_name())
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(HotelError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn exists(&self, collection: Collection) -> bool {
        self.path(collection).is_file()
    }

    fn read(&self, collection: Collection) -> Result<Option<String>> {
        match fs::read_to_string(self.path(collection)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HotelError::Io(e)),
        }
    }

    fn write(&self, collection: Collection, content: &str) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.path(collection), content).map_err(HotelError::Io)?;
        Ok(())
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.root.join(self.file_name(collection))
    }
}
