//! Whole-collection load and save, shared by every command module.

use super::backend::StorageBackend;
use super::Collection;
use crate::error::{HotelError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Parse a collection into records. `Ok(None)` if the file is absent.
///
/// Malformed JSON is returned as [`HotelError::Serialization`] and is not
/// recovered from.
pub fn load_records<T, B>(backend: &B, collection: Collection) -> Result<Option<Vec<T>>>
where
    T: DeserializeOwned,
    B: StorageBackend,
{
    match backend.read(collection)? {
        Some(content) => {
            let records = serde_json::from_str(&content).map_err(HotelError::Serialization)?;
            Ok(Some(records))
        }
        None => Ok(None),
    }
}

/// Overwrite a collection with `records` as compact JSON.
pub fn save_records<T, B>(backend: &B, collection: Collection, records: &[T]) -> Result<()>
where
    T: Serialize,
    B: StorageBackend,
{
    let content = serde_json::to_string(records).map_err(HotelError::Serialization)?;
    backend.write(collection, &content)
}
