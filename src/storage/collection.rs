use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use super::Storage;
use crate::error::StoreError;

/// A JSON array stored under one key, seeded on first access.
pub struct Collection<T> {
    key: &'static str,
    seed: fn(DateTime<Utc>) -> Vec<T>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub const fn new(key: &'static str, seed: fn(DateTime<Utc>) -> Vec<T>) -> Self {
        Collection { key, seed }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Reads the collection, writing the seed first if the key is absent.
    /// A present but malformed document is an error, never an empty list,
    /// and so is one that `save` would not write back byte for byte (unknown
    /// fields, `null` for an absent optional field, other timestamp shapes).
    pub fn load(&self, storage: &dyn Storage, now: DateTime<Utc>) -> Result<Vec<T>, StoreError> {
        if let Some(records) = read_records(storage, self.key)? {
            return Ok(records);
        }
        let seeded = (self.seed)(now);
        debug!(key = self.key, count = seeded.len(), "seeding collection");
        write(storage, self.key, &seeded)?;
        Ok(seeded)
    }

    pub fn save(&self, storage: &dyn Storage, records: &[T]) -> Result<(), StoreError> {
        write(storage, self.key, records)
    }

    /// Returns true when the seed had to be written.
    pub fn ensure_seeded(&self, storage: &dyn Storage, now: DateTime<Utc>) -> Result<bool, StoreError> {
        let present = storage
            .get(self.key)
            .map_err(|source| backend(self.key, source))?
            .is_some();
        if present {
            return Ok(false);
        }
        self.load(storage, now)?;
        Ok(true)
    }
}

/// A single JSON value stored under one key; absent reads as `T::default()`
/// and is not written back.
pub struct Document<T> {
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Document<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub const fn new(key: &'static str) -> Self {
        Document {
            key,
            _marker: PhantomData,
        }
    }

    pub fn load(&self, storage: &dyn Storage) -> Result<T, StoreError> {
        Ok(read(storage, self.key)?.unwrap_or_default())
    }

    pub fn save(&self, storage: &dyn Storage, value: &T) -> Result<(), StoreError> {
        write(storage, self.key, value)
    }
}

fn backend(key: &str, source: std::io::Error) -> StoreError {
    StoreError::Backend {
        key: key.to_owned(),
        source,
    }
}

fn read<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Result<Option<T>, StoreError> {
    let Some(raw) = storage.get(key).map_err(|source| backend(key, source))? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| malformed(key, source))
}

fn read_records<T>(storage: &dyn Storage, key: &str) -> Result<Option<Vec<T>>, StoreError>
where
    T: Serialize + DeserializeOwned,
{
    let Some(stored) = read::<Value>(storage, key)? else {
        return Ok(None);
    };
    let records = Vec::<T>::deserialize(&stored).map_err(|source| malformed(key, source))?;

    let written = serde_json::to_value(&records).map_err(|source| encode(key, source))?;
    if written != stored {
        let index = match (&stored, &written) {
            (Value::Array(stored), Value::Array(written)) => stored
                .iter()
                .zip(written)
                .position(|(s, w)| s != w)
                .unwrap_or(0),
            _ => 0,
        };
        return Err(StoreError::NonCanonical {
            key: key.to_owned(),
            index,
        });
    }
    Ok(Some(records))
}

fn malformed(key: &str, source: serde_json::Error) -> StoreError {
    StoreError::Malformed {
        key: key.to_owned(),
        source,
    }
}

fn encode(key: &str, source: serde_json::Error) -> StoreError {
    StoreError::Encode {
        key: key.to_owned(),
        source,
    }
}

fn write<T: Serialize + ?Sized>(storage: &dyn Storage, key: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|source| encode(key, source))?;
    storage.set(key, &raw).map_err(|source| backend(key, source))
}
