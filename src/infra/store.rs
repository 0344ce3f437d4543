//! JSON document store.
//!
//! A [`JsonStore`] keeps every record of one kind in memory behind a single
//! mutex and mirrors the full mapping to one pretty-printed JSON file after
//! each mutation. The file is replaced atomically (temp file + rename in the
//! same directory), so the file at rest is always a complete snapshot.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

/// A value that can live in a [`JsonStore`].
///
/// The key must never change for the lifetime of a record;
/// [`JsonStore::update`] rejects a change that moves it.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    fn key(&self) -> &str;
}

/// Failure to persist the in-memory mapping.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("record key changed from {from:?} to {to:?}")]
    KeyChanged { from: String, to: String },
}

/// Mutex-guarded key → record mapping backed by one JSON file.
pub struct JsonStore<R: Record> {
    path: PathBuf,
    records: Mutex<BTreeMap<String, R>>,
}

impl<R: Record> JsonStore<R> {
    /// Open the store at `path`, loading the file if it exists.
    ///
    /// A missing file yields an empty store. A file that cannot be read or
    /// parsed also yields an empty store; the problem is logged, not returned.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = load(&path);
        tracing::debug!(path = %path.display(), records = records.len(), "Store loaded");

        Self {
            path,
            records: Mutex::new(records),
        }
    }

    pub fn get(&self, key: &str) -> Option<R> {
        self.lock().get(key).cloned()
    }

    /// Insert or overwrite `record`, then rewrite the file.
    ///
    /// If the write fails the mutation is still visible in memory.
    pub fn put(&self, record: R) -> Result<(), StoreError> {
        {
            let mut records = self.lock();
            records.insert(record.key().to_owned(), record);
        }
        self.save()
    }

    /// Insert `record` only if its key is absent. Returns `false` (and writes
    /// nothing) when the key is already taken.
    pub fn insert_new(&self, record: R) -> Result<bool, StoreError> {
        {
            let mut records = self.lock();
            match records.entry(record.key().to_owned()) {
                Entry::Occupied(_) => return Ok(false),
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
            }
        }
        self.save()?;
        Ok(true)
    }

    /// Apply `change` to a copy of the record under `key` and store the copy.
    ///
    /// The check-and-modify runs under the store lock. When `change` fails the
    /// stored record is left untouched and nothing is written, as it is when
    /// `change` alters the key. Returns `Ok(None)` if the key is absent.
    pub fn update<E, F>(&self, key: &str, change: F) -> Result<Option<R>, E>
    where
        F: FnOnce(&mut R) -> Result<(), E>,
        E: From<StoreError>,
    {
        let updated = {
            let mut records = self.lock();
            let Some(current) = records.get(key) else {
                return Ok(None);
            };
            let mut next = current.clone();
            change(&mut next)?;
            if next.key() != key {
                return Err(StoreError::KeyChanged {
                    from: key.to_owned(),
                    to: next.key().to_owned(),
                }
                .into());
            }
            records.insert(key.to_owned(), next.clone());
            next
        };
        self.save()?;
        Ok(Some(updated))
    }

    /// Remove the record under `key` and rewrite the file.
    pub fn delete(&self, key: &str) -> Result<Option<R>, StoreError> {
        self.delete_if(key, |_| Ok::<(), StoreError>(()))
    }

    /// Remove the record under `key` if `check` accepts it.
    ///
    /// Returns `Ok(None)` if the key is absent.
    pub fn delete_if<E, F>(&self, key: &str, check: F) -> Result<Option<R>, E>
    where
        F: FnOnce(&R) -> Result<(), E>,
        E: From<StoreError>,
    {
        let removed = {
            let mut records = self.lock();
            let Some(current) = records.get(key) else {
                return Ok(None);
            };
            check(current)?;
            records.remove(key)
        };
        self.save()?;
        Ok(removed)
    }

    /// Every record. Order is not meaningful.
    pub fn list_all(&self) -> Vec<R> {
        self.lock().values().cloned().collect()
    }

    pub fn list_filtered<F>(&self, predicate: F) -> Vec<R>
    where
        F: Fn(&R) -> bool,
    {
        self.lock()
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Serialize the whole mapping and atomically replace the file.
    fn save(&self) -> Result<(), StoreError> {
        let records = self.lock();
        let data = serde_json::to_vec_pretty(&*records)?;
        write_atomic(&self.path, &data)
    }

    // Every mutation completes before the guard drops, so a poisoned map is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, R>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn load<R: Record>(path: &Path) -> BTreeMap<String, R> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Store file unreadable, starting empty");
            return BTreeMap::new();
        }
    };

    match serde_json::from_slice(&data) {
        Ok(records) => records,
        Err(e) => {
            // Existing contents are discarded on the next write.
            tracing::warn!(path = %path.display(), error = %e, "Store file corrupt, starting empty");
            BTreeMap::new()
        }
    }
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    let io_err = |source: io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(io_err)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(data).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    Ok(())
}
