use crate::{AdminConfig, DeletePolicy, Record, StoreError, UnboundPolicy, codec};
use anyhow::Context;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Where the result of a successful mutation ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    /// The full list was rewritten to this file.
    Written(PathBuf),
    /// No file is bound; the change lives only in memory.
    Unbound,
}

/// The authoritative in-memory list for one record kind plus the file it mirrors.
///
/// A store starts unbound and empty. Loading a file replaces the list and binds the
/// path; every successful mutation rewrites the bound file in full.
#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    records: Vec<T>,
    path: Option<PathBuf>,
    unbound: UnboundPolicy,
    delete: DeletePolicy,
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new(&AdminConfig::default())
    }
}

impl<T: Record> RecordStore<T> {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            records: Vec::new(),
            path: None,
            unbound: config.unbound,
            delete: config.delete,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_bound(&self) -> bool {
        self.path.is_some()
    }

    /// Names in list order, for list and picker widgets.
    pub fn display_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.key()).collect()
    }

    pub fn find(&self, key: &str) -> Option<&T> {
        self.records.iter().find(|r| r.key() == key)
    }

    /// Read and decode `path`, then replace the list and bind the path.
    ///
    /// On failure nothing changes: the previous list and bound path stay as they were.
    pub fn load(&mut self, path: &Path) -> Result<usize, StoreError> {
        let records = read_records::<T>(path).map_err(|e| {
            tracing::warn!(kind = T::KIND, path = %path.display(), "load failed: {e:#}");
            StoreError::load(path, &e)
        })?;
        tracing::info!(
            kind = T::KIND,
            path = %path.display(),
            count = records.len(),
            "loaded"
        );
        self.records = records;
        self.path = Some(path.to_path_buf());
        Ok(self.records.len())
    }

    /// Write the list to the bound file. Unbound is a no-op, not an error.
    pub fn save(&self) -> Result<Persistence, StoreError> {
        match self.path.as_deref() {
            Some(path) => {
                save_records(path, &self.records)?;
                Ok(Persistence::Written(path.to_path_buf()))
            }
            None => Ok(Persistence::Unbound),
        }
    }

    /// Write the list to `path` and bind it on success.
    pub fn save_as(&mut self, path: &Path) -> Result<Persistence, StoreError> {
        save_records(path, &self.records)?;
        self.path = Some(path.to_path_buf());
        Ok(Persistence::Written(path.to_path_buf()))
    }

    /// Append at the end of the list. Items receive the next free id.
    pub fn append(&mut self, mut record: T) -> Result<(T, Persistence), StoreError> {
        self.ensure_writable()?;
        record.prepare_append(&self.records)?;
        tracing::debug!(kind = T::KIND, key = record.key(), "append");
        self.records.push(record.clone());
        let persisted = self.save()?;
        Ok((record, persisted))
    }

    /// Overwrite the first record named `key`. A missing key leaves the list untouched.
    pub fn update_by_key(&mut self, key: &str, values: T) -> Result<Persistence, StoreError> {
        self.ensure_writable()?;
        let Some(record) = self.records.iter_mut().find(|r| r.key() == key) else {
            return Err(StoreError::NotFound {
                kind: T::KIND,
                key: key.to_string(),
            });
        };
        tracing::debug!(kind = T::KIND, key, "update");
        record.overwrite_with(values);
        self.save()
    }

    /// Remove records named `key`: every match under `RemoveAll`, the first under
    /// `FirstMatch`. Returns how many were removed.
    pub fn remove_by_key(&mut self, key: &str) -> Result<(usize, Persistence), StoreError> {
        self.ensure_writable()?;
        let before = self.records.len();
        match self.delete {
            DeletePolicy::RemoveAll => self.records.retain(|r| r.key() != key),
            DeletePolicy::FirstMatch => {
                if let Some(idx) = self.records.iter().position(|r| r.key() == key) {
                    self.records.remove(idx);
                }
            }
        }
        let removed = before - self.records.len();
        if removed == 0 {
            return Err(StoreError::NotFound {
                kind: T::KIND,
                key: key.to_string(),
            });
        }
        tracing::debug!(kind = T::KIND, key, removed, "remove");
        let persisted = self.save()?;
        Ok((removed, persisted))
    }

    fn ensure_writable(&self) -> Result<(), StoreError> {
        if self.path.is_none() && self.unbound == UnboundPolicy::Block {
            tracing::warn!(kind = T::KIND, "mutation refused, no file bound");
            return Err(StoreError::NoFileBound { kind: T::KIND });
        }
        Ok(())
    }
}

fn read_records<T: Record>(path: &Path) -> anyhow::Result<Vec<T>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
    codec::decode(&text)
}

/// Encode `records` and write them to `path`. An empty path is a no-op.
pub fn save_records<T: Record>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    let written = codec::encode(records).and_then(|text| {
        fs::write(path, text).with_context(|| format!("writing {path:?}"))
    });
    match written {
        Ok(()) => {
            tracing::info!(
                kind = T::KIND,
                path = %path.display(),
                count = records.len(),
                "saved"
            );
            Ok(())
        }
        Err(e) => {
            tracing::warn!(kind = T::KIND, path = %path.display(), "save failed: {e:#}");
            Err(StoreError::save(path, &e))
        }
    }
}
