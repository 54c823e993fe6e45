// src/store.rs
//! Year-partitioned event store.
//!
//! One JSON array per year under `dir`, named `<file_prefix><year>.json`.
//! Appending is read-modify-write of the whole file: load the array, push,
//! rewrite. Nothing is ever streamed or patched in place.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::UNKNOWN_PARTITION;
use crate::config::options::StoreOptions;
use crate::core::sanitize;
use crate::error::StoreError;
use crate::file::{read_json, write_json_pretty};
use crate::model::EventRecord;

#[derive(Clone, Debug)]
pub struct YearStore {
    dir: PathBuf,
    file_prefix: String,
}

/// What `load` found on disk.
#[derive(Debug, PartialEq, Eq)]
pub enum Loaded {
    Missing,
    Records(Vec<EventRecord>),
    /// Present but unreadable; `reason` is the decode or IO error text.
    Corrupt { reason: String },
}

impl Loaded {
    pub fn into_records(self) -> Vec<EventRecord> {
        match self {
            Loaded::Records(r) => r,
            Loaded::Missing | Loaded::Corrupt { .. } => Vec::new(),
        }
    }
}

/// Year of the record's `Date` field, or `"unknown"`.
pub fn partition_key(record: &EventRecord) -> String {
    record
        .date()
        .and_then(sanitize::year_of)
        .map(String::from)
        .unwrap_or_else(|| s!(UNKNOWN_PARTITION))
}

impl YearStore {
    pub fn new(opts: &StoreOptions) -> Self {
        Self { dir: opts.dir.clone(), file_prefix: opts.file_prefix.clone() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}{}.json", self.file_prefix, key))
    }

    pub fn load(&self, key: &str) -> Loaded {
        match read_json::<Vec<EventRecord>>(&self.path_for(key)) {
            Ok(None) => Loaded::Missing,
            Ok(Some(records)) => Loaded::Records(records),
            Err(e) => Loaded::Corrupt { reason: e.to_string() },
        }
    }

    /// Current contents of a partition; unreadable content counts as empty.
    pub fn records(&self, key: &str) -> Vec<EventRecord> {
        self.load(key).into_records()
    }

    /// File `record` under its year and return the partition key.
    pub fn append(&self, record: EventRecord) -> Result<String, StoreError> {
        let key = partition_key(&record);
        let path = self.path_for(&key);

        let mut records = match self.load(&key) {
            Loaded::Records(r) => r,
            Loaded::Missing => Vec::new(),
            Loaded::Corrupt { reason } => {
                logw!("Partition {key}: existing content unreadable, starting empty ({reason})");
                self.backup_corrupt(&path);
                Vec::new()
            }
        };

        records.push(record);
        write_json_pretty(&path, &records)?;
        Ok(key)
    }

    /// Load and write back unchanged. Returns the record count.
    /// A missing partition is left missing; unreadable content is backed up
    /// before the partition is reset to an empty array.
    pub fn rewrite(&self, key: &str) -> Result<usize, StoreError> {
        let path = self.path_for(key);
        let records = match self.load(key) {
            Loaded::Missing => return Ok(0),
            Loaded::Records(r) => r,
            Loaded::Corrupt { reason } => {
                logw!("Partition {key}: existing content unreadable, rewriting empty ({reason})");
                self.backup_corrupt(&path);
                Vec::new()
            }
        };
        write_json_pretty(&path, &records)?;
        Ok(records.len())
    }

    /// Partition keys that currently have a file, sorted.
    pub fn partitions(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(e) => e,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.dir, e)),
        };
        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(&self.dir, e))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(key) = name
                .strip_prefix(self.file_prefix.as_str())
                .and_then(|rest| rest.strip_suffix(".json"))
            {
                if !key.is_empty() && !key.starts_with('.') {
                    keys.push(s!(key));
                }
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn backup_corrupt(&self, path: &Path) {
        let mut bak = path.as_os_str().to_owned();
        bak.push(".bak");
        match fs::copy(path, &bak) {
            Ok(_) => logw!("Kept unreadable copy at {}", PathBuf::from(bak).display()),
            Err(e) => logw!("Could not back up {}: {e}", path.display()),
        }
    }
}
