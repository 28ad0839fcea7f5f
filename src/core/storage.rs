//! Key-value storage for client-side state.
//!
//! A store is one storage scope: two runs that open the same store see the
//! same entries. The only entry the client writes today is the session
//! identifier.

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use toml::{Table, Value};

use crate::core::config::data::path_display;

#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The backing file exists but is not a TOML document.
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The entries could not be encoded as TOML.
    Serialize(toml::ser::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, source } => {
                write!(f, "Failed to access {}: {}", path_display(path), source)
            }
            StoreError::Parse { path, source } => {
                write!(f, "Failed to parse {}: {}", path_display(path), source)
            }
            StoreError::Serialize(source) => write!(f, "Failed to encode entries: {source}"),
        }
    }
}

impl StdError for StoreError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            StoreError::Parse { source, .. } => Some(source),
            StoreError::Serialize(source) => Some(source),
        }
    }
}

pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Human-readable location, for status output.
    fn describe(&self) -> String;
}

/// In-process store. Entries vanish with the process.
#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory (not persisted)".to_string()
    }
}

/// Store backed by a TOML file.
///
/// Only string entries are read back. Other keys in the file are left
/// untouched on write and never affect the session entry.
///
/// The file is re-read on every access and replaced atomically on write, so
/// entries written by another process are not clobbered by a stale copy.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> Result<Table, StoreError> {
        if !self.path.exists() {
            return Ok(Table::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        toml::from_str::<Table>(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn write_entries(&self, entries: &Table) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let parent = self
            .path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty());

        if let Some(dir) = parent {
            fs::create_dir_all(dir).map_err(io_err)?;
        }

        let contents = toml::to_string_pretty(entries).map_err(StoreError::Serialize)?;
        let mut temp_file = match parent {
            Some(dir) => NamedTempFile::new_in(dir),
            None => NamedTempFile::new(),
        }
        .map_err(io_err)?;

        temp_file.write_all(contents.as_bytes()).map_err(io_err)?;
        temp_file.as_file_mut().sync_all().map_err(io_err)?;
        temp_file
            .persist(&self.path)
            .map_err(|err| io_err(err.error))?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .read_entries()?
            .remove(key)
            .and_then(|value| value.as_str().map(str::to_string)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.write_entries(&entries)
    }

    fn describe(&self) -> String {
        path_display(&self.path)
    }
}
