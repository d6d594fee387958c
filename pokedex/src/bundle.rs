//! Read-only namespaces of named resources.
use crate::{Error, Result};

use bytes::Bytes;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A flat namespace of resources shipped with the application.
pub trait Bundle: Send + Sync {
    /// Every resource key. An unavailable namespace has no keys.
    fn keys(&self) -> Vec<String>;

    fn get(&self, key: &str) -> Result<Bytes>;

    /// The first key ending with `suffix`, compared case-insensitively.
    fn find(&self, suffix: &str) -> Option<String> {
        let suffix = suffix.to_lowercase();

        let mut keys = self.keys();
        keys.sort();

        keys.into_iter()
            .find(|key| key.to_lowercase().ends_with(&suffix))
    }
}

/// A bundle backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct Directory {
    root: PathBuf,
}

impl Directory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Bundle for Directory {
    fn keys(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(error) => {
                log::warn!("Bundle unavailable at {}: {error}", self.root.display());
                return Vec::new();
            }
        };

        entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_file()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect()
    }

    fn get(&self, key: &str) -> Result<Bytes> {
        let path = self.root.join(key);

        match fs::read(&path) {
            Ok(bytes) => Ok(Bytes::from(bytes)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::NotFound(key.to_owned()))
            }
            Err(error) => Err(error.into()),
        }
    }
}

/// A bundle held in memory.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    resources: BTreeMap<String, Bytes>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, resource: impl Into<Bytes>) {
        let _ = self.resources.insert(key.into(), resource.into());
    }

    pub fn with(mut self, key: impl Into<String>, resource: impl Into<Bytes>) -> Self {
        self.insert(key, resource);
        self
    }
}

impl Bundle for Memory {
    fn keys(&self) -> Vec<String> {
        self.resources.keys().cloned().collect()
    }

    fn get(&self, key: &str) -> Result<Bytes> {
        self.resources
            .get(key)
            .cloned()
            .ok_or_else(|| Error::NotFound(key.to_owned()))
    }
}

impl<K, V> FromIterator<(K, V)> for Memory
where
    K: Into<String>,
    V: Into<Bytes>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut memory = Self::new();

        for (key, resource) in iter {
            memory.insert(key, resource);
        }

        memory
    }
}
