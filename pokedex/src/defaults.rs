//! The key-value store that held captures before they moved to their own file.
use crate::Result;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait Defaults: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: String) -> Result<()>;
}

/// Defaults persisted as a RON map next to the rest of the user data.
#[derive(Debug)]
pub struct File {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl File {
    /// Opens the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let values = match read(&path) {
            Ok(values) => values,
            Err(error) => {
                log::warn!("Ignoring defaults at {}: {error}", path.display());
                BTreeMap::new()
            }
        };

        Self {
            path,
            values: Mutex::new(values),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read(path: &Path) -> Result<BTreeMap<String, String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(ron::from_str(&contents)?),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
        Err(error) => Err(error.into()),
    }
}

impl Defaults for File {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|error| crate::Error::Defaults(error.to_string()))?;

        let _ = values.insert(key.to_owned(), value);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(
            &self.path,
            ron::ser::to_string_pretty(&*values, ron::ser::PrettyConfig::default())?,
        )?;

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Memory {
    values: Mutex<BTreeMap<String, String>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Defaults for Memory {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        let _ = self
            .values
            .lock()
            .map_err(|error| crate::Error::Defaults(error.to_string()))?
            .insert(key.to_owned(), value);

        Ok(())
    }
}

impl FromIterator<(String, String)> for Memory {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: Mutex::new(BTreeMap::from_iter(iter)),
        }
    }
}
