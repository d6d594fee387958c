use crate::core::entry;
use crate::core::locale::{self, Locale};
use crate::core::{Detail, Entry, Generation, Stats, Type};
use crate::{Bundle, Catalog, Result};

use bytes::Bytes;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::{Arc, RwLock};
use tokio::task;

/// Loads entry details from a bundle and memoizes the facts the filters need.
///
/// Caches are keyed by index and name, filled on first access and never
/// invalidated. Entries with an unknown index are always decoded from scratch.
#[derive(Clone)]
pub struct Repository {
    inner: Arc<Inner>,
}

struct Inner {
    bundle: Arc<dyn Bundle>,
    names: RwLock<BTreeMap<Key, locale::Map>>,
    types: RwLock<BTreeMap<Key, BTreeSet<Type>>>,
    stats: RwLock<BTreeMap<Key, Stats>>,
}

/// Entries may share an index, so the name is part of the key.
type Key = (entry::Id, String);

impl Repository {
    pub fn new(bundle: Arc<dyn Bundle>) -> Self {
        Self {
            inner: Arc::new(Inner {
                bundle,
                names: RwLock::default(),
                types: RwLock::default(),
                stats: RwLock::default(),
            }),
        }
    }

    pub fn bundle(&self) -> &dyn Bundle {
        self.inner.bundle.as_ref()
    }

    /// The detail of an entry, looked up by its exact key first.
    pub fn detail(&self, entry: &Entry) -> Option<Detail> {
        let exact = format!("{}.json", entry.key());

        match self.bundle().get(&exact) {
            Ok(bytes) => decode(&exact, &bytes),
            Err(_) => self.detail_by_name(&entry.name),
        }
    }

    pub fn detail_by_name(&self, name: &str) -> Option<Detail> {
        let key = self.bundle().find(&format!("_{name}.json"))?;

        self.load(&key)
    }

    pub fn detail_by_id(&self, id: entry::Id) -> Option<Detail> {
        let prefix = format!("{id}_");

        let mut keys = self.bundle().keys();
        keys.sort();

        let key = keys
            .into_iter()
            .find(|key| key.starts_with(&prefix) && key.ends_with(".json"))?;

        self.load(&key)
    }

    /// Display names in every available locale.
    pub fn names(&self, entry: &Entry) -> locale::Map {
        self.cached(&self.inner.names, entry, |detail| detail.names())
            .unwrap_or_else(|| locale::Map::from_iter([(Locale::English, entry.name.clone())]))
    }

    pub fn types(&self, entry: &Entry) -> BTreeSet<Type> {
        self.cached(&self.inner.types, entry, Detail::type_set)
            .unwrap_or_default()
    }

    pub fn stats(&self, entry: &Entry) -> Stats {
        self.cached(&self.inner.stats, entry, Detail::stats)
            .unwrap_or_default()
    }

    /// Fills the name cache for the whole catalog in the background.
    ///
    /// Resolves to the number of entries whose names are cached.
    pub fn preload(
        &self,
        catalog: &Catalog,
    ) -> impl Future<Output = Result<usize, anywho::Error>> + use<> {
        let repository = self.clone();
        let catalog = catalog.clone();

        async move {
            let cached = task::spawn_blocking(move || {
                for entry in catalog.entries() {
                    let _ = repository.names(entry);
                }

                repository.cached_names()
            })
            .await?;

            log::info!("Preloaded {cached} names");

            Ok(cached)
        }
    }

    pub fn cached_names(&self) -> usize {
        self.inner
            .names
            .read()
            .map(|names| names.len())
            .unwrap_or_default()
    }

    pub fn sprite(&self, entry: &Entry) -> Result<Bytes> {
        self.bundle().get(&format!("{}.png", entry.key()))
    }

    pub fn type_icon(&self, type_: Type) -> Result<Bytes> {
        self.bundle().get(&format!("{}.png", type_.name()))
    }

    pub fn generation_icon(&self, generation: Generation) -> Result<Bytes> {
        self.bundle()
            .get(&format!("gen_{}.png", generation.number()))
    }

    fn load(&self, key: &str) -> Option<Detail> {
        match self.bundle().get(key) {
            Ok(bytes) => decode(key, &bytes),
            Err(error) => {
                log::warn!("{error}");
                None
            }
        }
    }

    fn cached<T: Clone>(
        &self,
        cache: &RwLock<BTreeMap<Key, T>>,
        entry: &Entry,
        derive: impl FnOnce(&Detail) -> T,
    ) -> Option<T> {
        if !entry.id.is_known() {
            return self.detail(entry).as_ref().map(derive);
        }

        let key = (entry.id, entry.name.clone());

        if let Some(value) = cache
            .read()
            .ok()
            .and_then(|cache| cache.get(&key).cloned())
        {
            return Some(value);
        }

        let value = derive(&self.detail(entry)?);

        if let Ok(mut cache) = cache.write() {
            let _ = cache.entry(key).or_insert_with(|| value.clone());
        }

        Some(value)
    }
}

fn decode(key: &str, bytes: &[u8]) -> Option<Detail> {
    match serde_json::from_slice(bytes) {
        Ok(detail) => Some(detail),
        Err(error) => {
            log::warn!("Failed to decode {key}: {error}");
            None
        }
    }
}

impl fmt::Debug for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("names", &self.cached_names())
            .finish()
    }
}
