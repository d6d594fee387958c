use crate::Bundle;
use crate::core::entry;
use crate::core::Entry;

use std::fmt;
use std::sync::Arc;

/// Every entry available in a bundle, ordered by index.
#[derive(Clone)]
pub struct Catalog {
    entries: Arc<[Entry]>,
}

impl Catalog {
    /// Lists the `{index}_{name}.json` resources of the bundle.
    ///
    /// Keys that do not follow the pattern are skipped. Entries whose index
    /// cannot be parsed are kept with [`entry::Id::UNKNOWN`] and sort last.
    pub fn list(bundle: &dyn Bundle) -> Self {
        let mut entries: Vec<Entry> = bundle
            .keys()
            .iter()
            .filter_map(|key| key.strip_suffix(".json"))
            .filter_map(Entry::parse)
            .collect();

        // Stable, so equal indices keep the bundle's key order
        entries.sort_by_key(|entry| entry.id);

        log::info!("Listed {} entries", entries.len());

        Self::from(entries)
    }

    pub fn get(&self, id: entry::Id) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Finds an entry by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Entry> {
        let name = name.trim().to_lowercase();

        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Entry>> for Catalog {
    fn from(entries: Vec<Entry>) -> Self {
        Self {
            entries: Arc::from(entries),
        }
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("entries", &self.entries.len())
            .finish()
    }
}
