use crate::core::Entry;

use std::fmt;
use std::sync::Arc;

/// The outcome of running the pipeline over a catalog.
#[derive(Clone)]
pub struct Search {
    pub matches: Arc<[Entry]>,
}

impl Search {
    pub fn matches(&self) -> &[Entry] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl fmt::Debug for Search {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Search")
            .field("matches", &self.matches.len())
            .finish()
    }
}
