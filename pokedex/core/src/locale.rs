use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "fr")]
    French,
}

impl Locale {
    pub const ALL: &[Self] = &[Self::English, Self::Japanese, Self::French];

    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Japanese => "ja",
            Self::French => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Display names of an entry, by locale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Map(BTreeMap<Locale, String>);

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locale: Locale, name: impl Into<String>) -> Option<String> {
        self.0.insert(locale, name.into())
    }

    pub fn get(&self, locale: Locale) -> Option<&str> {
        self.0.get(&locale).map(String::as_str)
    }

    /// Whether any name contains the lowercase `query`.
    pub fn contains(&self, query: &str) -> bool {
        self.0
            .values()
            .any(|name| name.to_lowercase().contains(query))
    }

    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.get(Locale::English)
            .or_else(|| self.get(Locale::Japanese))
            .or_else(|| self.0.values().next().map(String::as_str))
            .unwrap_or("Unknown")
    }
}

impl FromIterator<(Locale, String)> for Map {
    fn from_iter<I: IntoIterator<Item = (Locale, String)>>(iter: I) -> Self {
        Self(BTreeMap::from_iter(iter))
    }
}
