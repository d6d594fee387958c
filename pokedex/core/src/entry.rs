use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub id: Id,
    pub name: String,
}

impl Entry {
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into().to_lowercase(),
        }
    }

    /// Parses a resource stem of the form `{index}_{name}`.
    ///
    /// Stems that do not split into exactly two parts are rejected. An index
    /// that does not parse yields [`Id::UNKNOWN`], so the entry still shows up
    /// (last) in an ordered listing.
    pub fn parse(stem: &str) -> Option<Self> {
        let mut parts = stem.split('_');

        let (Some(index), Some(name), None) = (parts.next(), parts.next(), parts.next()) else {
            return None;
        };

        if name.is_empty() {
            return None;
        }

        Some(Self::new(Id::parse(index), name))
    }

    /// The canonical resource stem, e.g. `025_pikachu`.
    pub fn key(&self) -> String {
        format!("{:03}_{}", self.id.0, self.name)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:03} {}", self.id.0, self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(pub(crate) u32);

impl Id {
    pub const UNKNOWN: Self = Self(9999);

    pub fn new(number: u32) -> Self {
        Self(number)
    }

    pub fn parse(index: &str) -> Self {
        index.trim().parse().map(Self).unwrap_or(Self::UNKNOWN)
    }

    pub fn number(self) -> u32 {
        self.0
    }

    pub fn is_known(self) -> bool {
        self != Self::UNKNOWN
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_index_and_name() {
        let entry = Entry::parse("025_Pikachu").unwrap();

        assert_eq!(entry.id, Id::new(25));
        assert_eq!(entry.name, "pikachu");
        assert_eq!(entry.key(), "025_pikachu");
    }

    #[test]
    fn unparsable_index_is_unknown() {
        let entry = Entry::parse("abc_missingno").unwrap();

        assert_eq!(entry.id, Id::UNKNOWN);
        assert!(!entry.id.is_known());
    }

    #[test]
    fn rejects_malformed_stems() {
        assert_eq!(Entry::parse("bulbasaur"), None);
        assert_eq!(Entry::parse("001_mr_mime"), None);
        assert_eq!(Entry::parse("001_"), None);
    }
}
