use crate::Generation;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Where an entry can be found, grouped by generation label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encounters {
    Locations(BTreeMap<String, Locations>),
    Unavailable(Reason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// The document has no encounter data at all.
    Missing,
    /// The document carries a fallback message instead of data.
    Message(String),
    /// The encounter data has a shape we do not understand.
    Malformed,
}

/// Encounters by location name.
pub type Locations = BTreeMap<String, Vec<VersionEncounter>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEncounter {
    pub versions: Vec<String>,
    #[serde(default)]
    pub encounters: Vec<Encounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub method: String,
    #[serde(default)]
    pub min_level: Option<u32>,
    #[serde(default)]
    pub max_level: Option<u32>,
    #[serde(default)]
    pub chance: Option<u32>,
}

impl Encounters {
    pub fn has_data(&self) -> bool {
        matches!(self, Self::Locations(generations) if !generations.is_empty())
    }

    /// Generation labels with their locations, numbered generations first
    /// in release order, then fan content and unrecognized labels.
    pub fn generations(&self) -> Vec<(&str, &Locations)> {
        let Self::Locations(generations) = self else {
            return Vec::new();
        };

        let mut generations: Vec<_> = generations
            .iter()
            .map(|(label, locations)| (label.as_str(), locations))
            .collect();

        generations.sort_by_key(|(label, _)| {
            let order = match Generation::from_label(label) {
                Some(Generation::Fan) | None => u32::MAX,
                Some(generation) => generation.number(),
            };

            (order, *label)
        });

        generations
    }

    fn decode(value: Value) -> Self {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            Wrapped { locations: Locations },
            Bare(Locations),
        }

        if value.is_null() {
            return Self::Unavailable(Reason::Missing);
        }

        if let Ok(generations) = serde_json::from_value::<BTreeMap<String, Shape>>(value.clone()) {
            if generations.is_empty() {
                return Self::Unavailable(Reason::Missing);
            }

            return Self::Locations(
                generations
                    .into_iter()
                    .map(|(label, shape)| match shape {
                        Shape::Wrapped { locations } | Shape::Bare(locations) => (label, locations),
                    })
                    .collect(),
            );
        }

        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return Self::Unavailable(Reason::Message(message.to_owned()));
        }

        log::debug!("Unrecognized encounter data");

        Self::Unavailable(Reason::Malformed)
    }
}

impl Default for Encounters {
    fn default() -> Self {
        Self::Unavailable(Reason::Missing)
    }
}

impl<'de> Deserialize<'de> for Encounters {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::decode(Value::deserialize(deserializer)?))
    }
}
