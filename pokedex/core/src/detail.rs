use crate::encounter::Encounters;
use crate::entry;
use crate::locale::{self, Locale};
use crate::stat::Stats;
use crate::{Entry, Type};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// The full record of an entry, as stored in its bundled JSON document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Detail {
    pub id: entry::Id,
    pub name: String,
    #[serde(rename = "name-jp", default)]
    pub name_jp: Option<String>,
    #[serde(rename = "name-fr", default)]
    pub name_fr: Option<String>,
    /// In decimeters.
    pub height: u32,
    /// In hectograms.
    pub weight: u32,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub moves: Vec<Move>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub types: Vec<Typing>,
    #[serde(rename = "location_encounters_by_generation", default)]
    pub encounters: Encounters,
}

impl Detail {
    pub fn entry(&self) -> Entry {
        Entry::new(self.id, &self.name)
    }

    pub fn names(&self) -> locale::Map {
        let mut names = locale::Map::new();
        names.insert(Locale::English, &self.name);

        for (locale, name) in [
            (Locale::Japanese, &self.name_jp),
            (Locale::French, &self.name_fr),
        ] {
            if let Some(name) = name.as_deref().filter(|name| !name.is_empty()) {
                names.insert(locale, name);
            }
        }

        names
    }

    /// Types ordered by slot. Unknown type names are skipped.
    pub fn types(&self) -> Vec<Type> {
        let mut typings: Vec<_> = self.types.iter().collect();
        typings.sort_by_key(|typing| typing.slot);

        typings
            .into_iter()
            .filter_map(|typing| match typing.type_.name.parse() {
                Ok(type_) => Some(type_),
                Err(error) => {
                    log::debug!("{error} ({name})", name = self.name);
                    None
                }
            })
            .collect()
    }

    pub fn type_set(&self) -> BTreeSet<Type> {
        self.types().into_iter().collect()
    }

    pub fn stats(&self) -> Stats {
        Stats::from_named(
            self.stats
                .iter()
                .map(|stat| (stat.stat.name.as_str(), stat.base_stat)),
        )
    }

    pub fn height_in_meters(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    pub fn weight_in_kilograms(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    /// Abilities ordered by slot.
    pub fn abilities(&self) -> Vec<&Ability> {
        let mut abilities: Vec<_> = self.abilities.iter().collect();
        abilities.sort_by_key(|ability| ability.slot);
        abilities
    }

    /// Learnable moves, optionally restricted to one learn method.
    ///
    /// Level-up moves come first, by level; the rest are grouped by method and
    /// ordered by name. Duplicate learn entries are listed once.
    pub fn moves(&self, method: Option<&LearnMethod>) -> Vec<&Move> {
        let mut moves: Vec<_> = self
            .moves
            .iter()
            .filter(|move_| method.is_none_or(|method| &move_.method == method))
            .collect();

        moves.sort_by(|a, b| a.learn_order(b));
        moves.dedup_by(|a, b| a.key() == b.key());
        moves
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub base_stat: u32,
    pub stat: Resource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typing {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_: Resource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub ability: AbilityDetails,
    #[serde(rename = "is_hidden")]
    pub hidden: bool,
    pub slot: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityDetails {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    #[serde(rename = "move")]
    pub details: MoveDetails,
    pub level_learned_at: u32,
    #[serde(rename = "move_learn_method")]
    pub method: LearnMethod,
    pub version_group: String,
}

impl Move {
    pub fn key(&self) -> MoveKey<'_> {
        MoveKey {
            name: &self.details.name,
            method: &self.method,
            level: self.level_learned_at,
            version_group: &self.version_group,
        }
    }

    fn learn_order(&self, other: &Self) -> Ordering {
        self.method
            .rank()
            .cmp(&other.method.rank())
            .then_with(|| match (&self.method, &other.method) {
                (LearnMethod::LevelUp, LearnMethod::LevelUp) => {
                    self.level_learned_at.cmp(&other.level_learned_at)
                }
                (LearnMethod::Other(a), LearnMethod::Other(b)) => a.cmp(b),
                _ => Ordering::Equal,
            })
            .then_with(|| self.details.name.cmp(&other.details.name))
            .then_with(|| self.version_group.cmp(&other.version_group))
    }
}

/// Identifies a learn entry: the same move may be learned several ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoveKey<'a> {
    pub name: &'a str,
    pub method: &'a LearnMethod,
    pub level: u32,
    pub version_group: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDetails {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub pp: Option<u32>,
    #[serde(default)]
    pub accuracy: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LearnMethod {
    LevelUp,
    Machine,
    Egg,
    Tutor,
    Other(String),
}

impl LearnMethod {
    pub fn as_str(&self) -> &str {
        match self {
            Self::LevelUp => "level-up",
            Self::Machine => "machine",
            Self::Egg => "egg",
            Self::Tutor => "tutor",
            Self::Other(method) => method,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::LevelUp => 0,
            Self::Machine => 1,
            Self::Egg => 2,
            Self::Tutor => 3,
            Self::Other(_) => 4,
        }
    }
}

impl From<String> for LearnMethod {
    fn from(method: String) -> Self {
        match method.as_str() {
            "level-up" => Self::LevelUp,
            "machine" => Self::Machine,
            "egg" => Self::Egg,
            "tutor" => Self::Tutor,
            _ => Self::Other(method),
        }
    }
}

impl From<LearnMethod> for String {
    fn from(method: LearnMethod) -> Self {
        method.as_str().to_owned()
    }
}

impl fmt::Display for LearnMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encounter::Reason;

    const CHARIZARD: &str = r#"{
        "id": 6,
        "name": "charizard",
        "name-jp": "リザードン",
        "name-fr": "Dracaufeu",
        "height": 17,
        "weight": 905,
        "abilities": [
            { "ability": { "name": "solar-power", "description": "Boosts Sp. Atk in sunshine." }, "is_hidden": true, "slot": 3 },
            { "ability": { "name": "blaze", "description": "Powers up Fire moves." }, "is_hidden": false, "slot": 1 }
        ],
        "moves": [
            { "move": { "name": "slash", "type": "normal", "power": 70, "pp": 20, "accuracy": 100 }, "level_learned_at": 30, "move_learn_method": "level-up", "version_group": "red-blue" },
            { "move": { "name": "ember", "type": "fire", "power": 40, "pp": 25, "accuracy": 100 }, "level_learned_at": 1, "move_learn_method": "level-up", "version_group": "red-blue" },
            { "move": { "name": "ember", "type": "fire", "power": 40, "pp": 25, "accuracy": 100 }, "level_learned_at": 1, "move_learn_method": "level-up", "version_group": "red-blue" },
            { "move": { "name": "swift", "type": "normal" }, "level_learned_at": 0, "move_learn_method": "machine", "version_group": "red-blue" },
            { "move": { "name": "dig", "type": "ground" }, "level_learned_at": 0, "move_learn_method": "machine", "version_group": "red-blue" },
            { "move": { "name": "dragon-dance" }, "level_learned_at": 0, "move_learn_method": "tutor", "version_group": "emerald" }
        ],
        "sprites": { "front_default": null },
        "stats": [
            { "base_stat": 78, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 84, "stat": { "name": "attack", "url": "" } },
            { "base_stat": 78, "stat": { "name": "defense", "url": "" } },
            { "base_stat": 109, "stat": { "name": "special-attack", "url": "" } },
            { "base_stat": 85, "stat": { "name": "special-defense", "url": "" } },
            { "base_stat": 100, "stat": { "name": "speed", "url": "" } }
        ],
        "types": [
            { "slot": 2, "type": { "name": "flying", "url": "" } },
            { "slot": 1, "type": { "name": "fire", "url": "" } },
            { "slot": 3, "type": { "name": "shadow", "url": "" } }
        ]
    }"#;

    fn charizard() -> Detail {
        serde_json::from_str(CHARIZARD).unwrap()
    }

    #[test]
    fn decodes_document() {
        let detail = charizard();

        assert_eq!(detail.entry(), Entry::new(entry::Id::new(6), "charizard"));
        assert_eq!(detail.height_in_meters(), 1.7);
        assert_eq!(detail.weight_in_kilograms(), 90.5);
        assert_eq!(detail.encounters, Encounters::Unavailable(Reason::Missing));
        assert_eq!(detail.abilities()[0].ability.name, "blaze");
        assert!(detail.abilities()[1].hidden);
    }

    #[test]
    fn names_include_translations() {
        let names = charizard().names();

        assert_eq!(names.get(Locale::English), Some("charizard"));
        assert_eq!(names.get(Locale::Japanese), Some("リザードン"));
        assert!(names.contains("dracau"));
    }

    #[test]
    fn types_follow_slots_and_skip_unknown_names() {
        assert_eq!(charizard().types(), vec![Type::Fire, Type::Flying]);
    }

    #[test]
    fn stats_total() {
        let stats = charizard().stats();

        assert_eq!(stats.special_attack, 109);
        assert_eq!(stats.total(), 534);
    }

    #[test]
    fn moves_are_grouped_by_learn_method() {
        let detail = charizard();

        let names: Vec<_> = detail
            .moves(None)
            .into_iter()
            .map(|move_| move_.details.name.as_str())
            .collect();

        assert_eq!(names, ["ember", "slash", "dig", "swift", "dragon-dance"]);

        let machines = detail.moves(Some(&LearnMethod::Machine));
        assert_eq!(machines.len(), 2);
        assert_eq!(machines[0].details.power, None);
    }
}
