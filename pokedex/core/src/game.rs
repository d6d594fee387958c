use crate::Generation;
use crate::entry;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Game {
    Red,
    Blue,
    Yellow,
    Gold,
    Silver,
    Crystal,
    Ruby,
    Sapphire,
    Emerald,
    #[serde(rename = "firered")]
    FireRed,
    #[serde(rename = "leafgreen")]
    LeafGreen,
    Diamond,
    Pearl,
    Platinum,
    #[serde(rename = "heartgold")]
    HeartGold,
    #[serde(rename = "soulsilver")]
    SoulSilver,
    Black,
    White,
    #[serde(rename = "black2")]
    Black2,
    #[serde(rename = "white2")]
    White2,
    X,
    Y,
    OmegaRuby,
    AlphaSapphire,
    Sun,
    Moon,
    UltraSun,
    UltraMoon,
    Sword,
    Shield,
    Unbound,
}

impl Game {
    pub const ALL: &[Self] = &[
        Self::Red,
        Self::Blue,
        Self::Yellow,
        Self::Gold,
        Self::Silver,
        Self::Crystal,
        Self::Ruby,
        Self::Sapphire,
        Self::Emerald,
        Self::FireRed,
        Self::LeafGreen,
        Self::Diamond,
        Self::Pearl,
        Self::Platinum,
        Self::HeartGold,
        Self::SoulSilver,
        Self::Black,
        Self::White,
        Self::Black2,
        Self::White2,
        Self::X,
        Self::Y,
        Self::OmegaRuby,
        Self::AlphaSapphire,
        Self::Sun,
        Self::Moon,
        Self::UltraSun,
        Self::UltraMoon,
        Self::Sword,
        Self::Shield,
        Self::Unbound,
    ];

    /// The identifier stored in ledger documents.
    pub fn id(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Crystal => "crystal",
            Self::Ruby => "ruby",
            Self::Sapphire => "sapphire",
            Self::Emerald => "emerald",
            Self::FireRed => "firered",
            Self::LeafGreen => "leafgreen",
            Self::Diamond => "diamond",
            Self::Pearl => "pearl",
            Self::Platinum => "platinum",
            Self::HeartGold => "heartgold",
            Self::SoulSilver => "soulsilver",
            Self::Black => "black",
            Self::White => "white",
            Self::Black2 => "black2",
            Self::White2 => "white2",
            Self::X => "x",
            Self::Y => "y",
            Self::OmegaRuby => "omega-ruby",
            Self::AlphaSapphire => "alpha-sapphire",
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::UltraSun => "ultra-sun",
            Self::UltraMoon => "ultra-moon",
            Self::Sword => "sword",
            Self::Shield => "shield",
            Self::Unbound => "unbound",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Crystal => "Crystal",
            Self::Ruby => "Ruby",
            Self::Sapphire => "Sapphire",
            Self::Emerald => "Emerald",
            Self::FireRed => "Fire Red",
            Self::LeafGreen => "Leaf Green",
            Self::Diamond => "Diamond",
            Self::Pearl => "Pearl",
            Self::Platinum => "Platinum",
            Self::HeartGold => "Heart Gold",
            Self::SoulSilver => "Soul Silver",
            Self::Black => "Black",
            Self::White => "White",
            Self::Black2 => "Black 2",
            Self::White2 => "White 2",
            Self::X => "X",
            Self::Y => "Y",
            Self::OmegaRuby => "Omega Ruby",
            Self::AlphaSapphire => "Alpha Sapphire",
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::UltraSun => "Ultra Sun",
            Self::UltraMoon => "Ultra Moon",
            Self::Sword => "Sword",
            Self::Shield => "Shield",
            Self::Unbound => "Unbound",
        }
    }

    pub fn generation(self) -> Generation {
        match self {
            Self::Red | Self::Blue | Self::Yellow => Generation::I,
            Self::Gold | Self::Silver | Self::Crystal => Generation::II,
            Self::Ruby | Self::Sapphire | Self::Emerald | Self::FireRed | Self::LeafGreen => {
                Generation::III
            }
            Self::Diamond
            | Self::Pearl
            | Self::Platinum
            | Self::HeartGold
            | Self::SoulSilver => Generation::IV,
            Self::Black | Self::White | Self::Black2 | Self::White2 => Generation::V,
            Self::X | Self::Y | Self::OmegaRuby | Self::AlphaSapphire => Generation::VI,
            Self::Sun | Self::Moon | Self::UltraSun | Self::UltraMoon => Generation::VII,
            Self::Sword | Self::Shield => Generation::VIII,
            Self::Unbound => Generation::Fan,
        }
    }

    /// The generation an entry first appeared in. Unknown indices count as the first.
    pub fn introduced_in(id: entry::Id) -> Generation {
        Generation::of(id).unwrap_or(Generation::I)
    }

    /// Games an entry can be caught in: fan games, then every numbered game
    /// from its introduction onwards, ordered by generation and name.
    pub fn available_for(id: entry::Id) -> Vec<Self> {
        let introduction = Self::introduced_in(id);

        let mut games: Vec<_> = Self::ALL
            .iter()
            .copied()
            .filter(|game| {
                let generation = game.generation();

                generation == Generation::Fan || generation >= introduction
            })
            .collect();

        games.sort_by(|a, b| {
            a.generation()
                .cmp(&b.generation())
                .then_with(|| a.display_name().cmp(b.display_name()))
        });

        games
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

impl FromStr for Game {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|game| game.id() == s)
            .ok_or_else(|| format!("invalid game: {s}"))
    }
}
