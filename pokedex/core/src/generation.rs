use crate::entry;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Generation {
    Fan,
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
}

impl Generation {
    /// The numbered generations, in release order.
    pub const ALL: &[Self] = &[
        Self::I,
        Self::II,
        Self::III,
        Self::IV,
        Self::V,
        Self::VI,
        Self::VII,
        Self::VIII,
    ];

    /// Returns the numbered generation whose index range contains `id`.
    pub fn of(id: entry::Id) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|generation| generation.contains(id))
    }

    pub fn from_number(number: u32) -> Option<Self> {
        Some(match number {
            0 => Self::Fan,
            1 => Self::I,
            2 => Self::II,
            3 => Self::III,
            4 => Self::IV,
            5 => Self::V,
            6 => Self::VI,
            7 => Self::VII,
            8 => Self::VIII,
            _ => None?,
        })
    }

    pub fn number(self) -> u32 {
        match self {
            Self::Fan => 0,
            Self::I => 1,
            Self::II => 2,
            Self::III => 3,
            Self::IV => 4,
            Self::V => 5,
            Self::VI => 6,
            Self::VII => 7,
            Self::VIII => 8,
        }
    }

    /// The inclusive index range. Fan content has none; it is associated explicitly.
    pub fn range(self) -> Option<RangeInclusive<u32>> {
        Some(match self {
            Self::Fan => None?,
            Self::I => 1..=151,
            Self::II => 152..=251,
            Self::III => 252..=386,
            Self::IV => 387..=494,
            Self::V => 495..=649,
            Self::VI => 650..=721,
            Self::VII => 722..=809,
            Self::VIII => 810..=905,
        })
    }

    pub fn contains(self, id: entry::Id) -> bool {
        self.range()
            .is_some_and(|range| range.contains(&id.number()))
    }

    pub fn roman(self) -> &'static str {
        match self {
            Self::Fan => "",
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
            Self::V => "V",
            Self::VI => "VI",
            Self::VII => "VII",
            Self::VIII => "VIII",
        }
    }

    /// Parses labels like `Generation IV` or `Fan Games`.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("fan games") {
            return Some(Self::Fan);
        }

        let mut words = label.split_whitespace();

        match (words.next(), words.next(), words.next()) {
            (Some("Generation"), Some(roman), None) => Self::ALL
                .iter()
                .copied()
                .find(|generation| generation.roman() == roman),
            _ => None,
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fan => f.write_str("Fan Games"),
            generation => write!(f, "Generation {}", generation.roman()),
        }
    }
}

impl FromStr for Generation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("fan") {
            return Ok(Self::Fan);
        }

        if let Some(generation) = s.parse().ok().and_then(Self::from_number) {
            return Ok(generation);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|generation| generation.roman().eq_ignore_ascii_case(s))
            .or_else(|| Self::from_label(s))
            .ok_or_else(|| format!("invalid generation: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_index_has_exactly_one_generation() {
        for number in 1..=905 {
            let id = entry::Id::new(number);
            let matches = Generation::ALL
                .iter()
                .filter(|generation| generation.contains(id))
                .count();

            assert_eq!(matches, 1, "index {number}");
            assert!(Generation::of(id).is_some());
        }
    }

    #[test]
    fn boundaries() {
        assert_eq!(Generation::of(entry::Id::new(151)), Some(Generation::I));
        assert_eq!(Generation::of(entry::Id::new(152)), Some(Generation::II));
        assert_eq!(Generation::of(entry::Id::new(809)), Some(Generation::VII));
        assert_eq!(Generation::of(entry::Id::new(905)), Some(Generation::VIII));
    }

    #[test]
    fn outside_all_ranges() {
        assert_eq!(Generation::of(entry::Id::new(0)), None);
        assert_eq!(Generation::of(entry::Id::new(906)), None);
        assert_eq!(Generation::of(entry::Id::UNKNOWN), None);
    }

    #[test]
    fn labels() {
        assert_eq!(Generation::from_label("Generation IV"), Some(Generation::IV));
        assert_eq!(Generation::from_label("Fan Games"), Some(Generation::Fan));
        assert_eq!(Generation::from_label("Generation X"), None);
        assert_eq!("3".parse::<Generation>(), Ok(Generation::III));
        assert_eq!("vii".parse::<Generation>(), Ok(Generation::VII));
    }
}
