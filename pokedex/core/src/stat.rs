//! Base stats and how they rank against the rest of the catalog.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Kind {
    pub const ALL: [Self; 6] = [
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::SpecialAttack,
        Self::SpecialDefense,
        Self::Speed,
    ];

    /// The name used by detail documents.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::SpecialAttack => "special-attack",
            Self::SpecialDefense => "special-defense",
            Self::Speed => "speed",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::SpecialAttack => "Sp. Atk",
            Self::SpecialDefense => "Sp. Def",
            Self::Speed => "Speed",
        }
    }

    /// Highest base value in the catalog; minimum thresholds are clamped to it.
    pub fn max(self) -> u32 {
        match self {
            Self::Hp => 255,
            Self::Attack => 190,
            Self::Defense => 230,
            Self::SpecialAttack => 194,
            Self::SpecialDefense => 230,
            Self::Speed => 180,
        }
    }

    pub fn thresholds(self) -> &'static Thresholds {
        match self {
            Self::Hp => &[30, 45, 65, 80, 100, 110, 130],
            Self::Attack => &[35, 50, 75, 95, 115, 125, 140],
            Self::Defense => &[30, 50, 70, 85, 105, 115, 135],
            Self::SpecialAttack => &[30, 45, 65, 90, 110, 120, 140],
            Self::SpecialDefense => &[30, 50, 70, 85, 105, 115, 135],
            Self::Speed => &[25, 45, 70, 90, 108, 120, 140],
        }
    }

    pub fn percentile(self, value: u32) -> f64 {
        percentile(self.thresholds(), value)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.short_name())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        Ok(match s.as_str() {
            "hp" => Self::Hp,
            "attack" | "atk" => Self::Attack,
            "defense" | "def" => Self::Defense,
            "special-attack" | "sp-atk" | "spa" => Self::SpecialAttack,
            "special-defense" | "sp-def" | "spd" => Self::SpecialDefense,
            "speed" | "spe" => Self::Speed,
            _ => Err(format!("invalid stat: {s}"))?,
        })
    }
}

/// Seven stat values marking the 10th, 25th, 50th, 75th, 90th, 95th and 99th
/// percentiles of the catalog.
pub type Thresholds = [u32; 7];

pub const DEFAULT_THRESHOLDS: Thresholds = [30, 50, 70, 90, 110, 125, 145];

const BOUNDARIES: [f64; 7] = [0.10, 0.25, 0.50, 0.75, 0.90, 0.95, 0.99];

/// Ranks a stat by name; unknown names use [`DEFAULT_THRESHOLDS`].
pub fn percentile_by_name(name: &str, value: u32) -> f64 {
    match name.parse::<Kind>() {
        Ok(kind) => kind.percentile(value),
        Err(_) => percentile(&DEFAULT_THRESHOLDS, value),
    }
}

/// Maps `value` onto `[0, 1]`, piecewise-linearly between thresholds.
pub fn percentile(thresholds: &Thresholds, value: u32) -> f64 {
    let value = f64::from(value);

    let first = f64::from(thresholds[0]);

    if value <= first {
        return value / first * BOUNDARIES[0];
    }

    for i in 1..thresholds.len() {
        let upper = f64::from(thresholds[i]);

        if value <= upper {
            let lower = f64::from(thresholds[i - 1]);
            let position = (value - lower) / (upper - lower);

            return BOUNDARIES[i - 1] + position * (BOUNDARIES[i] - BOUNDARIES[i - 1]);
        }
    }

    let last = f64::from(thresholds[6]);

    (0.99 + (value - last) / 100.0 * 0.01).min(1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Bad,
    Average,
    Good,
    Great,
    Excellent,
    /// Top N% of the catalog.
    Top(u32),
}

impl Rank {
    pub fn of(percentile: f64) -> Self {
        match percentile {
            p if p < 0.25 => Self::Bad,
            p if p < 0.5 => Self::Average,
            p if p < 0.75 => Self::Good,
            p if p < 0.9 => Self::Great,
            p if p < 0.95 => Self::Excellent,
            p => Self::Top(100 - ((p * 100.0) as u32).min(100)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bad => f.write_str("Bad"),
            Self::Average => f.write_str("Average"),
            Self::Good => f.write_str("Good"),
            Self::Great => f.write_str("Great"),
            Self::Excellent => f.write_str("Excellent"),
            Self::Top(percent) => write!(f, "Top {percent}%"),
        }
    }
}

/// The six base stats of an entry.
///
/// Also used as a set of minimum thresholds, where 0 means "no minimum".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl Stats {
    pub fn get(&self, kind: Kind) -> u32 {
        match kind {
            Kind::Hp => self.hp,
            Kind::Attack => self.attack,
            Kind::Defense => self.defense,
            Kind::SpecialAttack => self.special_attack,
            Kind::SpecialDefense => self.special_defense,
            Kind::Speed => self.speed,
        }
    }

    pub fn set(&mut self, kind: Kind, value: u32) {
        let slot = match kind {
            Kind::Hp => &mut self.hp,
            Kind::Attack => &mut self.attack,
            Kind::Defense => &mut self.defense,
            Kind::SpecialAttack => &mut self.special_attack,
            Kind::SpecialDefense => &mut self.special_defense,
            Kind::Speed => &mut self.speed,
        };

        *slot = value;
    }

    pub fn total(&self) -> u32 {
        Kind::ALL.iter().map(|kind| self.get(*kind)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Kind, u32)> + '_ {
        Kind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Collects stats from `(name, value)` pairs, matching names
    /// case-insensitively. Missing kinds stay at 0; unknown names are ignored.
    pub fn from_named<'a>(stats: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        let mut result = Self::default();

        for (name, value) in stats {
            if let Ok(kind) = name.parse() {
                result.set(kind, value);
            }
        }

        result
    }

    /// Whether every non-zero minimum in `minimums` is met.
    pub fn meets(&self, minimums: &Stats) -> bool {
        minimums
            .iter()
            .all(|(kind, minimum)| minimum == 0 || self.get(kind) >= minimum)
    }

    pub fn active(&self) -> usize {
        self.iter().filter(|(_, value)| *value > 0).count()
    }

    /// Compares each stat and the total against `other`.
    pub fn compare(&self, other: &Stats) -> Comparison {
        Comparison {
            stats: Kind::ALL.map(|kind| (kind, self.get(kind).cmp(&other.get(kind)))),
            total: self.total().cmp(&other.total()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub stats: [(Kind, Ordering); 6],
    pub total: Ordering,
}

impl Comparison {
    /// How many stats are strictly higher on the left side.
    pub fn wins(&self) -> usize {
        self.stats
            .iter()
            .filter(|(_, ordering)| ordering.is_gt())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn thresholds_map_to_boundaries() {
        for kind in Kind::ALL {
            let thresholds = kind.thresholds();

            for (threshold, boundary) in thresholds.iter().zip(BOUNDARIES) {
                assert!(
                    close(kind.percentile(*threshold), boundary),
                    "{kind:?} at {threshold}"
                );
            }
        }
    }

    #[test]
    fn percentile_is_monotonic() {
        for kind in Kind::ALL {
            let mut previous = 0.0;

            for value in 0..=300 {
                let current = kind.percentile(value);

                assert!(current >= previous, "{kind:?} at {value}");
                assert!((0.0..=1.0).contains(&current));

                previous = current;
            }
        }
    }

    #[test]
    fn percentile_interpolates_hp() {
        assert!(close(Kind::Hp.percentile(15), 0.05));
        assert!(close(Kind::Hp.percentile(55), 0.375));
        assert!(close(Kind::Hp.percentile(180), 0.995));
        assert!(close(Kind::Hp.percentile(255), 1.0));
    }

    #[test]
    fn unknown_stat_uses_default_table() {
        assert!(close(percentile_by_name("accuracy", 145), 0.99));
        assert!(close(percentile_by_name("Special-Attack", 140), 0.99));
    }

    #[test]
    fn rank_labels() {
        assert_eq!(Rank::of(0.0), Rank::Bad);
        assert_eq!(Rank::of(0.25), Rank::Average);
        assert_eq!(Rank::of(0.5), Rank::Good);
        assert_eq!(Rank::of(0.75), Rank::Great);
        assert_eq!(Rank::of(0.9), Rank::Excellent);
        assert_eq!(Rank::of(0.955), Rank::Top(5));
        assert_eq!(Rank::of(1.0), Rank::Top(0));
        assert_eq!(Rank::of(0.99).to_string(), "Top 1%");
    }

    #[test]
    fn named_stats_default_to_zero() {
        let stats = Stats::from_named([("HP", 45), ("attack", 49), ("evasion", 100)]);

        assert_eq!(stats.hp, 45);
        assert_eq!(stats.attack, 49);
        assert_eq!(stats.speed, 0);
        assert_eq!(stats.total(), 94);
    }

    #[test]
    fn zero_minimums_are_ignored() {
        let stats = Stats {
            hp: 80,
            attack: 82,
            defense: 83,
            special_attack: 100,
            special_defense: 100,
            speed: 80,
        };

        let mut minimums = Stats::default();
        assert!(stats.meets(&minimums));

        minimums.set(Kind::SpecialAttack, 100);
        assert!(stats.meets(&minimums));

        minimums.set(Kind::Speed, 81);
        assert!(!stats.meets(&minimums));
        assert_eq!(minimums.active(), 2);
    }
}
