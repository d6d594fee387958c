use crate::Repository;
use crate::core::Entry;
use crate::core::stat::Kind;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sort {
    #[default]
    Index,
    Name,
    Stat(Kind, Order),
    Total(Order),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl Sort {
    /// Every sort method, in menu order.
    pub const ALL: &[Self] = &[
        Self::Index,
        Self::Name,
        Self::Stat(Kind::Hp, Order::Descending),
        Self::Stat(Kind::Hp, Order::Ascending),
        Self::Stat(Kind::Attack, Order::Descending),
        Self::Stat(Kind::Attack, Order::Ascending),
        Self::Stat(Kind::Defense, Order::Descending),
        Self::Stat(Kind::Defense, Order::Ascending),
        Self::Stat(Kind::SpecialAttack, Order::Descending),
        Self::Stat(Kind::SpecialAttack, Order::Ascending),
        Self::Stat(Kind::SpecialDefense, Order::Descending),
        Self::Stat(Kind::SpecialDefense, Order::Ascending),
        Self::Stat(Kind::Speed, Order::Descending),
        Self::Stat(Kind::Speed, Order::Ascending),
        Self::Total(Order::Descending),
        Self::Total(Order::Ascending),
    ];

    /// The identifier accepted by [`FromStr`].
    pub fn id(self) -> String {
        match self {
            Self::Index => "index".to_owned(),
            Self::Name => "name".to_owned(),
            Self::Stat(kind, order) => format!("{}-{}", kind.name(), order.suffix()),
            Self::Total(order) => format!("total-{}", order.suffix()),
        }
    }

    /// Sorts `entries` in place. Ties keep their relative order.
    pub fn apply(self, entries: &mut [Entry], repository: &Repository) {
        match self {
            Self::Index => entries.sort_by_key(|entry| entry.id),
            Self::Name => entries.sort_by(|a, b| a.name.cmp(&b.name)),
            Self::Stat(kind, order) => {
                sort_by_value(entries, order, |entry| repository.stats(entry).get(kind));
            }
            Self::Total(order) => {
                sort_by_value(entries, order, |entry| repository.stats(entry).total());
            }
        }
    }
}

fn sort_by_value(entries: &mut [Entry], order: Order, value: impl Fn(&Entry) -> u32) {
    let mut keyed: Vec<_> = entries
        .iter()
        .map(|entry| (value(entry), entry.clone()))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| order.apply(a.cmp(b)));

    for (slot, (_, entry)) in entries.iter_mut().zip(keyed) {
        *slot = entry;
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = |order: Order| match order {
            Order::Ascending => "low to high",
            Order::Descending => "high to low",
        };

        match self {
            Self::Index => f.write_str("Index"),
            Self::Name => f.write_str("Name"),
            Self::Stat(kind, order) => write!(f, "{kind} ({})", arrow(*order)),
            Self::Total(order) => write!(f, "Total ({})", arrow(*order)),
        }
    }
}

impl FromStr for Sort {
    type Err = String;

    /// Accepts `index`, `name`, a stat or `total`, optionally followed by
    /// `-asc` or `-desc`. Stats and totals sort descending by default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "index" | "id" => return Ok(Self::Index),
            "name" => return Ok(Self::Name),
            _ => {}
        }

        let (target, order) = if let Some(target) = s.strip_suffix("-asc") {
            (target, Order::Ascending)
        } else if let Some(target) = s.strip_suffix("-desc") {
            (target, Order::Descending)
        } else {
            (s.as_str(), Order::Descending)
        };

        if target == "total" {
            return Ok(Self::Total(order));
        }

        let kind = target
            .parse()
            .map_err(|_| format!("invalid sort method: {s}"))?;

        Ok(Self::Stat(kind, order))
    }
}
