//! Narrowing and ordering the catalog.
use crate::core::stat::Kind;
use crate::core::{Entry, Game, Generation, Stats, Type};
use crate::{Ledger, Repository, Search, Sort};

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// How many types can be selected at once.
pub const MAX_TYPES: usize = 2;

/// The capture requirement for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capture {
    #[default]
    Any,
    Caught,
    NotCaught,
}

impl Capture {
    pub fn next(self) -> Self {
        match self {
            Self::Any => Self::Caught,
            Self::Caught => Self::NotCaught,
            Self::NotCaught => Self::Any,
        }
    }

    pub fn accepts(self, caught: bool) -> bool {
        match self {
            Self::Any => true,
            Self::Caught => caught,
            Self::NotCaught => !caught,
        }
    }
}

/// The filters currently chosen by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    types: BTreeSet<Type>,
    generations: BTreeSet<Generation>,
    minimums: Stats,
    captures: BTreeMap<Game, Capture>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects or deselects a type. A new type is ignored once
    /// [`MAX_TYPES`] are selected.
    pub fn toggle_type(&mut self, type_: Type) {
        if !self.types.remove(&type_) && self.types.len() < MAX_TYPES {
            let _ = self.types.insert(type_);
        }
    }

    /// Selects or deselects a numbered generation. [`Generation::Fan`] has no
    /// index range and is ignored.
    pub fn toggle_generation(&mut self, generation: Generation) {
        if generation.range().is_none() {
            log::debug!("{generation} cannot be filtered by index");
            return;
        }

        if !self.generations.remove(&generation) {
            let _ = self.generations.insert(generation);
        }
    }

    /// Sets a minimum stat, clamped to the highest value in the catalog.
    /// A minimum of 0 disables the filter.
    pub fn set_minimum(&mut self, kind: Kind, value: u32) {
        self.minimums.set(kind, value.min(kind.max()));
    }

    /// Advances the capture requirement of `game` and returns the new one.
    pub fn cycle_capture(&mut self, game: Game) -> Capture {
        let next = self.capture(game).next();

        if next == Capture::Any {
            let _ = self.captures.remove(&game);
        } else {
            let _ = self.captures.insert(game, next);
        }

        next
    }

    pub fn capture(&self, game: Game) -> Capture {
        self.captures.get(&game).copied().unwrap_or_default()
    }

    pub fn types(&self) -> &BTreeSet<Type> {
        &self.types
    }

    pub fn generations(&self) -> &BTreeSet<Generation> {
        &self.generations
    }

    pub fn minimums(&self) -> &Stats {
        &self.minimums
    }

    pub fn captures(&self) -> impl Iterator<Item = (Game, Capture)> + '_ {
        self.captures
            .iter()
            .map(|(game, capture)| (*game, *capture))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// How many individual filters are active.
    pub fn active_count(&self) -> usize {
        self.types.len() + self.generations.len() + self.minimums.active() + self.captures.len()
    }

    /// Whether `entry` passes every active filter.
    pub fn matches(&self, entry: &Entry, repository: &Repository, ledger: &Ledger) -> bool {
        if !self.types.is_empty() && !self.types.is_subset(&repository.types(entry)) {
            return false;
        }

        if !self.generations.is_empty()
            && !Generation::of(entry.id)
                .is_some_and(|generation| self.generations.contains(&generation))
        {
            return false;
        }

        if self.minimums.active() > 0 && !repository.stats(entry).meets(&self.minimums) {
            return false;
        }

        self.captures
            .iter()
            .all(|(game, capture)| capture.accepts(ledger.is_caught(&entry.name, *game)))
    }
}

/// Whether any display name of `entry` contains `query`, ignoring case.
/// An empty query matches everything.
pub fn matches_search(entry: &Entry, query: &str, repository: &Repository) -> bool {
    let query = query.to_lowercase();

    query.is_empty() || entry.name.contains(&query) || repository.names(entry).contains(&query)
}

/// Filters `entries` by search text and selection, then sorts them.
pub fn apply(
    entries: &[Entry],
    search: &str,
    selection: &Selection,
    sort: Sort,
    repository: &Repository,
    ledger: &Ledger,
) -> Search {
    let mut matches: Vec<Entry> = entries
        .iter()
        .filter(|entry| matches_search(entry, search, repository))
        .filter(|entry| selection.matches(entry, repository, ledger))
        .cloned()
        .collect();

    sort.apply(&mut matches, repository);

    log::debug!("{} of {} entries match", matches.len(), entries.len());

    Search {
        matches: Arc::from(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_cycles_through_every_state() {
        assert_eq!(Capture::Any.next(), Capture::Caught);
        assert_eq!(Capture::Caught.next(), Capture::NotCaught);
        assert_eq!(Capture::NotCaught.next(), Capture::Any);
    }

    #[test]
    fn cycling_back_to_any_removes_the_game() {
        let mut selection = Selection::new();

        assert_eq!(selection.cycle_capture(Game::Emerald), Capture::Caught);
        assert_eq!(selection.cycle_capture(Game::Emerald), Capture::NotCaught);
        assert!(selection.is_active());

        assert_eq!(selection.cycle_capture(Game::Emerald), Capture::Any);
        assert_eq!(selection.captures().count(), 0);
        assert!(!selection.is_active());
    }

    #[test]
    fn at_most_two_types() {
        let mut selection = Selection::new();

        selection.toggle_type(Type::Fire);
        selection.toggle_type(Type::Flying);
        selection.toggle_type(Type::Dragon);

        assert_eq!(
            selection.types(),
            &BTreeSet::from([Type::Fire, Type::Flying])
        );

        selection.toggle_type(Type::Fire);
        selection.toggle_type(Type::Dragon);

        assert_eq!(
            selection.types(),
            &BTreeSet::from([Type::Flying, Type::Dragon])
        );
    }

    #[test]
    fn fan_generation_is_not_selectable() {
        let mut selection = Selection::new();

        selection.toggle_generation(Generation::Fan);
        selection.toggle_generation(Generation::III);

        assert_eq!(selection.generations(), &BTreeSet::from([Generation::III]));
        assert_eq!(selection.active_count(), 1);
    }

    #[test]
    fn minimums_are_clamped() {
        let mut selection = Selection::new();

        selection.set_minimum(Kind::Speed, 500);
        selection.set_minimum(Kind::Hp, 100);

        assert_eq!(selection.minimums().speed, 180);
        assert_eq!(selection.minimums().hp, 100);
        assert_eq!(selection.active_count(), 2);

        selection.clear();

        assert_eq!(selection, Selection::default());
    }
}
