use pokedex::bundle;
use pokedex::core::stat::Kind;
use pokedex::core::{Entry, Game, Generation, Type};
use pokedex::defaults;
use pokedex::filter::{self, Selection};
use pokedex::ledger::{self, Ledger};
use pokedex::sort::{Order, Sort};
use pokedex::{Catalog, Repository};

use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

struct Fixture {
    catalog: Catalog,
    repository: Repository,
}

impl Fixture {
    fn new(documents: &[(u32, &str, &str, u32)]) -> Self {
        let bundle = Arc::new(bundle::Memory::from_iter(documents.iter().map(
            |(id, name, types, hp)| {
                let document = json!({
                    "id": id,
                    "name": name,
                    "name-jp": format!("{name}-jp"),
                    "height": 10,
                    "weight": 100,
                    "types": types
                        .split_whitespace()
                        .enumerate()
                        .map(|(i, type_)| json!({ "slot": i + 1, "type": { "name": type_ } }))
                        .collect::<Vec<_>>(),
                    "stats": [
                        { "base_stat": hp, "stat": { "name": "hp" } },
                        { "base_stat": 50, "stat": { "name": "speed" } },
                    ],
                });

                (format!("{id:03}_{name}.json"), document.to_string())
            },
        )));

        Self {
            catalog: Catalog::list(bundle.as_ref()),
            repository: Repository::new(bundle),
        }
    }

    fn run(
        &self,
        search: &str,
        selection: &Selection,
        sort: Sort,
        ledger: &Ledger,
    ) -> Vec<String> {
        filter::apply(
            self.catalog.entries(),
            search,
            selection,
            sort,
            &self.repository,
            ledger,
        )
        .matches()
        .iter()
        .map(|entry| entry.name.clone())
        .collect()
    }
}

async fn empty_ledger(directory: &TempDir) -> Ledger {
    Ledger::load(ledger::Location::new(
        directory.path().join(ledger::FILE_NAME),
        Arc::new(defaults::Memory::new()),
    ))
    .await
}

#[tokio::test]
async fn search_then_generation() {
    let directory = TempDir::new().unwrap();
    let ledger = empty_ledger(&directory).await;

    let fixture = Fixture::new(&[
        (1, "alpha", "normal", 40),
        (2, "bulbi", "grass", 50),
        (3, "cinder", "fire", 60),
    ]);

    let mut selection = Selection::new();

    assert_eq!(
        fixture.run("a", &selection, Sort::Index, &ledger),
        ["alpha"]
    );

    selection.toggle_generation(Generation::I);

    assert_eq!(
        fixture.run("", &selection, Sort::Index, &ledger),
        ["alpha", "bulbi", "cinder"]
    );

    selection.toggle_generation(Generation::I);
    selection.toggle_generation(Generation::II);

    assert!(fixture.run("", &selection, Sort::Index, &ledger).is_empty());
}

#[tokio::test]
async fn search_matches_translated_names() {
    let directory = TempDir::new().unwrap();
    let ledger = empty_ledger(&directory).await;

    let fixture = Fixture::new(&[(1, "alpha", "normal", 40), (2, "bulbi", "grass", 50)]);

    assert_eq!(
        fixture.run("BULBI-J", &Selection::new(), Sort::Index, &ledger),
        ["bulbi"]
    );
}

#[tokio::test]
async fn whitespace_is_searched_literally() {
    let directory = TempDir::new().unwrap();
    let ledger = empty_ledger(&directory).await;

    let fixture = Fixture::new(&[(1, "alpha", "normal", 40), (2, "bulbi", "grass", 50)]);

    assert!(fixture
        .run(" ", &Selection::new(), Sort::Index, &ledger)
        .is_empty());
    assert!(fixture
        .run(" alpha", &Selection::new(), Sort::Index, &ledger)
        .is_empty());
    assert_eq!(
        fixture.run("", &Selection::new(), Sort::Index, &ledger),
        ["alpha", "bulbi"]
    );
}

#[tokio::test]
async fn type_filter_requires_every_selected_type() {
    let directory = TempDir::new().unwrap();
    let ledger = empty_ledger(&directory).await;

    let fixture = Fixture::new(&[
        (4, "charmander", "fire", 39),
        (6, "charizard", "fire flying", 78),
        (16, "pidgey", "normal flying", 40),
    ]);

    let mut selection = Selection::new();
    selection.toggle_type(Type::Fire);
    selection.toggle_type(Type::Flying);

    assert_eq!(
        fixture.run("", &selection, Sort::Index, &ledger),
        ["charizard"]
    );

    selection.toggle_type(Type::Fire);

    assert_eq!(
        fixture.run("", &selection, Sort::Index, &ledger),
        ["charizard", "pidgey"]
    );
}

#[tokio::test]
async fn stat_minimums_are_inclusive() {
    let directory = TempDir::new().unwrap();
    let ledger = empty_ledger(&directory).await;

    let fixture = Fixture::new(&[
        (1, "alpha", "normal", 40),
        (2, "bulbi", "grass", 50),
        (3, "cinder", "fire", 60),
    ]);

    let mut selection = Selection::new();
    selection.set_minimum(Kind::Hp, 50);

    assert_eq!(
        fixture.run("", &selection, Sort::Index, &ledger),
        ["bulbi", "cinder"]
    );

    selection.set_minimum(Kind::Speed, 51);

    assert!(fixture.run("", &selection, Sort::Index, &ledger).is_empty());
}

#[tokio::test]
async fn capture_filters_are_combined() {
    let directory = TempDir::new().unwrap();
    let mut ledger = empty_ledger(&directory).await;

    let fixture = Fixture::new(&[
        (1, "alpha", "normal", 40),
        (2, "bulbi", "grass", 50),
        (3, "cinder", "fire", 60),
    ]);

    ledger.mark_caught("alpha", Game::Red).await.unwrap();
    ledger.mark_caught("alpha", Game::Blue).await.unwrap();
    ledger.mark_caught("bulbi", Game::Red).await.unwrap();

    let mut selection = Selection::new();
    let _ = selection.cycle_capture(Game::Red);
    let _ = selection.cycle_capture(Game::Blue);

    assert_eq!(fixture.run("", &selection, Sort::Index, &ledger), ["alpha"]);

    let _ = selection.cycle_capture(Game::Blue);

    assert_eq!(fixture.run("", &selection, Sort::Index, &ledger), ["bulbi"]);

    selection.clear();
    let _ = selection.cycle_capture(Game::Red);
    let _ = selection.cycle_capture(Game::Red);

    assert_eq!(fixture.run("", &selection, Sort::Index, &ledger), ["cinder"]);
}

#[tokio::test]
async fn stat_sorts_are_stable() {
    let directory = TempDir::new().unwrap();
    let ledger = empty_ledger(&directory).await;

    let fixture = Fixture::new(&[
        (1, "a", "normal", 50),
        (2, "b", "normal", 50),
        (3, "c", "normal", 80),
    ]);

    let selection = Selection::new();

    assert_eq!(
        fixture.run("", &selection, Sort::Stat(Kind::Hp, Order::Descending), &ledger),
        ["c", "a", "b"]
    );
    assert_eq!(
        fixture.run("", &selection, Sort::Stat(Kind::Hp, Order::Ascending), &ledger),
        ["a", "b", "c"]
    );
    assert_eq!(
        fixture.run("", &selection, Sort::Total(Order::Descending), &ledger),
        ["c", "a", "b"]
    );
}

#[tokio::test]
async fn name_sort_orders_alphabetically() {
    let directory = TempDir::new().unwrap();
    let ledger = empty_ledger(&directory).await;

    let fixture = Fixture::new(&[
        (3, "cinder", "fire", 60),
        (1, "bulbi", "grass", 50),
        (2, "alpha", "normal", 40),
    ]);

    assert_eq!(
        fixture.run("", &Selection::new(), Sort::Name, &ledger),
        ["alpha", "bulbi", "cinder"]
    );
    assert_eq!(
        fixture.run("", &Selection::new(), Sort::Index, &ledger),
        ["bulbi", "alpha", "cinder"]
    );
}

#[test]
fn entries_keep_catalog_identity() {
    let fixture = Fixture::new(&[(25, "pikachu", "electric", 35)]);

    assert_eq!(
        fixture.catalog.entries(),
        [Entry::new(pokedex::core::entry::Id::new(25), "pikachu")]
    );
}
