use pokedex;

use crate::pokedex::bundle;
use crate::pokedex::core::detail::LearnMethod;
use crate::pokedex::core::stat::{self, Kind};
use crate::pokedex::core::{Detail, Entry, Game, Generation, Type};
use crate::pokedex::filter::{self, Selection};
use crate::pokedex::{Catalog, Config, Error, Ledger, Repository, Sort};

use clap::{Parser, Subcommand};
use std::cmp::Ordering;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(version, about = "Browse the Pokédex and keep track of your captures")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List entries matching the given filters
    List {
        /// Text contained in any name of the entry
        #[arg(short, long, default_value = "")]
        search: String,
        /// Required type (at most two)
        #[arg(short, long = "type")]
        types: Vec<Type>,
        /// Numbered generation to include (e.g. `1`, `IV`)
        #[arg(short, long = "generation")]
        generations: Vec<Generation>,
        /// Minimum base stat, as `kind=value` (e.g. `speed=100`)
        #[arg(short, long = "min", value_parser = parse_minimum)]
        minimums: Vec<(Kind, u32)>,
        /// Game the entry must be caught in
        #[arg(long)]
        caught: Vec<Game>,
        /// Game the entry must not be caught in
        #[arg(long)]
        missing: Vec<Game>,
        /// Sort method (e.g. `name`, `speed`, `total-asc`)
        #[arg(long, default_value = "index")]
        sort: Sort,
    },
    /// Show everything known about an entry
    Show { name: String },
    /// Compare the base stats of two entries
    Compare { left: String, right: String },
    /// Record a capture
    Catch { name: String, game: Game },
    /// Remove a capture
    Release { name: String, game: Game },
    /// Show captures, for one entry or per game
    Captures { name: Option<String> },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anywho::Error> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    let config = Config::from_env();

    let bundle = Arc::new(bundle::Directory::new(&config.bundle));
    let catalog = Catalog::list(bundle.as_ref());
    let repository = Repository::new(bundle);
    let mut ledger = Ledger::load(config.location()).await;

    match cli.command {
        Command::List {
            search,
            types,
            generations,
            minimums,
            caught,
            missing,
            sort,
        } => {
            let mut selection = Selection::new();

            for type_ in types {
                selection.toggle_type(type_);
            }

            for generation in generations {
                selection.toggle_generation(generation);
            }

            for (kind, value) in minimums {
                selection.set_minimum(kind, value);
            }

            for game in caught {
                let _ = selection.cycle_capture(game);
            }

            for game in missing {
                let _ = selection.cycle_capture(game);
                let _ = selection.cycle_capture(game);
            }

            let results = filter::apply(
                catalog.entries(),
                &search,
                &selection,
                sort,
                &repository,
                &ledger,
            );

            for entry in results.matches() {
                let stats = repository.stats(entry);

                println!(
                    "{entry:<24} {types:<18} total {total}",
                    entry = entry.to_string(),
                    types = repository
                        .types(entry)
                        .iter()
                        .map(Type::to_string)
                        .collect::<Vec<_>>()
                        .join("/"),
                    total = stats.total(),
                );
            }

            println!("{} of {} entries", results.len(), catalog.len());
        }
        Command::Show { name } => {
            let entry = find(&catalog, &name)?;
            let detail = repository
                .detail(entry)
                .ok_or_else(|| Error::NotFound(entry.key()))?;

            show(entry, &detail, &ledger);
        }
        Command::Compare { left, right } => {
            let left = find(&catalog, &left)?;
            let right = find(&catalog, &right)?;

            let left_stats = repository.stats(left);
            let right_stats = repository.stats(right);
            let comparison = left_stats.compare(&right_stats);

            println!("{:<10} {:>12} {:>12}", "", left.name, right.name);

            for (kind, ordering) in comparison.stats {
                println!(
                    "{:<10} {:>12} {:>12} {}",
                    kind.short_name(),
                    left_stats.get(kind),
                    right_stats.get(kind),
                    marker(ordering),
                );
            }

            println!(
                "{:<10} {:>12} {:>12} {}",
                "Total",
                left_stats.total(),
                right_stats.total(),
                marker(comparison.total),
            );
            println!("{} wins {} of 6 stats", left.name, comparison.wins());
        }
        Command::Catch { name, game } => {
            let entry = find(&catalog, &name)?;

            ledger.mark_caught(&entry.name, game).await?;

            println!("Caught {entry} in {game}");
        }
        Command::Release { name, game } => {
            let entry = find(&catalog, &name)?;

            ledger.mark_not_caught(&entry.name, game).await?;

            println!("Released {entry} from {game}");
        }
        Command::Captures { name: Some(name) } => {
            let entry = find(&catalog, &name)?;

            for game in Game::available_for(entry.id) {
                let mark = if ledger.is_caught(&entry.name, game) {
                    "x"
                } else {
                    " "
                };

                println!("[{mark}] {game}");
            }
        }
        Command::Captures { name: None } => {
            for game in Game::ALL {
                let total = ledger.total_caught(*game);

                if total > 0 {
                    println!("{game:<16} {total}");
                }
            }

            println!(
                "{} entries caught, saved in {}",
                ledger.len(),
                ledger.location().display()
            );
        }
    }

    Ok(())
}

fn find<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a Entry, Error> {
    catalog
        .find(name)
        .ok_or_else(|| Error::NotFound(name.to_owned()))
}

fn show(entry: &Entry, detail: &Detail, ledger: &Ledger) {
    let names = detail.names();

    println!("{entry} ({})", names.as_str());

    for locale in names.locales() {
        if let Some(name) = names.get(locale) {
            println!("  {locale}: {name}");
        }
    }

    println!(
        "{}",
        detail
            .types()
            .iter()
            .map(Type::to_string)
            .collect::<Vec<_>>()
            .join(" / ")
    );

    if let Some(generation) = Generation::of(entry.id) {
        println!("{generation}");
    }

    println!(
        "Height {:.1} m, weight {:.1} kg",
        detail.height_in_meters(),
        detail.weight_in_kilograms()
    );

    println!();

    let stats = detail.stats();

    for (kind, value) in stats.iter() {
        println!(
            "{:<8} {value:>3}  {}",
            kind.short_name(),
            stat::Rank::of(kind.percentile(value))
        );
    }

    println!("{:<8} {:>3}", "Total", stats.total());
    println!();

    for ability in detail.abilities() {
        println!(
            "{}{}: {}",
            ability.ability.name,
            if ability.hidden { " (hidden)" } else { "" },
            ability.ability.description
        );
    }

    println!();

    for move_ in detail.moves(None) {
        match move_.method {
            LearnMethod::LevelUp => {
                println!("Lv. {:>3} {}", move_.level_learned_at, move_.details.name);
            }
            ref method => println!("{method:<7} {}", move_.details.name),
        }
    }

    println!();

    if detail.encounters.has_data() {
        for (label, locations) in detail.encounters.generations() {
            println!("{label}: {} locations", locations.len());
        }
    } else {
        println!("No encounter data");
    }

    let captured = ledger.captured_games(&entry.name);

    if !captured.is_empty() {
        println!(
            "Caught in {}",
            captured
                .iter()
                .map(Game::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}

fn marker(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Greater => "<",
        Ordering::Less => ">",
        Ordering::Equal => "=",
    }
}

fn parse_minimum(value: &str) -> Result<(Kind, u32), String> {
    let (kind, minimum) = value
        .split_once('=')
        .ok_or_else(|| format!("expected `kind=value`: {value}"))?;

    Ok((
        kind.parse()?,
        minimum
            .trim()
            .parse()
            .map_err(|error| format!("invalid minimum: {error}"))?,
    ))
}
