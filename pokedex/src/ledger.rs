//! Which entries have been caught, and in which games.
use crate::core::Game;
use crate::{Defaults, Result};

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::task;

/// The defaults key of the legacy ledger.
pub const KEY: &str = "pokemon_captures";

/// The file name of the ledger inside the data directory.
pub const FILE_NAME: &str = "pokemon_captures.json";

#[derive(Clone)]
pub struct Ledger {
    captures: BTreeMap<String, BTreeSet<Game>>,
    location: Location,
}

/// Where a ledger is persisted.
#[derive(Clone)]
pub struct Location {
    pub file: PathBuf,
    pub defaults: Arc<dyn Defaults>,
}

impl Location {
    pub fn new(file: impl Into<PathBuf>, defaults: Arc<dyn Defaults>) -> Self {
        Self {
            file: file.into(),
            defaults,
        }
    }
}

impl Ledger {
    /// Loads the ledger file, or migrates the legacy ledger when there is no
    /// usable file. Starts empty when neither can be read.
    pub async fn load(location: Location) -> Self {
        match read(&location.file).await {
            Ok(Some(captures)) => {
                log::info!(
                    "Loaded {} captured entries from {}",
                    captures.len(),
                    location.file.display()
                );

                return Self { captures, location };
            }
            Ok(None) => {}
            Err(error) => {
                log::warn!("Ignoring ledger at {}: {error}", location.file.display());
            }
        }

        if let Some(legacy) = location.defaults.get(KEY) {
            match decode(&legacy) {
                Ok(captures) => {
                    log::info!("Migrating {} captured entries", captures.len());

                    let ledger = Self { captures, location };

                    if let Err(error) = ledger.save().await {
                        log::warn!("Migrated captures were not persisted: {error}");
                    }

                    return ledger;
                }
                Err(error) => {
                    log::warn!("Ignoring legacy ledger: {error}");
                }
            }
        }

        Self {
            captures: BTreeMap::new(),
            location,
        }
    }

    pub fn is_caught(&self, name: &str, game: Game) -> bool {
        self.captures
            .get(name)
            .is_some_and(|games| games.contains(&game))
    }

    /// Records a capture and persists the ledger.
    ///
    /// The change is visible immediately; the returned future only writes it.
    pub fn mark_caught(
        &mut self,
        name: &str,
        game: Game,
    ) -> impl Future<Output = Result<()>> + use<> {
        let _ = self
            .captures
            .entry(name.to_owned())
            .or_default()
            .insert(game);

        self.save()
    }

    /// Removes a capture and persists the ledger. Entries without captures
    /// are dropped.
    pub fn mark_not_caught(
        &mut self,
        name: &str,
        game: Game,
    ) -> impl Future<Output = Result<()>> + use<> {
        if let Some(games) = self.captures.get_mut(name) {
            let _ = games.remove(&game);

            if games.is_empty() {
                let _ = self.captures.remove(name);
            }
        }

        self.save()
    }

    pub fn captured_games(&self, name: &str) -> BTreeSet<Game> {
        self.captures.get(name).cloned().unwrap_or_default()
    }

    /// How many entries have been caught in `game`.
    pub fn total_caught(&self, game: Game) -> usize {
        self.captures
            .values()
            .filter(|games| games.contains(&game))
            .count()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &BTreeSet<Game>)> {
        self.captures
            .iter()
            .map(|(name, games)| (name.as_str(), games))
    }

    pub fn len(&self) -> usize {
        self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }

    pub fn location(&self) -> &Path {
        &self.location.file
    }

    /// Writes the whole ledger to its file and to the defaults store.
    ///
    /// Failures are logged and returned.
    pub fn save(&self) -> impl Future<Output = Result<()>> + use<> {
        let document = serde_json::to_string_pretty(&self.captures);
        let location = self.location.clone();

        async move {
            let result = async move {
                let document = document?;

                let file = write(&location.file, &document).await;

                let defaults = location.defaults.clone();
                let legacy = task::spawn_blocking(move || defaults.set(KEY, document))
                    .await
                    .map_err(io::Error::other)?;

                file.and(legacy)
            }
            .await;

            if let Err(error) = &result {
                log::warn!("Failed to save captures: {error}");
            }

            result
        }
    }
}

async fn read(path: &Path) -> Result<Option<BTreeMap<String, BTreeSet<Game>>>> {
    if !fs::try_exists(path).await? {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).await?;

    Ok(Some(decode(&contents)?))
}

/// Decodes a ledger document, dropping unknown games and empty entries.
fn decode(document: &str) -> Result<BTreeMap<String, BTreeSet<Game>>> {
    let captures: BTreeMap<String, Vec<String>> = serde_json::from_str(document)?;

    Ok(captures
        .into_iter()
        .filter_map(|(name, games)| {
            let games: BTreeSet<Game> = games
                .iter()
                .filter_map(|game| match game.parse() {
                    Ok(game) => Some(game),
                    Err(error) => {
                        log::debug!("{error} ({name})");
                        None
                    }
                })
                .collect();

            (!games.is_empty()).then_some((name, games))
        })
        .collect())
}

/// Replaces `path` atomically through a temporary sibling.
async fn write(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let temporary = path.with_extension("json.tmp");

    fs::write(&temporary, contents).await?;
    fs::rename(&temporary, path).await?;

    Ok(())
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("captures", &self.captures)
            .field("file", &self.location.file)
            .finish()
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Location")
            .field("file", &self.file)
            .finish_non_exhaustive()
    }
}
