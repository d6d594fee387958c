use crate::defaults;
use crate::ledger;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

/// Where the catalog is read from and where user data is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bundle: PathBuf,
    pub ledger: PathBuf,
    pub defaults: PathBuf,
}

impl Config {
    /// Reads `UNBOUND_BUNDLE` and `UNBOUND_DATA`, falling back to the bundled
    /// data and the platform data directory.
    pub fn from_env() -> Self {
        let bundle = env::var_os("UNBOUND_BUNDLE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"));

        let data = env::var_os("UNBOUND_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(data_dir);

        let config = Self::new(bundle, data);

        log::info!("{config:?}");

        config
    }

    pub fn new(bundle: impl Into<PathBuf>, data: impl Into<PathBuf>) -> Self {
        let data = data.into();

        Self {
            bundle: bundle.into(),
            ledger: data.join(ledger::FILE_NAME),
            defaults: data.join("defaults.ron"),
        }
    }

    pub fn location(&self) -> ledger::Location {
        ledger::Location::new(
            &self.ledger,
            Arc::new(defaults::File::open(&self.defaults)),
        )
    }
}

fn data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_default().join("unbound")
}
