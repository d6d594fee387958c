pub use pokedex_core as core;

pub mod bundle;
pub mod catalog;
pub mod config;
pub mod defaults;
pub mod filter;
pub mod ledger;
pub mod repository;
pub mod sort;

mod error;
mod search;

pub use bundle::Bundle;
pub use catalog::Catalog;
pub use config::Config;
pub use defaults::Defaults;
pub use error::Error;
pub use filter::Selection;
pub use ledger::Ledger;
pub use repository::Repository;
pub use search::Search;
pub use sort::Sort;

pub type Result<T, E = Error> = std::result::Result<T, E>;
