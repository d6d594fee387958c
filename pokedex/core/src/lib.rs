pub mod detail;
pub mod encounter;
pub mod entry;
pub mod game;
pub mod generation;
pub mod locale;
pub mod stat;
pub mod types;

pub use detail::Detail;
pub use encounter::Encounters;
pub use entry::Entry;
pub use game::Game;
pub use generation::Generation;
pub use locale::Locale;
pub use stat::Stats;
pub use types::Type;
