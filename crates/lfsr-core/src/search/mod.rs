pub mod config;
pub mod driver;
pub mod hooks;
pub mod record;

pub use config::{ScorePolicy, SearchConfig, SeedPolicy};
pub use driver::{search, search_parallel, SearchOutcome};
pub use hooks::{NoPrune, Prune, SearchObserver};
pub use record::{Best, Candidate, Improvement, Score};
