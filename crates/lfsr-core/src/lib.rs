pub mod error;
pub mod validate;

pub mod register;
pub mod keystream;
pub mod score;
pub mod search;
pub mod cycle;
pub mod sample;

pub use crate::error::{LfsrError, Result};
pub use crate::keystream::BitOrder;
pub use crate::search::{
    config::{ScorePolicy, SearchConfig, SeedPolicy},
    driver::{search, search_parallel, SearchOutcome},
};
