// crates/lfsr-cli/src/cmd/mod.rs

pub mod analyze;
pub mod args;
pub mod fetch;
pub mod histogram;
pub mod search;
pub mod xor;
