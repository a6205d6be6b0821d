// crates/lfsr-cli/src/cmd/args.rs
//
// Value enums and parsers shared by several commands.

use clap::ValueEnum;
use lfsr_core::{BitOrder, ScorePolicy, SeedPolicy};

pub const DEFAULT_DATA: &str = "data/AMillionRandomDigits.bin";

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeedArg {
    /// Every candidate starts the register at 1
    One,
    /// The tap selector is also the initial register state
    Tap,
}

impl From<SeedArg> for SeedPolicy {
    fn from(s: SeedArg) -> Self {
        match s {
            SeedArg::One => SeedPolicy::One,
            SeedArg::Tap => SeedPolicy::Tap,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScoreArg {
    /// Minimum entropy
    Entropy,
    /// Minimum entropy, ties broken by zstd size
    EntropyZstd,
}

impl From<ScoreArg> for ScorePolicy {
    fn from(s: ScoreArg) -> Self {
        match s {
            ScoreArg::Entropy => ScorePolicy::Entropy,
            ScoreArg::EntropyZstd => ScorePolicy::EntropyThenCompressed,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// First keystream bit of a byte is bit 7
    Msb,
    /// First keystream bit of a byte is bit 0
    Lsb,
}

impl From<OrderArg> for BitOrder {
    fn from(o: OrderArg) -> Self {
        match o {
            OrderArg::Msb => BitOrder::MsbFirst,
            OrderArg::Lsb => BitOrder::LsbFirst,
        }
    }
}

/// Accepts decimal or 0x-prefixed hex.
pub fn parse_u16(s: &str) -> Result<u16, String> {
    let t = s.trim();
    let parsed = match t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => t.parse::<u16>(),
    };
    parsed.map_err(|e| format!("invalid 16-bit value '{s}': {e}"))
}

/// Range bound in 0..=65536, decimal or hex.
pub fn parse_bound(s: &str) -> Result<u32, String> {
    let t = s.trim();
    let parsed = match t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => t.parse::<u32>(),
    };
    let v = parsed.map_err(|e| format!("invalid bound '{s}': {e}"))?;
    if v > 65_536 {
        return Err(format!("bound {v} exceeds 65536"));
    }
    Ok(v)
}
