// crates/lfsr-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "lfsr-cli")]
#[command(about = "LFSR keystream search against a reference random sample", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search (mask, tap) pairs for the keystream that minimizes sample entropy
    Search(cmd::search::SearchArgs),

    /// Walk every 8-bit mask through its cycle and plot visited states
    Histogram(cmd::histogram::HistogramArgs),

    /// Fetch true-random bits and pack them into a sample file
    Fetch(cmd::fetch::FetchArgs),

    /// Analyze a sample as raw bytes (histogram, entropy, zstd size)
    Analyze(cmd::analyze::AnalyzeArgs),

    /// XOR a sample with one keystream (replays a search result; self-inverse)
    Xor(cmd::xor::XorArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Search(args) => cmd::search::run(args),
        Commands::Histogram(args) => cmd::histogram::run(args),
        Commands::Fetch(args) => cmd::fetch::run(args),
        Commands::Analyze(args) => cmd::analyze::run(args),
        Commands::Xor(args) => cmd::xor::run(args),
    }
}
