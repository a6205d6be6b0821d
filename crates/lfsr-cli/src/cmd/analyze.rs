// crates/lfsr-cli/src/cmd/analyze.rs

use clap::Args;
use lfsr_core::sample::window;
use lfsr_core::score::ByteHistogram;
use lfsr_core::search::config::DEFAULT_WINDOW;

use crate::cmd::args::DEFAULT_DATA;
use crate::io::sample_file::load_sample;
use crate::io::zstd_size::zstd_size;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Reference sample file
    #[arg(long, default_value = DEFAULT_DATA)]
    pub data: String,

    /// Search window: bytes from the start of the sample a search would score
    #[arg(long, default_value_t = DEFAULT_WINDOW)]
    pub window: usize,

    /// Show the top N most frequent bytes of the window
    #[arg(long, default_value_t = 16)]
    pub top: usize,

    /// Also report zstd compressed sizes
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub zstd: bool,

    /// Zstd compression level, as for `search --score entropy-zstd`
    #[arg(long, default_value_t = 3)]
    pub zstd_level: i32,
}

/// One `scope=...` result line: size, spread and entropy of `bytes`.
fn scope_line(
    scope: &str,
    bytes: &[u8],
    h: &ByteHistogram,
    zstd_level: Option<i32>,
) -> anyhow::Result<String> {
    let (minc, maxc) = h.min_max();
    let mut line = format!(
        "scope={scope} bytes={} distinct={} min_count={minc} max_count={maxc} entropy={:.6}",
        h.total(),
        h.distinct(),
        h.entropy()
    );
    if let Some(level) = zstd_level {
        let z = zstd_size(bytes, level)?;
        line.push_str(&format!(" zstd_bytes={z}"));
    }
    Ok(line)
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let sample = load_sample(&args.data)?;
    let win = window(&sample.bytes, args.window)?;
    let level = args.zstd.then_some(args.zstd_level);

    eprintln!("--- analyze ---");
    eprintln!("data            = {}", sample.path);
    eprintln!("crc32           = {:08x}", sample.crc32);
    eprintln!("window          = {}", win.len());

    let file_h = ByteHistogram::from_bytes(&sample.bytes);
    let win_h = ByteHistogram::from_bytes(win);
    println!("{}", scope_line("file", &sample.bytes, &file_h, level)?);
    println!("{}", scope_line("window", win, &win_h, level)?);

    // The window entropy is the search baseline; a candidate can save at most
    // all of it, and a uniform window sits `8 - baseline` bits above it.
    let baseline = win_h.entropy();
    let n = win.len() as f64;
    println!(
        "baseline_entropy={:.6} max_bits_saved={:.3} bits_below_uniform={:.3}",
        baseline,
        baseline * n,
        (8.0 - baseline) * n
    );
    log::debug!(
        "window vs file entropy: {:.6} vs {:.6}",
        baseline,
        file_h.entropy()
    );

    for (b, c) in win_h.top(args.top) {
        println!(
            "byte=0x{:02x} count={} share={:.3}%",
            b,
            c,
            (c as f64) * 100.0 / n
        );
    }

    Ok(())
}
