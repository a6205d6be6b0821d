// crates/lfsr-cli/src/cmd/search.rs

use clap::Args;
use lfsr_core::score::Compressor;
use lfsr_core::search::{Improvement, NoPrune, SearchObserver};
use lfsr_core::{search, search_parallel, ScorePolicy, SearchConfig, SearchOutcome};

use crate::cmd::args::{parse_bound, OrderArg, ScoreArg, SeedArg, DEFAULT_DATA};
use crate::io::sample_file::load_sample;
use crate::io::zstd_size::ZstdSize;

use std::time::Instant;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Reference sample file
    #[arg(long, default_value = DEFAULT_DATA)]
    pub data: String,

    /// Bytes of the sample to analyze (from its start)
    #[arg(long, default_value_t = 1024)]
    pub window: usize,

    /// Initial register state policy
    #[arg(long, value_enum, default_value_t = SeedArg::One)]
    pub seed: SeedArg,

    /// Ranking policy
    #[arg(long, value_enum, default_value_t = ScoreArg::Entropy)]
    pub score: ScoreArg,

    /// Bit placement inside each keystream byte
    #[arg(long, value_enum, default_value_t = OrderArg::Msb)]
    pub bit_order: OrderArg,

    /// First mask index (mask = 0x8000 | index)
    #[arg(long, default_value = "0", value_parser = parse_bound)]
    pub mask_start: u32,

    /// Mask index end (exclusive)
    #[arg(long, default_value = "65536", value_parser = parse_bound)]
    pub mask_end: u32,

    /// First tap selector
    #[arg(long, default_value = "0", value_parser = parse_bound)]
    pub tap_start: u32,

    /// Tap selector end (exclusive)
    #[arg(long, default_value = "65536", value_parser = parse_bound)]
    pub tap_end: u32,

    /// Zstd level for --score entropy-zstd
    #[arg(long, default_value_t = 3)]
    pub zstd_level: i32,

    /// Worker threads. 1 runs the sequential search and reports every
    /// improvement; more split the mask range and report only the final best.
    #[arg(long, default_value_t = 1)]
    pub threads: usize,

    /// Log progress every N masks (sequential search only)
    #[arg(long, default_value_t = 256)]
    pub progress_every: u32,
}

/// Prints each improvement as it happens and logs progress.
struct Printer {
    started: Instant,
    progress_every: u32,
    masks_done: u32,
}

impl SearchObserver for Printer {
    fn on_improvement(&mut self, imp: &Improvement) {
        println!("{}", improvement_line(imp));
    }

    fn on_mask_done(&mut self, mask: u16, evaluated: u64) {
        self.masks_done += 1;
        if self.progress_every > 0 && self.masks_done % self.progress_every == 0 {
            let secs = self.started.elapsed().as_secs_f64();
            log::info!(
                "progress: masks={} last=0x{:04x} evaluated={} elapsed={:.1}s",
                self.masks_done,
                mask,
                evaluated,
                secs
            );
        }
    }
}

fn improvement_line(imp: &Improvement) -> String {
    let mut s = format!(
        "entropy={:.6} bits_saved={:.3} mask=0x{:04x} tap=0x{:04x} seed=0x{:04x}",
        imp.entropy, imp.bits_saved, imp.candidate.mask, imp.candidate.tap, imp.candidate.seed
    );
    if let Some(d) = imp.compressed_delta {
        s.push_str(&format!(" zstd_delta={d}"));
    }
    s
}

pub fn run(args: SearchArgs) -> anyhow::Result<()> {
    if args.threads == 0 {
        anyhow::bail!("--threads must be at least 1");
    }

    let sample = load_sample(&args.data)?;
    let cfg = SearchConfig {
        window: args.window,
        seed: args.seed.into(),
        score: args.score.into(),
        bit_order: args.bit_order.into(),
        masks: args.mask_start..args.mask_end,
        taps: args.tap_start..args.tap_end,
    };
    lfsr_core::validate::validate_search_config(&cfg, sample.bytes.len())?;

    eprintln!("--- search ---");
    eprintln!("data            = {}", sample.path);
    eprintln!("bytes           = {}", sample.bytes.len());
    eprintln!("crc32           = {:08x}", sample.crc32);
    eprintln!("window          = {}", cfg.window);
    eprintln!("seed            = {:?}", cfg.seed);
    eprintln!("score           = {:?}", cfg.score);
    eprintln!("bit_order       = {:?}", cfg.bit_order);
    eprintln!("masks           = {:?}", cfg.masks);
    eprintln!("taps            = {:?}", cfg.taps);
    eprintln!("candidates      = {}", cfg.candidates());

    let t0 = Instant::now();
    let outcome = if args.threads == 1 {
        let mut zstd = ZstdSize::new(args.zstd_level);
        let compressor: Option<&mut dyn Compressor> = match cfg.score {
            ScorePolicy::Entropy => None,
            ScorePolicy::EntropyThenCompressed => Some(&mut zstd as &mut dyn Compressor),
        };
        let mut printer = Printer {
            started: t0,
            progress_every: args.progress_every,
            masks_done: 0,
        };
        println!(
            "baseline_entropy={:.6}",
            lfsr_core::score::entropy(&sample.bytes[..cfg.window])
        );
        search(&sample.bytes, &cfg, compressor, &NoPrune, &mut printer)?
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build()?;
        let level = args.zstd_level;
        let score = cfg.score;
        let outcome = pool.install(|| {
            search_parallel(
                &sample.bytes,
                &cfg,
                || match score {
                    ScorePolicy::Entropy => None,
                    ScorePolicy::EntropyThenCompressed => {
                        Some(Box::new(ZstdSize::new(level)) as Box<dyn Compressor + Send>)
                    }
                },
                &NoPrune,
            )
        })?;
        println!("baseline_entropy={:.6}", outcome.baseline_entropy);
        outcome
    };

    report_best(&outcome, t0);
    Ok(())
}

fn report_best(outcome: &SearchOutcome, t0: Instant) {
    let secs = t0.elapsed().as_secs_f64();
    match outcome.best_improvement() {
        Some(imp) => println!("best {}", improvement_line(&imp)),
        None => println!("best none"),
    }
    eprintln!(
        "search ok: evaluated={} improvements={} elapsed={:.3}s",
        outcome.evaluated, outcome.improvements, secs
    );
}
