// crates/lfsr-cli/src/cmd/histogram.rs

use clap::Args;
use lfsr_core::cycle::CycleHistogram;

use crate::io::plot::save_histogram;

#[derive(Args, Debug)]
pub struct HistogramArgs {
    /// Output PNG path
    #[arg(long, default_value = "histogram.png")]
    pub out: String,
}

pub fn run(args: HistogramArgs) -> anyhow::Result<()> {
    let h = CycleHistogram::walk_all()?;

    for c in &h.cycles {
        println!(
            "mask=0x{:02x} period={} steps={}",
            c.mask,
            c.period,
            c.steps_before_return()
        );
    }

    save_histogram(&args.out, h.visits())?;

    for (state, count) in h.sorted_buckets() {
        println!("state=0x{:02x} count={}", state, count);
    }

    eprintln!("--- histogram ---");
    eprintln!("masks           = {}", h.cycles.len());
    eprintln!("maximal_masks   = {}", h.maximal_masks().count());
    eprintln!("total_visits    = {}", h.total_visits());
    eprintln!("plot            = {}", args.out);
    Ok(())
}
