// crates/lfsr-cli/src/cmd/fetch.rs

use clap::Args;
use lfsr_core::sample::DEFAULT_MIN_BITS;

use crate::io::qrng::{collect_bits, DEFAULT_QRNG_URL};
use crate::io::sample_file::write_bytes;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Packed output file
    #[arg(long, default_value = "data/quantum.bin")]
    pub out: String,

    /// Bit service endpoint (returns ASCII '0'/'1')
    #[arg(long, default_value = DEFAULT_QRNG_URL)]
    pub url: String,

    /// Stop requesting once this many bits are collected
    #[arg(long, default_value_t = DEFAULT_MIN_BITS)]
    pub min_bits: usize,
}

pub fn run(args: FetchArgs) -> anyhow::Result<()> {
    if args.min_bits == 0 {
        anyhow::bail!("--min-bits must be non-zero");
    }

    let bits = collect_bits(&args.url, args.min_bits)?;
    let collected = bits.bits();
    let packed = bits.finish();
    write_bytes(&args.out, &packed)?;

    eprintln!("--- fetch ---");
    eprintln!("url             = {}", args.url);
    eprintln!("bits            = {}", collected);
    eprintln!("bytes           = {}", packed.len());
    eprintln!("crc32           = {:08x}", crc32fast::hash(&packed));
    eprintln!("out             = {}", args.out);
    Ok(())
}
