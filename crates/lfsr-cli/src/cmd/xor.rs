// crates/lfsr-cli/src/cmd/xor.rs

use clap::Args;
use lfsr_core::keystream::{fill_keystream, xor_into};
use lfsr_core::sample::window;
use lfsr_core::score::entropy;
use lfsr_core::search::config::MASK_MSB;
use lfsr_core::{BitOrder, SeedPolicy};

use crate::cmd::args::{parse_u16, OrderArg, SeedArg, DEFAULT_DATA};
use crate::io::sample_file::{load_sample, write_bytes};

#[derive(Args, Debug)]
pub struct XorArgs {
    /// Input sample
    #[arg(long, default_value = DEFAULT_DATA)]
    pub data: String,

    /// Output file (input window XOR keystream)
    #[arg(long)]
    pub out: String,

    /// Feedback mask (top bit must be set), decimal or 0x hex
    #[arg(long, value_parser = parse_u16)]
    pub mask: u16,

    /// Tap selector, decimal or 0x hex
    #[arg(long, value_parser = parse_u16)]
    pub tap: u16,

    /// Initial register state policy
    #[arg(long, value_enum, default_value_t = SeedArg::One)]
    pub seed: SeedArg,

    /// Bit placement inside each keystream byte
    #[arg(long, value_enum, default_value_t = OrderArg::Msb)]
    pub bit_order: OrderArg,

    /// Bytes to transform. Whole file if omitted.
    #[arg(long)]
    pub window: Option<usize>,
}

pub fn run(args: XorArgs) -> anyhow::Result<()> {
    if args.mask & MASK_MSB == 0 {
        anyhow::bail!("--mask 0x{:04x} must have its top bit set", args.mask);
    }

    let sample = load_sample(&args.data)?;
    let input = match args.window {
        Some(n) => window(&sample.bytes, n)?,
        None => &sample.bytes[..],
    };

    let policy: SeedPolicy = args.seed.into();
    let order: BitOrder = args.bit_order.into();
    let seed = policy.seed_for(args.tap);

    let mut keystream = vec![0u8; input.len()];
    let end_state = fill_keystream(seed, args.mask, args.tap, order, &mut keystream);
    let mut out = vec![0u8; input.len()];
    xor_into(input, &keystream, &mut out)?;
    write_bytes(&args.out, &out)?;

    eprintln!("--- xor ---");
    eprintln!("mask            = 0x{:04x}", args.mask);
    eprintln!("tap             = 0x{:04x}", args.tap);
    eprintln!("seed            = 0x{:04x}", seed);
    eprintln!("bit_order       = {:?}", order);
    eprintln!("bytes           = {}", out.len());
    eprintln!("end_state       = 0x{:04x}", end_state);
    println!("entropy_in={:.6}", entropy(input));
    println!("entropy_out={:.6}", entropy(&out));
    Ok(())
}
