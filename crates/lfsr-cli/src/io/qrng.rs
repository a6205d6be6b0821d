// crates/lfsr-cli/src/io/qrng.rs

use std::io::Read;

use anyhow::Context;
use lfsr_core::sample::BitCollector;

/// Block endpoint of the ANU quantum random number service; answers with a
/// body of ASCII '0'/'1' characters.
pub const DEFAULT_QRNG_URL: &str =
    "https://qrng.anu.edu.au/wp-content/plugins/colours-plugin/get_block_binary.php";

pub fn fetch_block(url: &str) -> anyhow::Result<Vec<u8>> {
    let resp = ureq::get(url)
        .call()
        .with_context(|| format!("GET {url}"))?;
    let mut body = Vec::new();
    resp.into_reader()
        .read_to_end(&mut body)
        .with_context(|| format!("read body: {url}"))?;
    Ok(body)
}

/// Request blocks until at least `min_bits` characters are collected.
pub fn collect_bits(url: &str, min_bits: usize) -> anyhow::Result<BitCollector> {
    let mut bits = BitCollector::new();
    while !bits.has_at_least(min_bits) {
        let body = fetch_block(url)?;
        if body.is_empty() {
            anyhow::bail!("empty response from {url}");
        }
        bits.push(&body);
        log::info!("collected {} / {} bits", bits.bits(), min_bits);
    }
    Ok(bits)
}
