// crates/lfsr-cli/src/io/sample_file.rs

use anyhow::Context;

/// Reference sample as read from disk. Read once, never modified.
#[derive(Clone, Debug)]
pub struct LoadedSample {
    pub path: String,
    pub bytes: Vec<u8>,
    /// crc32 of the whole file; printed so runs can be matched to inputs.
    pub crc32: u32,
}

pub fn load_sample(path: &str) -> anyhow::Result<LoadedSample> {
    let bytes = std::fs::read(path).with_context(|| format!("read sample: {path}"))?;
    let crc32 = crc32fast::hash(&bytes);
    log::debug!("loaded {} bytes from {path} crc32={crc32:08x}", bytes.len());
    Ok(LoadedSample {
        path: path.to_string(),
        bytes,
        crc32,
    })
}

/// Write `bytes`, creating the parent directory when needed.
pub fn write_bytes(path: &str, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(dir) = std::path::Path::new(path).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).with_context(|| format!("create dir: {}", dir.display()))?;
        }
    }
    std::fs::write(path, bytes).with_context(|| format!("write bytes: {path}"))?;
    Ok(())
}
