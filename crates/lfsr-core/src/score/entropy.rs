// crates/lfsr-core/src/score/entropy.rs

/// 256-bucket byte frequency table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteHistogram {
    counts: [u64; 256],
    total: u64,
}

impl Default for ByteHistogram {
    fn default() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }
}

impl ByteHistogram {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut h = Self::default();
        h.observe(bytes);
        h
    }

    pub fn observe(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.counts[b as usize] += 1;
        }
        self.total += bytes.len() as u64;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// (min, max) bucket counts; (0, 0) when empty.
    pub fn min_max(&self) -> (u64, u64) {
        if self.total == 0 {
            return (0, 0);
        }
        let min = self.counts.iter().copied().min().unwrap_or(0);
        let max = self.counts.iter().copied().max().unwrap_or(0);
        (min, max)
    }

    /// Shannon entropy in bits per byte. Empty buckets are skipped; an empty
    /// histogram has entropy 0.0.
    pub fn entropy(&self) -> f64 {
        entropy_of_counts(&self.counts, self.total)
    }

    /// Most frequent bytes first, ties by byte value.
    pub fn top(&self, n: usize) -> Vec<(u8, u64)> {
        let mut rows: Vec<(u8, u64)> = (0u8..=255u8)
            .map(|b| (b, self.counts[b as usize]))
            .filter(|&(_b, c)| c > 0)
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        rows.truncate(n);
        rows
    }
}

/// Shannon entropy of `bytes` in bits per symbol, in [0, 8]. Empty input
/// yields 0.0.
pub fn entropy(bytes: &[u8]) -> f64 {
    let mut counts = [0u32; 256];
    for &b in bytes {
        counts[b as usize] += 1;
    }
    entropy_of_counts(&counts, bytes.len() as u64)
}

/// `-sum p log2 p` over the non-zero buckets; 0.0 when `total` is 0.
#[inline]
fn entropy_of_counts<C: Copy + Into<u64>>(counts: &[C; 256], total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    let mut ent = 0.0;
    for &c in counts.iter() {
        let c: u64 = c.into();
        if c == 0 {
            continue;
        }
        let p = (c as f64) / n;
        ent -= p * p.log2();
    }
    ent
}
