// crates/lfsr-core/src/search/record.rs

/// One point of the search space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub mask: u16,
    pub tap: u16,
    pub seed: u16,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Score {
    pub entropy: f64,
    /// Only present under the compression-aware policy.
    pub compressed_len: Option<usize>,
}

impl Score {
    /// Strictly better: lower entropy, or equal entropy and a smaller
    /// compressed size. Equal scores never beat each other.
    pub fn beats(&self, other: &Score) -> bool {
        if self.entropy < other.entropy {
            return true;
        }
        if self.entropy > other.entropy {
            return false;
        }
        match (self.compressed_len, other.compressed_len) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }
}

/// Best-so-far record. `order` is the candidate's position in the
/// enumeration, used to keep the earliest of equal scores.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Best {
    pub candidate: Candidate,
    pub score: Score,
    pub order: u64,
}

impl Best {
    /// True when `self` should replace `other` in a merge of independent
    /// partial results.
    pub fn preferred_over(&self, other: &Best) -> bool {
        self.score.beats(&other.score)
            || (!other.score.beats(&self.score) && self.order < other.order)
    }
}

/// What gets reported each time the record improves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Improvement {
    pub candidate: Candidate,
    pub entropy: f64,
    /// `(baseline - entropy) * window`: rough bits saved over the window.
    pub bits_saved: f64,
    /// `compressed_len - window`, under the compression-aware policy.
    pub compressed_delta: Option<i64>,
}

impl Improvement {
    pub fn new(candidate: Candidate, score: Score, baseline: f64, window: usize) -> Self {
        Self {
            candidate,
            entropy: score.entropy,
            bits_saved: (baseline - score.entropy) * window as f64,
            compressed_delta: score.compressed_len.map(|c| c as i64 - window as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(entropy: f64, c: Option<usize>) -> Score {
        Score {
            entropy,
            compressed_len: c,
        }
    }

    #[test]
    fn strict_ordering() {
        assert!(s(7.0, None).beats(&s(7.5, None)));
        assert!(!s(7.5, None).beats(&s(7.5, None)));
        assert!(!s(7.6, Some(1)).beats(&s(7.5, Some(900))));
        assert!(s(7.5, Some(10)).beats(&s(7.5, Some(11))));
        assert!(!s(7.5, Some(11)).beats(&s(7.5, Some(11))));
    }

    #[test]
    fn merge_keeps_earliest_on_tie() {
        let c = Candidate {
            mask: 0x8000,
            tap: 1,
            seed: 1,
        };
        let a = Best {
            candidate: c,
            score: s(7.0, None),
            order: 3,
        };
        let b = Best { order: 9, ..a };
        assert!(a.preferred_over(&b));
        assert!(!b.preferred_over(&a));
    }

    #[test]
    fn improvement_deltas() {
        let c = Candidate {
            mask: 0x8001,
            tap: 0,
            seed: 1,
        };
        let imp = Improvement::new(c, s(7.5, Some(1000)), 8.0, 1024);
        assert_eq!(imp.bits_saved, 512.0);
        assert_eq!(imp.compressed_delta, Some(-24));
    }
}
