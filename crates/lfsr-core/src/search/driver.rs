// crates/lfsr-core/src/search/driver.rs

use std::ops::Range;

use rayon::prelude::*;

use crate::error::{LfsrError, Result};
use crate::keystream::{fill_candidate, RegisterTrace};
use crate::score::{entropy, Compressor};
use crate::search::config::{ScorePolicy, SearchConfig, SeedPolicy};
use crate::search::hooks::{Prune, SearchObserver};
use crate::search::record::{Best, Candidate, Improvement, Score};
use crate::validate::validate_search_config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOutcome {
    /// Entropy of the untouched sample window.
    pub baseline_entropy: f64,
    pub window: usize,
    /// `None` only when every pair was pruned.
    pub best: Option<Best>,
    /// Pairs actually scored.
    pub evaluated: u64,
    /// Record updates. Summed over partitions in the parallel search.
    pub improvements: u64,
}

impl SearchOutcome {
    pub fn best_improvement(&self) -> Option<Improvement> {
        self.best
            .map(|b| Improvement::new(b.candidate, b.score, self.baseline_entropy, self.window))
    }
}

/// Partial result over a slice of the mask range.
#[derive(Clone, Copy, Debug, Default)]
struct Partial {
    best: Option<Best>,
    evaluated: u64,
    improvements: u64,
}

impl Partial {
    fn merge(self, other: Partial) -> Partial {
        let best = match (self.best, other.best) {
            (None, b) => b,
            (a, None) => a,
            (Some(a), Some(b)) => {
                if b.preferred_over(&a) {
                    Some(b)
                } else {
                    Some(a)
                }
            }
        };
        Partial {
            best,
            evaluated: self.evaluated + other.evaluated,
            improvements: self.improvements + other.improvements,
        }
    }
}

/// Loop-local buffers for one thread of the search.
struct Scanner<'a> {
    sample: &'a [u8],
    cfg: &'a SearchConfig,
    baseline: f64,
    buf: Vec<u8>,
    trace: RegisterTrace,
}

impl<'a> Scanner<'a> {
    fn new(sample: &'a [u8], cfg: &'a SearchConfig, baseline: f64) -> Self {
        Self {
            sample,
            cfg,
            baseline,
            buf: vec![0u8; sample.len()],
            trace: RegisterTrace::default(),
        }
    }

    fn scan(
        &mut self,
        masks: Range<u32>,
        mut compressor: Option<&mut dyn Compressor>,
        prune: &dyn Prune,
        observer: &mut dyn SearchObserver,
    ) -> Result<Partial> {
        let cfg = self.cfg;
        let window = self.sample.len();
        let tap_count = cfg.taps.len() as u64;
        let want_candidates = observer.wants_candidates();
        let mut part = Partial::default();

        for i in masks {
            let mask = SearchConfig::mask_for(i);
            if prune.skip_mask(mask) {
                continue;
            }
            if cfg.seed == SeedPolicy::One {
                self.trace.rebuild(1, mask, window);
            }

            for j in cfg.taps.clone() {
                let tap = j as u16;
                if prune.skip_pair(mask, tap) {
                    continue;
                }
                let seed = cfg.seed.seed_for(tap);
                match cfg.seed {
                    SeedPolicy::One => {
                        self.trace
                            .candidate_into(self.sample, tap, cfg.bit_order, &mut self.buf)
                    }
                    SeedPolicy::Tap => {
                        fill_candidate(self.sample, seed, mask, tap, cfg.bit_order, &mut self.buf)
                    }
                }

                let ent = entropy(&self.buf);
                part.evaluated += 1;
                let candidate = Candidate { mask, tap, seed };
                if want_candidates {
                    observer.on_candidate(&candidate, ent);
                }

                let current = part.best.map(|b| b.score);
                if matches!(current, Some(c) if ent > c.entropy) {
                    continue;
                }

                let compressed_len = match cfg.score {
                    ScorePolicy::Entropy => None,
                    ScorePolicy::EntropyThenCompressed => {
                        let c = compressor.as_deref_mut().ok_or_else(|| {
                            LfsrError::Validation(
                                "compression-aware scoring needs a compressor".into(),
                            )
                        })?;
                        Some(c.compressed_len(&self.buf)?)
                    }
                };
                let score = Score {
                    entropy: ent,
                    compressed_len,
                };
                if matches!(current, Some(c) if !score.beats(&c)) {
                    continue;
                }

                let order = (i - cfg.masks.start) as u64 * tap_count + (j - cfg.taps.start) as u64;
                part.best = Some(Best {
                    candidate,
                    score,
                    order,
                });
                part.improvements += 1;
                observer.on_improvement(&Improvement::new(candidate, score, self.baseline, window));
            }

            observer.on_mask_done(mask, part.evaluated);
        }

        Ok(part)
    }
}

fn prepare<'a>(
    sample: &'a [u8],
    cfg: &SearchConfig,
    has_compressor: bool,
) -> Result<(&'a [u8], f64)> {
    validate_search_config(cfg, sample.len())?;
    if cfg.score == ScorePolicy::EntropyThenCompressed && !has_compressor {
        return Err(LfsrError::Validation(
            "compression-aware scoring needs a compressor".into(),
        ));
    }
    let window = &sample[..cfg.window];
    let baseline = entropy(window);
    log::info!(
        "search: window={} masks={:?} taps={:?} seed={:?} score={:?} order={:?} candidates={}",
        cfg.window,
        cfg.masks,
        cfg.taps,
        cfg.seed,
        cfg.score,
        cfg.bit_order,
        cfg.candidates()
    );
    Ok((window, baseline))
}

/// Exhaustive two-level search over `cfg.masks` x `cfg.taps`, single thread.
///
/// The record only moves on a strict improvement, so reported entropies never
/// increase and the final best is no worse than any scored candidate.
pub fn search(
    sample: &[u8],
    cfg: &SearchConfig,
    compressor: Option<&mut dyn Compressor>,
    prune: &dyn Prune,
    observer: &mut dyn SearchObserver,
) -> Result<SearchOutcome> {
    let (window, baseline) = prepare(sample, cfg, compressor.is_some())?;

    let mut scanner = Scanner::new(window, cfg, baseline);
    let part = scanner.scan(cfg.masks.clone(), compressor, prune, observer)?;

    Ok(SearchOutcome {
        baseline_entropy: baseline,
        window: cfg.window,
        best: part.best,
        evaluated: part.evaluated,
        improvements: part.improvements,
    })
}

/// Same enumeration, with the mask range spread over the current rayon pool.
///
/// Each worker owns its buffers, its best record and a compressor from
/// `make_compressor`; partial bests are merged by minimum score and then by
/// enumeration order, so the result matches [`search`]. Per-improvement
/// events are not reported here, only the merged outcome.
pub fn search_parallel<F>(
    sample: &[u8],
    cfg: &SearchConfig,
    make_compressor: F,
    prune: &(dyn Prune + Sync),
) -> Result<SearchOutcome>
where
    F: Fn() -> Option<Box<dyn Compressor + Send>> + Sync + Send,
{
    let has_compressor = cfg.score == ScorePolicy::Entropy || make_compressor().is_some();
    let (window, baseline) = prepare(sample, cfg, has_compressor)?;

    let part = cfg
        .masks
        .clone()
        .into_par_iter()
        .map_init(
            || (Scanner::new(window, cfg, baseline), make_compressor()),
            |(scanner, compressor), i| -> Result<Partial> {
                let c = compressor
                    .as_mut()
                    .map(|c| &mut **c as &mut dyn Compressor);
                let part = scanner.scan(i..i + 1, c, prune, &mut ())?;
                log::debug!(
                    "mask 0x{:04x} done: evaluated={}",
                    SearchConfig::mask_for(i),
                    part.evaluated
                );
                Ok(part)
            },
        )
        .try_reduce(Partial::default, |a, b| Ok(a.merge(b)))?;

    Ok(SearchOutcome {
        baseline_entropy: baseline,
        window: cfg.window,
        best: part.best,
        evaluated: part.evaluated,
        improvements: part.improvements,
    })
}
