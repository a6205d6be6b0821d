use crate::error::{LfsrError, Result};
use crate::search::config::{SearchConfig, FULL_RANGE_END};

pub fn validate_search_config(cfg: &SearchConfig, sample_len: usize) -> Result<()> {
    if cfg.window == 0 {
        return Err(LfsrError::Validation("window must be non-zero".into()));
    }
    if sample_len < cfg.window {
        return Err(LfsrError::Validation(format!(
            "sample too short: need {} bytes, got {}",
            cfg.window, sample_len
        )));
    }

    for (name, r) in [("mask", &cfg.masks), ("tap", &cfg.taps)] {
        if r.start >= r.end {
            return Err(LfsrError::Validation(format!(
                "{name} range is empty: {}..{}",
                r.start, r.end
            )));
        }
        if r.end > FULL_RANGE_END {
            return Err(LfsrError::Validation(format!(
                "{name} range end {} exceeds {}",
                r.end, FULL_RANGE_END
            )));
        }
    }

    Ok(())
}
