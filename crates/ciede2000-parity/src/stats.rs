//! Dataset statistics
//!
//! Summaries of the stored ΔE2000 values plus the character histogram of the
//! record text, which shows at a glance whether a dataset exercises the full
//! digit alphabet, signs and decimal points.
//!
//! Memory stays bounded on datasets of any length: mean and max are running
//! values and p95 comes from a uniform reservoir of [`P95_SAMPLE`] values,
//! exact for datasets up to that size.

use std::collections::BTreeMap;

use csv::StringRecord;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Finite deltaE values kept for the p95 estimate
pub const P95_SAMPLE: usize = 100_000;

/// Statistics over the expected values of a dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetStats {
    /// Number of records
    pub count: usize,
    /// Mean deltaE across finite values
    pub mean: f64,
    /// Maximum finite deltaE
    pub max: f64,
    /// 95th percentile deltaE, estimated past [`P95_SAMPLE`] records
    pub p95: f64,
    /// Records whose stored deltaE is not finite
    pub non_finite: usize,
    /// Occurrences of every character of the record text
    pub charset: BTreeMap<char, u64>,
}

impl DatasetStats {
    /// Check if the stored differences cover more than near-identical pairs
    pub fn has_spread(&self) -> bool {
        self.count > 0 && self.max > 1.0
    }
}

/// Accumulates [`DatasetStats`] one record at a time
#[derive(Debug)]
pub struct StatsBuilder {
    count: usize,
    finite: usize,
    sum: f64,
    max: f64,
    sample: Vec<f64>,
    capacity: usize,
    rng: ChaCha8Rng,
    charset: BTreeMap<char, u64>,
}

impl Default for StatsBuilder {
    fn default() -> Self {
        Self::with_capacity(P95_SAMPLE)
    }
}

impl StatsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder keeping at most `capacity` values for the p95 estimate
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            count: 0,
            finite: 0,
            sum: 0.0,
            max: 0.0,
            sample: Vec::new(),
            capacity: capacity.max(1),
            rng: ChaCha8Rng::seed_from_u64(0),
            charset: BTreeMap::new(),
        }
    }

    /// Add one row as read from the file and its parsed deltaE
    pub fn push(&mut self, row: &StringRecord, delta_e: f64) {
        self.count += 1;
        if delta_e.is_finite() {
            self.push_finite(delta_e);
        }

        for field in row.iter() {
            for c in field.chars() {
                *self.charset.entry(c).or_default() += 1;
            }
        }
        if !row.is_empty() {
            *self.charset.entry(',').or_default() += row.len() as u64 - 1;
        }
        *self.charset.entry('\n').or_default() += 1;
    }

    fn push_finite(&mut self, delta_e: f64) {
        self.finite += 1;
        self.sum += delta_e;
        if self.finite == 1 || delta_e > self.max {
            self.max = delta_e;
        }

        // Reservoir sampling: the n-th value replaces a slot with chance capacity/n
        if self.sample.len() < self.capacity {
            self.sample.push(delta_e);
        } else {
            let slot = self.rng.gen_range(0..self.finite);
            if slot < self.capacity {
                self.sample[slot] = delta_e;
            }
        }
    }

    pub fn finish(mut self) -> DatasetStats {
        self.sample.sort_by(f64::total_cmp);

        let mean = if self.finite == 0 {
            0.0
        } else {
            self.sum / self.finite as f64
        };
        let kept = self.sample.len();
        let p95_idx = (kept as f64 * 0.95) as usize;
        let p95 = self
            .sample
            .get(p95_idx.min(kept.saturating_sub(1)))
            .copied()
            .unwrap_or(0.0);

        DatasetStats {
            count: self.count,
            mean,
            max: self.max,
            p95,
            non_finite: self.count - self.finite,
            charset: self.charset,
        }
    }
}
