//! Random dataset generation
//!
//! Coordinates are drawn uniformly over the nominal Lab gamut and rounded to
//! 0, 1 or 2 decimals so that every dataset mixes integers, short decimals
//! and full-precision values.

use std::io::Write;
use std::ops::RangeInclusive;
use std::path::Path;

use ciede2000_core::Lab;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::dataset::{DatasetWriter, TestRecord};
use crate::error::Result;
use crate::evaluator::DeltaE;
use crate::progress::Progress;

/// Records generated when no valid count is given
pub const DEFAULT_COUNT: usize = 10_000;

/// Range of sampled lightness
pub const L_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Range of sampled a* and b*
pub const AB_RANGE: RangeInclusive<f64> = -128.0..=128.0;

/// Largest number of decimals kept on a sampled coordinate
pub const MAX_DECIMALS: u32 = 2;

/// Round `value` to `decimals` digits after the point
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Deterministic RNG for `seed`, or one seeded from OS entropy
pub fn rng_from_seed(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Draws Lab colors with varying precision
pub struct Sampler<R: Rng> {
    rng: R,
}

impl<R: Rng> Sampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn coordinate(&mut self, range: RangeInclusive<f64>) -> f64 {
        let value = self.rng.gen_range(range);
        let decimals = self.rng.gen_range(0..=MAX_DECIMALS);
        round_to(value, decimals)
    }

    pub fn lab(&mut self) -> Lab {
        let l = self.coordinate(L_RANGE);
        let a = self.coordinate(AB_RANGE);
        let b = self.coordinate(AB_RANGE);
        Lab::new(l, a, b)
    }

    /// Sample a pair and record the evaluator's ΔE2000 for it
    pub fn record<E: DeltaE + ?Sized>(&mut self, evaluator: &E) -> TestRecord {
        let source = self.lab();
        let target = self.lab();
        TestRecord::new(source, target, evaluator.delta_e(source, target))
    }
}

/// Write `count` sampled records to `writer`
pub fn generate<W, R, E, P>(
    writer: W,
    rng: R,
    count: usize,
    evaluator: &E,
    progress: &mut P,
) -> Result<W>
where
    W: Write,
    R: Rng,
    E: DeltaE + ?Sized,
    P: Progress + ?Sized,
{
    let mut sampler = Sampler::new(rng);
    let mut writer = DatasetWriter::new(writer);

    for i in 0..count {
        writer.write(&sampler.record(evaluator))?;
        progress.tick(i + 1);
    }
    progress.finish(count);

    writer.finish()
}

/// Generate a dataset file at `path`
pub fn generate_file<E, P>(
    path: impl AsRef<Path>,
    count: usize,
    seed: Option<u64>,
    evaluator: &E,
    progress: &mut P,
) -> Result<()>
where
    E: DeltaE + ?Sized,
    P: Progress + ?Sized,
{
    let path = path.as_ref();
    tracing::info!(path = %path.display(), count, ?seed, "generating dataset");

    let file = std::fs::File::create(path)?;
    let mut out = generate(
        std::io::BufWriter::new(file),
        rng_from_seed(seed),
        count,
        evaluator,
        progress,
    )?;
    out.flush()?;

    tracing::info!(path = %path.display(), count, "dataset written");
    Ok(())
}
