//! Random population generation for one analysis run.
//!
//! Diameters and velocities are drawn from fixed normal distributions and
//! stored as parallel columns. Diameters are floored at 1.0 m by truncation
//! (not resampling), which biases the left tail of the distribution; this is
//! documented behavior. Velocities carry no such floor, an asymmetry kept
//! deliberately: pressure and energy depend on v^2, so a rare negative draw
//! classifies like any other sample.

use crate::error::{Error, Result};
use rand::{rng, rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Diameter distribution: mean 50 m, sigma 10 m.
pub const DIAMETER_MEAN_M: f64 = 50.0;
pub const DIAMETER_SIGMA_M: f64 = 10.0;
/// Hard floor applied to sampled diameters (meters).
pub const DIAMETER_FLOOR_M: f64 = 1.0;
/// Velocity distribution: mean 18 km/s, sigma 3 km/s.
pub const VELOCITY_MEAN_KMS: f64 = 18.0;
pub const VELOCITY_SIGMA_KMS: f64 = 3.0;

/// One sampled population: parallel diameter and velocity columns.
///
/// Index `i` denotes the same hypothetical body in both columns and in every
/// sequence derived from them.
#[derive(Debug, Clone)]
pub struct SampleBatch {
    diameter_m: Vec<f64>,
    velocity_ms: Vec<f64>,
}

impl SampleBatch {
    /// Build a batch from pre-computed columns.
    ///
    /// Columns must be the same length and contain only finite values.
    /// An empty pair of columns is accepted here (the classifier rejects it
    /// with [`Error::EmptyBatch`]); mismatched or non-finite columns are not.
    pub fn new(diameter_m: Vec<f64>, velocity_ms: Vec<f64>) -> Result<Self> {
        if diameter_m.len() != velocity_ms.len() {
            return Err(Error::InvalidConfig(format!(
                "batch columns must be parallel: {} diameters vs {} velocities",
                diameter_m.len(),
                velocity_ms.len()
            )));
        }
        if !diameter_m.iter().all(|d| d.is_finite()) {
            return Err(Error::InvalidConfig(
                "diameter column contains non-finite values".into(),
            ));
        }
        if !velocity_ms.iter().all(|v| v.is_finite()) {
            return Err(Error::InvalidConfig(
                "velocity column contains non-finite values".into(),
            ));
        }
        Ok(Self {
            diameter_m,
            velocity_ms,
        })
    }

    /// Sample a population of `n` bodies.
    ///
    /// `seed` controls reproducibility: `Some(s)` yields a bit-identical
    /// batch on every call, `None` seeds from process entropy.
    pub fn generate(n: usize, seed: Option<u64>) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidConfig(
                "simulation count must be > 0".into(),
            ));
        }

        let mut rng: StdRng = match seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rng().random()),
        };

        let diameter_dist = Normal::new(DIAMETER_MEAN_M, DIAMETER_SIGMA_M)?;
        let velocity_dist = Normal::new(VELOCITY_MEAN_KMS, VELOCITY_SIGMA_KMS)?;

        let diameter_m: Vec<f64> = (0..n)
            .map(|_| diameter_dist.sample(&mut rng).max(DIAMETER_FLOOR_M))
            .collect();
        // km/s draw converted to m/s; no floor on velocity (see module docs).
        let velocity_ms: Vec<f64> = (0..n)
            .map(|_| velocity_dist.sample(&mut rng) * 1000.0)
            .collect();

        Ok(Self {
            diameter_m,
            velocity_ms,
        })
    }

    /// Number of sampled bodies.
    pub fn len(&self) -> usize {
        self.diameter_m.len()
    }

    /// True when the batch holds no samples.
    pub fn is_empty(&self) -> bool {
        self.diameter_m.is_empty()
    }

    /// Diameter column (meters).
    pub fn diameters_m(&self) -> &[f64] {
        &self.diameter_m
    }

    /// Velocity column (meters/second).
    pub fn velocities_ms(&self) -> &[f64] {
        &self.velocity_ms
    }
}
