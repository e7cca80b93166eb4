//! Physical outcome model: ram-pressure fragmentation and aggregate
//! statistics.
//!
//! Each sampled body either fragments in flight (airburst) or reaches the
//! ground, decided by comparing the dynamic pressure on its leading face
//! against the bulk material strength. The comparison is a strict
//! greater-than: a body loaded exactly at its strength holds together and
//! counts as a ground impact.

use crate::core::material::MaterialProfile;
use crate::core::sample::SampleBatch;
use crate::error::{Error, Result};
use std::f64::consts::PI;

/// Surface-proxy air density (kg/m^3) used for the ram-pressure estimate.
/// Fixed by the model, not configurable.
pub const AIR_DENSITY: f64 = 1.0;

/// Joules per kiloton of TNT equivalent.
pub const JOULES_PER_KILOTON: f64 = 4.184e12;

/// Aggregate outcome statistics for one classified population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactStats {
    /// Bodies that fragmented before ground contact.
    pub airbursts: usize,
    /// Bodies that survived entry intact.
    pub ground_impacts: usize,
    /// Mean kinetic energy over the whole population (kT TNT), not
    /// conditioned on outcome.
    pub mean_energy_kt: f64,
    /// Ground impacts as a percentage of the population.
    pub risk_percent: f64,
}

/// Dynamic (ram) pressure on the leading face, Pa.
pub fn ram_pressure(velocity_ms: f64) -> f64 {
    AIR_DENSITY * velocity_ms * velocity_ms
}

/// Solid-sphere mass, kg.
pub fn body_mass(diameter_m: f64, density: f64) -> f64 {
    let radius = diameter_m / 2.0;
    (4.0 / 3.0) * PI * radius.powi(3) * density
}

/// Kinetic energy in kilotons of TNT equivalent.
pub fn kinetic_energy_kt(mass_kg: f64, velocity_ms: f64) -> f64 {
    0.5 * mass_kg * velocity_ms * velocity_ms / JOULES_PER_KILOTON
}

/// Classify every body in `batch` against `material` and aggregate.
///
/// Fails with [`Error::EmptyBatch`] before touching the mean or the risk
/// percentage, so an empty population can never surface as NaN.
pub fn classify(batch: &SampleBatch, material: &MaterialProfile) -> Result<ImpactStats> {
    let n = batch.len();
    if n == 0 {
        return Err(Error::EmptyBatch);
    }

    let mut airbursts = 0usize;
    let mut energy_sum_kt = 0.0_f64;
    for (&d, &v) in batch.diameters_m().iter().zip(batch.velocities_ms()) {
        if ram_pressure(v) > material.strength {
            airbursts += 1;
        }
        energy_sum_kt += kinetic_energy_kt(body_mass(d, material.density), v);
    }

    let ground_impacts = n - airbursts;
    Ok(ImpactStats {
        airbursts,
        ground_impacts,
        mean_energy_kt: energy_sum_kt / n as f64,
        risk_percent: 100.0 * ground_impacts as f64 / n as f64,
    })
}
