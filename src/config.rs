//! Run configuration, sourced from the environment.
//!
//! Three variables drive a run: `SIMULATIONS` (population size), `SIM_ID`
//! (label echoed on every report line), and `MATERIAL_TYPE` (bulk material
//! code, resolved totally with a rock fallback). Parsing lives in pure
//! helpers so unit tests never touch process-global environment state.

use crate::core::Material;
use crate::error::{Error, Result};
use std::env;

/// Default population size when `SIMULATIONS` is unset.
pub const DEFAULT_SIMULATIONS: usize = 100_000;
/// Default run label when `SIM_ID` is unset.
pub const DEFAULT_SIM_ID: &str = "Material-Test";
/// Default material code when `MATERIAL_TYPE` is unset (rock).
pub const DEFAULT_MATERIAL_CODE: i64 = 2;

/// Validated configuration for a single analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub n_simulations: usize,
    pub sim_id: String,
    pub material: Material,
}

impl RunConfig {
    /// Build a configuration, rejecting a zero simulation count.
    pub fn new(n_simulations: usize, sim_id: impl Into<String>, material: Material) -> Result<Self> {
        if n_simulations == 0 {
            return Err(Error::InvalidConfig(
                "SIMULATIONS must be a positive integer".into(),
            ));
        }
        Ok(Self {
            n_simulations,
            sim_id: sim_id.into(),
            material,
        })
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests supply a closure over a map instead
    /// of mutating real environment variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let n_simulations = match lookup("SIMULATIONS") {
            Some(raw) => parse_simulations(&raw)?,
            None => DEFAULT_SIMULATIONS,
        };
        let sim_id = lookup("SIM_ID").unwrap_or_else(|| DEFAULT_SIM_ID.to_string());
        let code = match lookup("MATERIAL_TYPE") {
            Some(raw) => parse_material_code(&raw)?,
            None => DEFAULT_MATERIAL_CODE,
        };
        Self::new(n_simulations, sim_id, Material::from_code(code))
    }
}

/// Parse `SIMULATIONS`: any unparseable or non-positive value is a fault.
fn parse_simulations(raw: &str) -> Result<usize> {
    let n: usize = raw.trim().parse().map_err(|_| {
        Error::InvalidConfig(format!("SIMULATIONS must be a positive integer, got {raw:?}"))
    })?;
    if n == 0 {
        return Err(Error::InvalidConfig(
            "SIMULATIONS must be a positive integer".into(),
        ));
    }
    Ok(n)
}

/// Parse `MATERIAL_TYPE`: non-integer text is a fault, but any integer is
/// accepted (out-of-range codes resolve to rock downstream).
fn parse_material_code(raw: &str) -> Result<i64> {
    raw.trim().parse().map_err(|_| {
        Error::InvalidConfig(format!("MATERIAL_TYPE must be an integer, got {raw:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn defaults_apply_when_unset() -> Result<()> {
        let cfg = RunConfig::from_lookup(lookup_from(&[]))?;
        assert_eq!(cfg.n_simulations, DEFAULT_SIMULATIONS);
        assert_eq!(cfg.sim_id, DEFAULT_SIM_ID);
        assert_eq!(cfg.material, Material::Rock);
        Ok(())
    }

    #[test]
    fn explicit_values_override_defaults() -> Result<()> {
        let cfg = RunConfig::from_lookup(lookup_from(&[
            ("SIMULATIONS", "5000"),
            ("SIM_ID", "batch-7"),
            ("MATERIAL_TYPE", "3"),
        ]))?;
        assert_eq!(cfg.n_simulations, 5000);
        assert_eq!(cfg.sim_id, "batch-7");
        assert_eq!(cfg.material, Material::Iron);
        Ok(())
    }

    #[test]
    fn out_of_range_material_code_falls_back_to_rock() -> Result<()> {
        let cfg = RunConfig::from_lookup(lookup_from(&[("MATERIAL_TYPE", "17")]))?;
        assert_eq!(cfg.material, Material::Rock);
        Ok(())
    }

    #[test]
    fn garbage_material_code_is_a_fault() {
        let err = RunConfig::from_lookup(lookup_from(&[("MATERIAL_TYPE", "granite")]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn zero_or_garbage_simulations_is_a_fault() {
        for raw in ["0", "-5", "many", ""] {
            let err = RunConfig::from_lookup(lookup_from(&[("SIMULATIONS", raw)]))
                .unwrap_err();
            assert!(
                matches!(err, Error::InvalidConfig(_)),
                "SIMULATIONS={raw:?} must be rejected"
            );
        }
    }

    #[test]
    fn constructor_rejects_zero_count() {
        let err = RunConfig::new(0, "x", Material::Rock).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
