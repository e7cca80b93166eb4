//! Human-readable report output.
//!
//! Every line carries the `[SIM_ID]` prefix so interleaved container logs
//! stay attributable to their run. Writers are generic over [`io::Write`];
//! the binary uses the stdout wrappers.

use crate::RunSummary;
use std::io::{self, Write};
use std::time::Duration;

/// Write the pre-run preamble: start banner, model line, material echo.
pub fn write_preamble<W: Write>(out: &mut W, sim_id: &str, material: &crate::MaterialProfile) -> io::Result<()> {
    writeln!(out, "[{sim_id}] starting impact analysis...")?;
    writeln!(
        out,
        "[{sim_id}] model: dynamic ram-pressure strength threshold"
    )?;
    writeln!(
        out,
        "[{sim_id}] material: {} | density: {} kg/m3 | strength: {} MPa",
        material.name,
        material.density,
        material.strength / 1e6
    )?;
    Ok(())
}

/// Write the final results block for one completed run.
pub fn write_summary<W: Write>(out: &mut W, summary: &RunSummary, elapsed: Duration) -> io::Result<()> {
    let id = &summary.sim_id;
    writeln!(out, "[{id}] --- RESULTS ---")?;
    writeln!(
        out,
        "[{id}] processed cases: {} in {:.2}s",
        summary.n_simulations,
        elapsed.as_secs_f64()
    )?;
    writeln!(
        out,
        "[{id}] -> atmospheric airbursts (safe): {}",
        summary.stats.airbursts
    )?;
    writeln!(
        out,
        "[{id}] -> ground impacts (crater): {}",
        summary.stats.ground_impacts
    )?;
    writeln!(
        out,
        "[{id}] -> mean impact energy: {:.2} kT TNT",
        summary.stats.mean_energy_kt
    )?;
    writeln!(
        out,
        "[{id}] GROUND IMPACT RISK: {:.2}%",
        summary.stats.risk_percent
    )?;
    Ok(())
}

/// Preamble to stdout.
pub fn print_preamble(sim_id: &str, material: &crate::MaterialProfile) -> io::Result<()> {
    write_preamble(&mut io::stdout().lock(), sim_id, material)
}

/// Results block to stdout.
pub fn print_summary(summary: &RunSummary, elapsed: Duration) -> io::Result<()> {
    write_summary(&mut io::stdout().lock(), summary, elapsed)
}
