//! Console entry point: environment configuration in, textual report out.
//!
//! Exit codes: 0 on a completed run, 2 on invalid configuration, 1 on any
//! other fault.

use entrysim::{report, Error, RunConfig};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let config = match RunConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            return ExitCode::from(2);
        }
    };

    if let Err(e) = execute(&config) {
        eprintln!("[{}] analysis failed: {e}", config.sim_id);
        return match e {
            Error::InvalidConfig(_) => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        };
    }
    ExitCode::SUCCESS
}

fn execute(config: &RunConfig) -> entrysim::Result<()> {
    report::print_preamble(&config.sim_id, &config.material.profile())?;

    // Elapsed time brackets sampling + classification only.
    let start = Instant::now();
    let summary = entrysim::run(config, None)?;
    let elapsed = start.elapsed();

    report::print_summary(&summary, elapsed)?;
    Ok(())
}
