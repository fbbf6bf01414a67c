//! Sweep execution: one rayon task per swept value.
//!
//! The plan is validated before anything runs. Results come back in the
//! order of the swept values, and every run's seed is derived from the plan
//! seed, so a sweep is reproducible end to end.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use sim_core::scenario::ScenarioParams;
use sim_core::simulation::Simulation;

use crate::metrics::{RunMetrics, SweepPointResult};
use crate::parameters::{SweepError, SweepPlan};

/// Runs one simulation to its step budget and extracts metrics.
pub fn run_single_simulation(
    params: ScenarioParams,
    iterations: u64,
) -> Result<RunMetrics, SweepError> {
    let mut sim = Simulation::new(params)?;
    Ok(RunMetrics::from(sim.run(iterations)))
}

/// Runs the whole sweep with a progress bar.
pub fn run_sweep(plan: &SweepPlan) -> Result<Vec<SweepPointResult>, SweepError> {
    run_sweep_with_progress(plan, true)
}

/// Runs the whole sweep, optionally showing progress. Each swept value is an
/// independent rayon task; repetitions within a value run sequentially and
/// are averaged into one [`SweepPointResult`].
pub fn run_sweep_with_progress(
    plan: &SweepPlan,
    show_progress: bool,
) -> Result<Vec<SweepPointResult>, SweepError> {
    plan.validate()?;

    let total_runs = plan.values.len() as u64 * plan.repetitions.max(1) as u64;
    let bar = if show_progress {
        let bar = ProgressBar::new(total_runs);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .expect("valid progress template")
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    let results: Result<Vec<SweepPointResult>, SweepError> = plan
        .values
        .par_iter()
        .enumerate()
        .map(|(value_index, &value)| {
            let mut runs = Vec::with_capacity(plan.repetitions.max(1) as usize);
            for repetition in 0..plan.repetitions.max(1) {
                let params = plan.scenario_for(value, value_index, repetition);
                runs.push(run_single_simulation(params, plan.iterations)?);
                if let Some(ref bar) = bar {
                    bar.inc(1);
                }
            }
            Ok(SweepPointResult::aggregate(value, &runs))
        })
        .collect();

    if let Some(ref bar) = bar {
        bar.finish_and_clear();
    }
    results
}
