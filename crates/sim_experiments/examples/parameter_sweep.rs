//! Example: sweep fleet size and export the aggregate statistics.
//!
//! Runs the market at several fleet sizes, prints the mean wait/ride times
//! and dropped-rider counts per size, and writes the results to CSV.

use sim_core::scenario::ScenarioParams;
use sim_experiments::{export_to_csv, run_sweep, SweepPlan, SweepVariable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base = ScenarioParams::default()
        .with_dimensions(70, 30)
        .with_rider_spawn_prob(0.3);

    let plan = SweepPlan::new(
        SweepVariable::DriverCount,
        vec![2.0, 5.0, 10.0, 20.0, 40.0],
    )
    .with_base(base)
    .with_iterations(500)
    .with_repetitions(3)
    .with_seed(42);

    println!("Sweeping fleet size over {} values...", plan.values.len());
    let results = run_sweep(&plan)?;

    println!("{:>8} {:>10} {:>10} {:>10}", "drivers", "wait", "ride", "dropped");
    for point in &results {
        let fmt = |value: Option<f64>| {
            value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
        };
        println!(
            "{:>8} {:>10} {:>10} {:>10.2}",
            point.swept_value,
            fmt(point.mean_wait_time),
            fmt(point.mean_ride_time),
            point.mean_dropped_riders,
        );
    }

    let out = std::path::Path::new("driver_sweep.csv");
    export_to_csv(out, &results)?;
    println!("Results written to {}", out.display());
    Ok(())
}
