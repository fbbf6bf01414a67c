//! Runs one market scenario headlessly and prints aggregate statistics.

use sim_core::scenario::ScenarioParams;
use sim_core::simulation::Simulation;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = ScenarioParams::default()
        .with_num_drivers(10)
        .with_rider_spawn_prob(0.3)
        .with_dimensions(70, 70)
        .with_seed(7);

    let mut sim = Simulation::new(params)?;
    let outcome = sim.run(500);

    println!("steps:           {}", sim.current_step());
    println!("completed trips: {}", outcome.wait_times.len());
    println!("dropped riders:  {}", outcome.dropped_riders);
    if !outcome.wait_times.is_empty() {
        let mean_wait =
            outcome.wait_times.iter().sum::<u64>() as f64 / outcome.wait_times.len() as f64;
        let mean_ride =
            outcome.ride_times.iter().sum::<u64>() as f64 / outcome.ride_times.len() as f64;
        println!("mean wait time:  {mean_wait:.2}");
        println!("mean ride time:  {mean_ride:.2}");
    }

    let snapshot = sim.snapshot();
    println!(
        "final state: {} drivers, {} riders in flight",
        snapshot.drivers.len(),
        snapshot.riders.len()
    );
    Ok(())
}
