//! Engine facade: owns the world and schedule behind a headless API.
//!
//! External collaborators (renderers, experiment harnesses) construct a
//! [`Simulation`], call [`Simulation::advance`] or [`Simulation::run`], and
//! read results back through accessors; they never touch ECS internals.

use bevy_ecs::prelude::{Schedule, World};

use crate::clock::SimulationClock;
use crate::runner::{run_step, simulation_schedule};
use crate::scenario::{build_scenario, ConfigError, ScenarioParams};
use crate::telemetry::{capture_snapshot, SimSnapshot, SimTelemetry};

/// Everything a finished run reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub wait_times: Vec<u64>,
    pub ride_times: Vec<u64>,
    pub dropped_riders: u64,
}

pub struct Simulation {
    world: World,
    schedule: Schedule,
}

impl Simulation {
    /// Validates `params` and builds a ready-to-step world. Configuration
    /// errors surface here, before any simulation state exists.
    pub fn new(params: ScenarioParams) -> Result<Self, ConfigError> {
        let mut world = World::new();
        build_scenario(&mut world, params)?;
        Ok(Self {
            world,
            schedule: simulation_schedule(),
        })
    }

    /// Performs one discrete step: spawn, match, accrue, move, finalize.
    pub fn advance(&mut self) {
        run_step(&mut self.world, &mut self.schedule);
    }

    /// Runs `iterations` steps and returns the recorded statistics. Riders
    /// still in flight when the budget expires are not recorded.
    pub fn run(&mut self, iterations: u64) -> RunOutcome {
        for _ in 0..iterations {
            self.advance();
        }
        let telemetry = self.world.resource::<SimTelemetry>();
        RunOutcome {
            wait_times: telemetry.wait_times(),
            ride_times: telemetry.ride_times(),
            dropped_riders: telemetry.dropped_riders,
        }
    }

    /// Steps executed so far.
    pub fn current_step(&self) -> u64 {
        self.world.resource::<SimulationClock>().now()
    }

    /// Wait times of completed trips, in completion order.
    pub fn completed_wait_times(&self) -> Vec<u64> {
        self.world.resource::<SimTelemetry>().wait_times()
    }

    /// Ride times of completed trips, in completion order.
    pub fn completed_ride_times(&self) -> Vec<u64> {
        self.world.resource::<SimTelemetry>().ride_times()
    }

    /// Riders discarded because no driver was idle at spawn time.
    pub fn dropped_count(&self) -> u64 {
        self.world.resource::<SimTelemetry>().dropped_riders
    }

    /// Read-only projection of the current state for rendering.
    pub fn snapshot(&mut self) -> SimSnapshot {
        capture_snapshot(&mut self.world)
    }

    /// Escape hatch for tests and scripted scenarios.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_params() -> ScenarioParams {
        ScenarioParams::default()
            .with_num_drivers(3)
            .with_rider_spawn_prob(0.0)
            .with_dimensions(20, 20)
            .with_seed(11)
    }

    #[test]
    fn invalid_params_are_rejected_at_construction() {
        let params = ScenarioParams::default().with_dimensions(-1, 5);
        assert!(Simulation::new(params).is_err());
    }

    #[test]
    fn zero_spawn_probability_produces_no_activity() {
        let mut sim = Simulation::new(quiet_params()).expect("valid params");
        let outcome = sim.run(200);
        assert!(outcome.wait_times.is_empty());
        assert!(outcome.ride_times.is_empty());
        assert_eq!(outcome.dropped_riders, 0);
        assert_eq!(sim.current_step(), 200);
    }

    #[test]
    fn snapshot_lists_the_whole_fleet() {
        let mut sim = Simulation::new(quiet_params()).expect("valid params");
        sim.advance();
        let snapshot = sim.snapshot();
        assert_eq!(snapshot.step, 1);
        assert_eq!(snapshot.drivers.len(), 3);
        assert!(snapshot.riders.is_empty());
    }

    #[test]
    fn same_seed_reproduces_the_same_outcome() {
        let params = ScenarioParams::default()
            .with_num_drivers(5)
            .with_rider_spawn_prob(0.4)
            .with_dimensions(15, 15)
            .with_seed(99);
        let a = Simulation::new(params).expect("valid params").run(300);
        let b = Simulation::new(params).expect("valid params").run(300);
        assert_eq!(a, b);
    }
}
