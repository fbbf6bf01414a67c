//! Simulation runner: the per-step schedule and stepping helpers.
//!
//! One schedule run is one discrete step. Phases run in a fixed chain —
//! spawn+match, accrue, move, finalize, tick — so a run with a fixed seed is
//! fully reproducible.

use bevy_ecs::prelude::{ResMut, Schedule, World};
use bevy_ecs::schedule::{apply_deferred, IntoSystemConfigs};

use crate::clock::SimulationClock;
use crate::systems::{
    accrue::accrue_time_system, dropoff::dropoff_system, movement::movement_system,
    spawner::rider_spawn_system,
};

fn advance_clock_system(mut clock: ResMut<SimulationClock>) {
    clock.advance();
}

/// Builds the per-step schedule. `apply_deferred` sits between finalize and
/// the clock tick so riders despawned at their destination are gone before
/// the next step observes the world.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            rider_spawn_system,
            accrue_time_system,
            movement_system,
            dropoff_system,
            apply_deferred,
            advance_clock_system,
        )
            .chain(),
    );
    schedule
}

/// Runs exactly one simulation step.
pub fn run_step(world: &mut World, schedule: &mut Schedule) {
    schedule.run(world);
}

/// Runs `steps` simulation steps and returns the number executed.
pub fn run_steps(world: &mut World, schedule: &mut Schedule, steps: u64) -> u64 {
    for _ in 0..steps {
        run_step(world, schedule);
    }
    steps
}
