//! Shared test setup utilities.

use bevy_ecs::prelude::{Entity, Schedule, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::SimulationClock;
use crate::ecs::{Driver, Fleet, Position, SimRng, SpawnConfig, WorldBounds};
use crate::grid::{GridBounds, GridPos};
use crate::matching::create_nearest_matching;
use crate::systems::movement::movement_system;
use crate::telemetry::SimTelemetry;

/// World with all simulation resources, an empty fleet and a fixed seed.
/// Add drivers with [`spawn_driver_at`].
pub fn create_test_world(width: i32, height: i32) -> World {
    let mut world = World::new();
    world.insert_resource(SimulationClock::default());
    world.insert_resource(SimTelemetry::default());
    world.insert_resource(WorldBounds(GridBounds::new(width, height)));
    world.insert_resource(SpawnConfig {
        rider_spawn_prob: 0.0,
    });
    world.insert_resource(SimRng(StdRng::seed_from_u64(0)));
    world.insert_resource(Fleet::default());
    world.insert_resource(create_nearest_matching());
    world
}

/// Adds an idle driver at `position` and registers it at the end of the
/// fleet order.
pub fn spawn_driver_at(world: &mut World, position: GridPos) -> Entity {
    let entity = world.spawn((Driver::idle(), Position(position))).id();
    world.resource_mut::<Fleet>().0.push(entity);
    entity
}

/// Schedule running only the movement phase, for isolating movement tests.
pub fn movement_only_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement_system);
    schedule
}
