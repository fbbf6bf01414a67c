//! Rider spawner: stochastic spawn, immediate matching and the drop policy.
//!
//! At most one rider spawns per step. A spawned rider is matched against the
//! idle drivers right away; when no driver is idle the rider is discarded
//! and counted as dropped instead of lingering unassigned.

use bevy_ecs::prelude::{Entity, World};
use rand::Rng;

use crate::ecs::{Driver, DriverState, Fleet, Position, Rider, SimRng, SpawnConfig, WorldBounds};
use crate::grid::GridPos;
use crate::matching::MatchingAlgorithmResource;
use crate::telemetry::SimTelemetry;

/// Outcome of a spawn attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// Rider entered the active set, bound to the given driver.
    Matched { rider: Entity, driver: Entity },
    /// No idle driver existed; the rider was discarded and counted.
    Dropped,
}

/// Idle drivers in fleet-creation order, the tie-break order for matching.
fn idle_drivers(world: &mut World) -> Vec<(Entity, GridPos)> {
    let fleet = world.resource::<Fleet>().0.clone();
    fleet
        .into_iter()
        .filter_map(|entity| {
            let driver = world.get::<Driver>(entity)?;
            if !driver.is_idle() {
                return None;
            }
            let position = world.get::<Position>(entity)?;
            Some((entity, position.0))
        })
        .collect()
}

/// Spawns a rider at `location` heading for `destination` and applies the
/// matching and drop policies. Exposed so tests and scripted scenarios can
/// inject deterministic riders.
pub fn spawn_rider(world: &mut World, location: GridPos, destination: GridPos) -> SpawnOutcome {
    debug_assert_ne!(location, destination, "destination must differ from spawn");

    let candidates = idle_drivers(world);
    let chosen = world
        .resource::<MatchingAlgorithmResource>()
        .0
        .find_match(location, &candidates);

    let Some(driver_entity) = chosen else {
        world.resource_mut::<SimTelemetry>().dropped_riders += 1;
        return SpawnOutcome::Dropped;
    };

    let rider_entity = world
        .spawn((Rider::new(destination), Position(location)))
        .id();
    let mut driver = world
        .get_mut::<Driver>(driver_entity)
        .expect("matched driver exists");
    driver.state = DriverState::EnRoutePickup;
    driver.assigned_rider = Some(rider_entity);

    SpawnOutcome::Matched {
        rider: rider_entity,
        driver: driver_entity,
    }
}

/// Per-step spawn phase: one uniform draw against the spawn probability,
/// then a random location and a distinct random destination.
pub fn rider_spawn_system(world: &mut World) {
    let prob = world.resource::<SpawnConfig>().rider_spawn_prob;
    let roll = world.resource_mut::<SimRng>().0.gen::<f64>();
    if roll >= prob {
        return;
    }

    let bounds = world.resource::<WorldBounds>().0;
    let (location, destination) = {
        let mut rng = world.resource_mut::<SimRng>();
        let location = bounds.random_pos(&mut rng.0);
        let destination = bounds.random_pos_excluding(&mut rng.0, location);
        (location, destination)
    };
    spawn_rider(world, location, destination);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_world, spawn_driver_at};

    #[test]
    fn spawn_binds_the_nearest_idle_driver() {
        let mut world = create_test_world(10, 10);
        let far = spawn_driver_at(&mut world, GridPos::new(9, 9));
        let near = spawn_driver_at(&mut world, GridPos::new(1, 0));

        let outcome = spawn_rider(&mut world, GridPos::new(0, 0), GridPos::new(5, 5));
        let SpawnOutcome::Matched { rider, driver } = outcome else {
            panic!("expected a match");
        };
        assert_eq!(driver, near);

        let near_driver = world.get::<Driver>(near).expect("driver");
        assert_eq!(near_driver.state, DriverState::EnRoutePickup);
        assert_eq!(near_driver.assigned_rider, Some(rider));
        assert!(world.get::<Driver>(far).expect("driver").is_idle());
    }

    #[test]
    fn spawn_without_idle_drivers_drops_the_rider() {
        let mut world = create_test_world(10, 10);

        let outcome = spawn_rider(&mut world, GridPos::new(0, 0), GridPos::new(2, 2));
        assert_eq!(outcome, SpawnOutcome::Dropped);
        assert_eq!(world.resource::<SimTelemetry>().dropped_riders, 1);
        // The rider never entered the active set.
        assert_eq!(world.query::<&Rider>().iter(&world).count(), 0);
    }

    #[test]
    fn busy_drivers_are_not_candidates() {
        let mut world = create_test_world(10, 10);
        let only = spawn_driver_at(&mut world, GridPos::new(0, 0));
        spawn_rider(&mut world, GridPos::new(1, 1), GridPos::new(3, 3));

        let outcome = spawn_rider(&mut world, GridPos::new(0, 1), GridPos::new(4, 4));
        assert_eq!(outcome, SpawnOutcome::Dropped);
        assert_eq!(
            world.get::<Driver>(only).expect("driver").state,
            DriverState::EnRoutePickup
        );
    }
}
