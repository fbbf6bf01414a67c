//! Dropoff finalization: records the trip, removes the rider and returns the
//! driver to the idle pool, all within the arrival step.

use bevy_ecs::prelude::{Commands, Query, Res, ResMut, Without};

use crate::clock::SimulationClock;
use crate::ecs::{Driver, DriverState, Fleet, Position, Rider};
use crate::telemetry::{CompletedTripRecord, SimTelemetry};

pub fn dropoff_system(
    mut commands: Commands,
    clock: Res<SimulationClock>,
    mut telemetry: ResMut<SimTelemetry>,
    fleet: Res<Fleet>,
    mut drivers: Query<(&mut Driver, &Position)>,
    riders: Query<&Rider, Without<Driver>>,
) {
    for &driver_entity in &fleet.0 {
        let Ok((mut driver, driver_pos)) = drivers.get_mut(driver_entity) else {
            continue;
        };
        if driver.state != DriverState::Transporting {
            continue;
        }
        let Some(rider_entity) = driver.assigned_rider else {
            continue;
        };
        let Ok(rider) = riders.get(rider_entity) else {
            continue;
        };
        if driver_pos.0 != rider.destination {
            continue;
        }

        telemetry.completed_trips.push(CompletedTripRecord {
            wait_time: rider.wait_time,
            ride_time: rider.ride_time,
            completed_at: clock.now(),
        });
        commands.entity(rider_entity).despawn();
        driver.state = DriverState::Idle;
        driver.assigned_rider = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridPos;
    use crate::runner::{run_steps, simulation_schedule};
    use crate::systems::spawner::{spawn_rider, SpawnOutcome};
    use crate::test_helpers::{create_test_world, spawn_driver_at};

    #[test]
    fn driver_becomes_idle_and_rider_is_removed_at_destination() {
        let mut world = create_test_world(10, 10);
        let driver = spawn_driver_at(&mut world, GridPos::new(0, 0));
        let SpawnOutcome::Matched { .. } =
            spawn_rider(&mut world, GridPos::new(0, 0), GridPos::new(0, 2))
        else {
            panic!("expected a match");
        };

        let mut schedule = simulation_schedule();
        // Step 1 picks up, steps 2-3 drive, the dropoff happens in step 3.
        run_steps(&mut world, &mut schedule, 3);

        assert!(world.get::<Driver>(driver).expect("driver").is_idle());
        assert_eq!(world.query::<&Rider>().iter(&world).count(), 0);

        let telemetry = world.resource::<SimTelemetry>();
        assert_eq!(telemetry.completed_trips.len(), 1);
        assert_eq!(telemetry.completed_trips[0].completed_at, 2);
    }

    #[test]
    fn freed_driver_is_matchable_again() {
        let mut world = create_test_world(10, 10);
        let driver = spawn_driver_at(&mut world, GridPos::new(0, 0));
        spawn_rider(&mut world, GridPos::new(0, 0), GridPos::new(0, 1));

        let mut schedule = simulation_schedule();
        run_steps(&mut world, &mut schedule, 2);
        assert!(world.get::<Driver>(driver).expect("driver").is_idle());

        let outcome = spawn_rider(&mut world, GridPos::new(1, 1), GridPos::new(4, 4));
        assert!(matches!(outcome, SpawnOutcome::Matched { .. }));
    }
}
