//! Time accrual: charges each assigned rider for the phase this step is
//! spent in. Runs before movement, so a step that ends with the pickup still
//! counts as waiting and a step that ends at the destination still counts as
//! riding.

use bevy_ecs::prelude::{Query, Res, Without};

use crate::ecs::{Driver, DriverState, Fleet, Rider};

pub fn accrue_time_system(
    fleet: Res<Fleet>,
    drivers: Query<&Driver>,
    mut riders: Query<&mut Rider, Without<Driver>>,
) {
    for &driver_entity in &fleet.0 {
        let Ok(driver) = drivers.get(driver_entity) else {
            continue;
        };
        let Some(rider_entity) = driver.assigned_rider else {
            continue;
        };
        let Ok(mut rider) = riders.get_mut(rider_entity) else {
            continue;
        };
        match driver.state {
            DriverState::Idle => {}
            DriverState::EnRoutePickup => rider.wait_time += 1,
            DriverState::Transporting => rider.ride_time += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridPos;
    use crate::systems::spawner::{spawn_rider, SpawnOutcome};
    use crate::test_helpers::{create_test_world, spawn_driver_at};
    use bevy_ecs::prelude::Schedule;

    #[test]
    fn waiting_rider_accrues_wait_time_only() {
        let mut world = create_test_world(10, 10);
        spawn_driver_at(&mut world, GridPos::new(0, 0));
        let SpawnOutcome::Matched { rider, .. } =
            spawn_rider(&mut world, GridPos::new(5, 0), GridPos::new(5, 5))
        else {
            panic!("expected a match");
        };

        let mut schedule = Schedule::default();
        schedule.add_systems(accrue_time_system);
        schedule.run(&mut world);
        schedule.run(&mut world);

        let rider = world.get::<Rider>(rider).expect("rider");
        assert_eq!(rider.wait_time, 2);
        assert_eq!(rider.ride_time, 0);
    }

    #[test]
    fn transporting_rider_accrues_ride_time_only() {
        let mut world = create_test_world(10, 10);
        let driver = spawn_driver_at(&mut world, GridPos::new(5, 0));
        let SpawnOutcome::Matched { rider, .. } =
            spawn_rider(&mut world, GridPos::new(5, 0), GridPos::new(5, 5))
        else {
            panic!("expected a match");
        };
        // Force the post-pickup state directly.
        world.get_mut::<Driver>(driver).unwrap().state = DriverState::Transporting;

        let mut schedule = Schedule::default();
        schedule.add_systems(accrue_time_system);
        schedule.run(&mut world);

        let rider = world.get::<Rider>(rider).expect("rider");
        assert_eq!(rider.wait_time, 0);
        assert_eq!(rider.ride_time, 1);
    }
}
