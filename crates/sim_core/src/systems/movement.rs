//! Movement: one axis-priority unit step per assigned driver per tick.
//!
//! An en-route driver heads for its rider's location and becomes
//! transporting the moment it stands on that cell, whether it arrived with
//! this step's move or was already there. A transporting driver heads for
//! the rider's destination and mirrors every move onto the rider, so the
//! pair never separates. Dropoff detection lives in
//! [`crate::systems::dropoff`], which runs after movement in the same tick.

use bevy_ecs::prelude::{Query, Res, Without};

use crate::ecs::{Driver, DriverState, Fleet, Position, Rider};

pub fn movement_system(
    fleet: Res<Fleet>,
    mut drivers: Query<(&mut Driver, &mut Position)>,
    mut riders: Query<(&mut Position, &Rider), Without<Driver>>,
) {
    for &driver_entity in &fleet.0 {
        let Ok((mut driver, mut driver_pos)) = drivers.get_mut(driver_entity) else {
            continue;
        };
        let Some(rider_entity) = driver.assigned_rider else {
            continue;
        };

        match driver.state {
            DriverState::Idle => {}
            DriverState::EnRoutePickup => {
                let Ok((rider_pos, _)) = riders.get(rider_entity) else {
                    continue;
                };
                let pickup = rider_pos.0;
                if driver_pos.0 != pickup {
                    driver_pos.0 = driver_pos.0.step_toward(pickup);
                }
                if driver_pos.0 == pickup {
                    driver.state = DriverState::Transporting;
                }
            }
            DriverState::Transporting => {
                let Ok((mut rider_pos, rider)) = riders.get_mut(rider_entity) else {
                    continue;
                };
                if driver_pos.0 != rider.destination {
                    driver_pos.0 = driver_pos.0.step_toward(rider.destination);
                    rider_pos.0 = driver_pos.0;
                }
            }
        }
    }
}
