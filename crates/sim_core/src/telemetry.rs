//! Telemetry / KPIs: completed trips, dropped riders and render snapshots.

use bevy_ecs::prelude::{Entity, Resource, World};
use serde::Serialize;

use crate::clock::SimulationClock;
use crate::ecs::{Driver, DriverState, Fleet, Position, Rider};
use crate::grid::{GridBounds, GridPos};

/// Highlight value for destination cells in the occupancy projection.
pub const DESTINATION_MARK: u8 = 15;

/// One completed trip, recorded the step the driver reaches the dropoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletedTripRecord {
    /// Steps between assignment and pickup.
    pub wait_time: u64,
    /// Steps between pickup and dropoff.
    pub ride_time: u64,
    /// Step at which the dropoff happened.
    pub completed_at: u64,
}

/// Collects simulation outcomes. Inserted as a resource at scenario build time.
#[derive(Debug, Default, Resource)]
pub struct SimTelemetry {
    pub completed_trips: Vec<CompletedTripRecord>,
    /// Riders discarded at spawn time because no driver was idle.
    pub dropped_riders: u64,
}

impl SimTelemetry {
    pub fn wait_times(&self) -> Vec<u64> {
        self.completed_trips.iter().map(|t| t.wait_time).collect()
    }

    pub fn ride_times(&self) -> Vec<u64> {
        self.completed_trips.iter().map(|t| t.ride_time).collect()
    }
}

/// Snapshot of one driver for visualization.
#[derive(Debug, Clone, Copy)]
pub struct DriverSnapshot {
    pub entity: Entity,
    pub position: GridPos,
    pub state: DriverState,
}

/// Snapshot of one active rider for visualization.
#[derive(Debug, Clone, Copy)]
pub struct RiderSnapshot {
    pub entity: Entity,
    pub position: GridPos,
    pub destination: GridPos,
}

/// Read-only projection of the world at one step. Drivers appear in fleet
/// order, riders in entity order, so repeated captures are stable.
#[derive(Debug, Clone)]
pub struct SimSnapshot {
    pub step: u64,
    pub drivers: Vec<DriverSnapshot>,
    pub riders: Vec<RiderSnapshot>,
}

/// Captures the current state for an external renderer. Pure read; the
/// simulation is unaffected.
pub fn capture_snapshot(world: &mut World) -> SimSnapshot {
    let step = world.resource::<SimulationClock>().now();
    let fleet: Vec<Entity> = world.resource::<Fleet>().0.clone();

    let mut drivers = Vec::with_capacity(fleet.len());
    for entity in fleet {
        let Some(driver) = world.get::<Driver>(entity) else {
            continue;
        };
        let state = driver.state;
        let Some(position) = world.get::<Position>(entity) else {
            continue;
        };
        drivers.push(DriverSnapshot {
            entity,
            position: position.0,
            state,
        });
    }

    let mut riders: Vec<RiderSnapshot> = world
        .query::<(Entity, &Rider, &Position)>()
        .iter(world)
        .map(|(entity, rider, position)| RiderSnapshot {
            entity,
            position: position.0,
            destination: rider.destination,
        })
        .collect();
    riders.sort_by_key(|snapshot| snapshot.entity);

    SimSnapshot {
        step,
        drivers,
        riders,
    }
}

/// Occupancy grid for rendering: row `y`, column `x`, destinations of active
/// riders marked with [`DESTINATION_MARK`], everything else zero.
pub fn occupancy_grid(snapshot: &SimSnapshot, bounds: GridBounds) -> Vec<Vec<u8>> {
    let mut grid = vec![vec![0u8; bounds.width as usize]; bounds.height as usize];
    for rider in &snapshot.riders {
        if bounds.contains(rider.destination) {
            grid[rider.destination.y as usize][rider.destination.x as usize] = DESTINATION_MARK;
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_grid_marks_only_destinations() {
        let snapshot = SimSnapshot {
            step: 0,
            drivers: vec![],
            riders: vec![RiderSnapshot {
                entity: Entity::from_raw(1),
                position: GridPos::new(0, 0),
                destination: GridPos::new(2, 1),
            }],
        };
        let grid = occupancy_grid(&snapshot, GridBounds::new(4, 3));
        assert_eq!(grid[1][2], DESTINATION_MARK);
        let marks: usize = grid
            .iter()
            .flatten()
            .filter(|&&cell| cell != 0)
            .count();
        assert_eq!(marks, 1);
    }
}
