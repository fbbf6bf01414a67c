use bevy_ecs::prelude::Entity;

use crate::grid::GridPos;

/// Trait for matching algorithms that pick a driver for a freshly spawned
/// rider.
///
/// Implementations receive the idle drivers in fleet-creation order and must
/// be deterministic with respect to that order, so a fixed seed reproduces
/// identical runs.
pub trait MatchingAlgorithm: Send + Sync {
    /// Pick a driver for the rider at `rider_pos`.
    ///
    /// `idle_drivers` holds `(driver_entity, driver_position)` pairs for
    /// every driver currently without an assignment. Returns `None` when the
    /// slice is empty or no driver qualifies.
    fn find_match(&self, rider_pos: GridPos, idle_drivers: &[(Entity, GridPos)])
        -> Option<Entity>;
}
