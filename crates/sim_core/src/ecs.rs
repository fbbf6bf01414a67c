use bevy_ecs::prelude::{Component, Entity, Resource};

use crate::grid::{GridBounds, GridPos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    EnRoutePickup,
    Transporting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Driver {
    pub state: DriverState,
    /// Rider this driver is serving. `Some` exactly when the state is not
    /// [`DriverState::Idle`]; each rider is referenced by at most one driver.
    pub assigned_rider: Option<Entity>,
}

impl Driver {
    pub fn idle() -> Self {
        Self {
            state: DriverState::Idle,
            assigned_rider: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == DriverState::Idle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Rider {
    /// Fixed at spawn; always differs from the spawn location.
    pub destination: GridPos,
    /// Steps spent assigned but not yet picked up.
    pub wait_time: u64,
    /// Steps spent on board, including the arrival step.
    pub ride_time: u64,
}

impl Rider {
    pub fn new(destination: GridPos) -> Self {
        Self {
            destination,
            wait_time: 0,
            ride_time: 0,
        }
    }
}

/// Grid cell an entity currently occupies. Present on both drivers and
/// riders; a transporting driver and its rider share the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Position(pub GridPos);

/// All drivers in creation order. Matching, movement and drop-off iterate
/// this list so results are stable for a fixed seed.
#[derive(Debug, Default, Resource)]
pub struct Fleet(pub Vec<Entity>);

#[derive(Debug, Clone, Copy, Resource)]
pub struct WorldBounds(pub GridBounds);

/// Per-step rider demand.
#[derive(Debug, Clone, Copy, Resource)]
pub struct SpawnConfig {
    /// Probability in [0, 1] that one rider spawns this step.
    pub rider_spawn_prob: f64,
}

/// Seedable random source owned by the world; the only nondeterminism in a run.
#[derive(Debug, Resource)]
pub struct SimRng(pub rand::rngs::StdRng);
