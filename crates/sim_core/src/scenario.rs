//! Scenario construction: parameter validation and world setup.

use bevy_ecs::prelude::World;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::clock::SimulationClock;
use crate::ecs::{Driver, Fleet, Position, SimRng, SpawnConfig, WorldBounds};
use crate::grid::GridBounds;
use crate::matching::create_nearest_matching;
use crate::telemetry::SimTelemetry;

/// Configuration problems reported before any simulation state is created.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("grid needs at least two cells so a destination can differ from a spawn location")]
    GridTooSmall,
    #[error("rider spawn probability must lie within [0, 1], got {0}")]
    SpawnProbabilityOutOfRange(f64),
}

/// Parameters for building a simulation scenario.
///
/// Defaults mirror the classic model: 10 drivers on a 70x70 grid with a 0.3
/// per-step rider spawn probability.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioParams {
    pub num_drivers: usize,
    pub rider_spawn_prob: f64,
    pub width: i32,
    pub height: i32,
    /// RNG seed; `None` seeds from entropy, making the run non-reproducible.
    pub seed: Option<u64>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            num_drivers: 10,
            rider_spawn_prob: 0.3,
            width: 70,
            height: 70,
            seed: None,
        }
    }
}

impl ScenarioParams {
    pub fn with_num_drivers(mut self, num_drivers: usize) -> Self {
        self.num_drivers = num_drivers;
        self
    }

    pub fn with_rider_spawn_prob(mut self, prob: f64) -> Self {
        self.rider_spawn_prob = prob;
        self
    }

    pub fn with_dimensions(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn bounds(&self) -> GridBounds {
        GridBounds::new(self.width, self.height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.bounds().cell_count() < 2 {
            return Err(ConfigError::GridTooSmall);
        }
        if !(0.0..=1.0).contains(&self.rider_spawn_prob) || self.rider_spawn_prob.is_nan() {
            return Err(ConfigError::SpawnProbabilityOutOfRange(self.rider_spawn_prob));
        }
        Ok(())
    }
}

/// Validates `params`, inserts all simulation resources and spawns the fleet
/// at uniform-random positions. The fleet's creation order is the iteration
/// order for every per-step phase.
pub fn build_scenario(world: &mut World, params: ScenarioParams) -> Result<(), ConfigError> {
    params.validate()?;

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let bounds = params.bounds();

    let mut fleet = Vec::with_capacity(params.num_drivers);
    for _ in 0..params.num_drivers {
        let position = bounds.random_pos(&mut rng);
        let entity = world.spawn((Driver::idle(), Position(position))).id();
        fleet.push(entity);
    }

    world.insert_resource(SimulationClock::default());
    world.insert_resource(SimTelemetry::default());
    world.insert_resource(WorldBounds(bounds));
    world.insert_resource(SpawnConfig {
        rider_spawn_prob: params.rider_spawn_prob,
    });
    world.insert_resource(SimRng(rng));
    world.insert_resource(Fleet(fleet));
    world.insert_resource(create_nearest_matching());
    Ok(())
}
