pub mod accrue;
pub mod dropoff;
pub mod movement;
pub mod spawner;
