use bevy_ecs::prelude::Entity;

use super::MatchingAlgorithm;
use crate::grid::GridPos;

/// Assigns the idle driver with the smallest Euclidean distance to the
/// rider. Ties go to the first driver encountered, i.e. the one created
/// earliest, since candidates arrive in fleet order.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestDriverMatching;

impl MatchingAlgorithm for NearestDriverMatching {
    fn find_match(
        &self,
        rider_pos: GridPos,
        idle_drivers: &[(Entity, GridPos)],
    ) -> Option<Entity> {
        let mut best: Option<(Entity, f64)> = None;
        for (entity, pos) in idle_drivers {
            let distance = rider_pos.euclidean_distance(pos);
            // Strict comparison keeps the first-encountered minimum on ties.
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((*entity, distance));
            }
        }
        best.map(|(entity, _)| entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(raw: u32, x: i32, y: i32) -> (Entity, GridPos) {
        (Entity::from_raw(raw), GridPos::new(x, y))
    }

    #[test]
    fn picks_the_closest_driver() {
        let matching = NearestDriverMatching;
        let drivers = [driver(1, 9, 9), driver(2, 1, 0), driver(3, 5, 5)];
        let chosen = matching.find_match(GridPos::new(0, 0), &drivers);
        assert_eq!(chosen, Some(Entity::from_raw(2)));
    }

    #[test]
    fn equidistant_drivers_resolve_to_the_first_listed() {
        let matching = NearestDriverMatching;
        // Both drivers are exactly 2 cells away from the rider.
        let drivers = [driver(1, 2, 0), driver(2, 0, 2)];
        let chosen = matching.find_match(GridPos::new(0, 0), &drivers);
        assert_eq!(chosen, Some(Entity::from_raw(1)));
    }

    #[test]
    fn no_idle_drivers_yields_no_match() {
        let matching = NearestDriverMatching;
        assert_eq!(matching.find_match(GridPos::new(3, 3), &[]), None);
    }
}
