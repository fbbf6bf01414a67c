pub mod algorithm;
pub mod nearest;

use bevy_ecs::prelude::Resource;

pub use algorithm::MatchingAlgorithm;
pub use nearest::NearestDriverMatching;

/// Resource wrapper for the matching algorithm trait object.
#[derive(Resource)]
pub struct MatchingAlgorithmResource(pub Box<dyn MatchingAlgorithm>);

impl MatchingAlgorithmResource {
    pub fn new(algorithm: Box<dyn MatchingAlgorithm>) -> Self {
        Self(algorithm)
    }
}

/// Default policy: nearest idle driver by Euclidean distance.
pub fn create_nearest_matching() -> MatchingAlgorithmResource {
    MatchingAlgorithmResource::new(Box::new(NearestDriverMatching))
}
