use bevy_ecs::prelude::Resource;

/// Discrete simulation time. One tick covers a full spawn/match/move/accrue/
/// finalize pass; the clock advances after all phases of a step have run.
#[derive(Debug, Default, Clone, Copy, Resource)]
pub struct SimulationClock {
    now: u64,
}

impl SimulationClock {
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn advance(&mut self) {
        self.now += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero_and_counts_steps() {
        let mut clock = SimulationClock::default();
        assert_eq!(clock.now(), 0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.now(), 2);
    }
}
