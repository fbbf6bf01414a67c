//! Sweep definition and validation.
//!
//! All validation happens in [`SweepPlan::validate`] before any run starts:
//! a partial sweep is never attempted.

use sim_core::scenario::{ConfigError, ScenarioParams};
use thiserror::Error;

/// The single engine parameter a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum SweepVariable {
    /// Fleet size; swept values must be non-negative integers.
    DriverCount,
    /// Per-step rider spawn probability; swept values must lie in (0, 1).
    SpawnProbability,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    #[error("sweep has no values to run")]
    EmptyValues,
    #[error("driver-count sweep requires non-negative integers, got {0}")]
    NonIntegerDriverCount(f64),
    #[error("spawn-probability sweep requires values strictly between 0 and 1, got {0}")]
    SpawnProbabilityOutOfRange(f64),
    #[error("base scenario is invalid: {0}")]
    InvalidBaseScenario(#[from] ConfigError),
}

/// A full sweep: the varied parameter, its values, and everything held fixed.
#[derive(Debug, Clone)]
pub struct SweepPlan {
    pub variable: SweepVariable,
    pub values: Vec<f64>,
    /// Engine parameters shared by every run; the swept field is overridden.
    pub base: ScenarioParams,
    /// Step budget per run.
    pub iterations: u64,
    /// Runs per swept value; results are averaged across repetitions.
    pub repetitions: u32,
    /// Base seed; each run derives its own seed from this, the value index
    /// and the repetition index, so the whole sweep is reproducible.
    pub seed: u64,
}

impl SweepPlan {
    pub fn new(variable: SweepVariable, values: Vec<f64>) -> Self {
        Self {
            variable,
            values,
            base: ScenarioParams::default(),
            iterations: 100,
            repetitions: 1,
            seed: 0,
        }
    }

    pub fn with_base(mut self, base: ScenarioParams) -> Self {
        self.base = base;
        self
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), SweepError> {
        if self.values.is_empty() {
            return Err(SweepError::EmptyValues);
        }
        for &value in &self.values {
            match self.variable {
                SweepVariable::DriverCount => {
                    if value.fract() != 0.0 || value < 0.0 || !value.is_finite() {
                        return Err(SweepError::NonIntegerDriverCount(value));
                    }
                }
                SweepVariable::SpawnProbability => {
                    if !(value > 0.0 && value < 1.0) {
                        return Err(SweepError::SpawnProbabilityOutOfRange(value));
                    }
                }
            }
        }
        self.base.validate()?;
        Ok(())
    }

    /// Scenario for one swept value, with a run-specific seed.
    pub fn scenario_for(&self, value: f64, value_index: usize, repetition: u32) -> ScenarioParams {
        let seed = self
            .seed
            .wrapping_add(value_index as u64)
            .wrapping_mul(31)
            .wrapping_add(repetition as u64);
        let params = self.base.with_seed(seed);
        match self.variable {
            SweepVariable::DriverCount => params.with_num_drivers(value as usize),
            SweepVariable::SpawnProbability => params.with_rider_spawn_prob(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_sweep_rejects_non_integer_values() {
        let plan = SweepPlan::new(SweepVariable::DriverCount, vec![5.0, 7.5]);
        assert_eq!(plan.validate(), Err(SweepError::NonIntegerDriverCount(7.5)));
    }

    #[test]
    fn driver_sweep_accepts_integral_floats() {
        let plan = SweepPlan::new(SweepVariable::DriverCount, vec![1.0, 10.0, 100.0]);
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn probability_sweep_rejects_values_outside_open_interval() {
        for bad in [0.0, 1.0, 1.5, -0.2] {
            let plan = SweepPlan::new(SweepVariable::SpawnProbability, vec![0.5, bad]);
            assert_eq!(
                plan.validate(),
                Err(SweepError::SpawnProbabilityOutOfRange(bad)),
                "value {bad} should be rejected"
            );
        }
    }

    #[test]
    fn empty_value_list_is_rejected() {
        let plan = SweepPlan::new(SweepVariable::DriverCount, vec![]);
        assert_eq!(plan.validate(), Err(SweepError::EmptyValues));
    }

    #[test]
    fn invalid_base_scenario_is_rejected() {
        let base = ScenarioParams::default().with_dimensions(0, 10);
        let plan = SweepPlan::new(SweepVariable::DriverCount, vec![5.0]).with_base(base);
        assert!(matches!(
            plan.validate(),
            Err(SweepError::InvalidBaseScenario(_))
        ));
    }

    #[test]
    fn scenario_for_overrides_only_the_swept_field() {
        let base = ScenarioParams::default()
            .with_num_drivers(10)
            .with_rider_spawn_prob(0.3);
        let plan = SweepPlan::new(SweepVariable::DriverCount, vec![25.0]).with_base(base);
        let params = plan.scenario_for(25.0, 0, 0);
        assert_eq!(params.num_drivers, 25);
        assert_eq!(params.rider_spawn_prob, 0.3);
    }

    #[test]
    fn repetitions_get_distinct_seeds() {
        let plan = SweepPlan::new(SweepVariable::DriverCount, vec![5.0]).with_seed(7);
        let a = plan.scenario_for(5.0, 0, 0);
        let b = plan.scenario_for(5.0, 0, 1);
        assert_ne!(a.seed, b.seed);
    }
}
