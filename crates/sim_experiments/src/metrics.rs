//! Metrics extraction and aggregation.

use serde::Serialize;
use sim_core::simulation::RunOutcome;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// Zero riders completed, so a mean over trips is undefined.
    #[error("no completed trips")]
    NoCompletedTrips,
}

/// Statistics of a single simulation run.
#[derive(Debug, Clone)]
pub struct RunMetrics {
    pub wait_times: Vec<u64>,
    pub ride_times: Vec<u64>,
    pub dropped_riders: u64,
}

fn mean(values: &[u64]) -> Result<f64, MetricsError> {
    if values.is_empty() {
        return Err(MetricsError::NoCompletedTrips);
    }
    Ok(values.iter().sum::<u64>() as f64 / values.len() as f64)
}

impl RunMetrics {
    pub fn completed_trips(&self) -> usize {
        self.wait_times.len()
    }

    pub fn mean_wait_time(&self) -> Result<f64, MetricsError> {
        mean(&self.wait_times)
    }

    pub fn mean_ride_time(&self) -> Result<f64, MetricsError> {
        mean(&self.ride_times)
    }
}

impl From<RunOutcome> for RunMetrics {
    fn from(outcome: RunOutcome) -> Self {
        Self {
            wait_times: outcome.wait_times,
            ride_times: outcome.ride_times,
            dropped_riders: outcome.dropped_riders,
        }
    }
}

/// Averaged results for one swept value. Means are `None` when no rider
/// completed a trip across all repetitions of this point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPointResult {
    pub swept_value: f64,
    pub runs: u32,
    pub completed_trips: usize,
    pub mean_wait_time: Option<f64>,
    pub mean_ride_time: Option<f64>,
    /// Dropped riders per run, averaged across repetitions.
    pub mean_dropped_riders: f64,
}

impl SweepPointResult {
    /// Averages per-run metrics into one sweep point. Runs with zero
    /// completed trips contribute nothing to the time means.
    pub fn aggregate(swept_value: f64, runs: &[RunMetrics]) -> Self {
        let completed_trips: usize = runs.iter().map(RunMetrics::completed_trips).sum();
        let per_run_waits: Vec<f64> = runs
            .iter()
            .filter_map(|run| run.mean_wait_time().ok())
            .collect();
        let per_run_rides: Vec<f64> = runs
            .iter()
            .filter_map(|run| run.mean_ride_time().ok())
            .collect();
        let mean_of = |values: &[f64]| {
            if values.is_empty() {
                None
            } else {
                Some(values.iter().sum::<f64>() / values.len() as f64)
            }
        };
        let mean_dropped_riders = if runs.is_empty() {
            0.0
        } else {
            runs.iter().map(|run| run.dropped_riders as f64).sum::<f64>() / runs.len() as f64
        };

        Self {
            swept_value,
            runs: runs.len() as u32,
            completed_trips,
            mean_wait_time: mean_of(&per_run_waits),
            mean_ride_time: mean_of(&per_run_rides),
            mean_dropped_riders,
        }
    }
}
